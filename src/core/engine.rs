use crate::core::Pipeline;
use crate::domain::model::FlatResult;
use crate::utils::error::Result;

pub struct SpiralEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SpiralEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<FlatResult> {
        tracing::info!("Fetching grid...");
        let body = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} bytes", body.len());

        tracing::info!("Parsing grid...");
        let matrix = self.pipeline.parse(&body).await?;

        if matrix.is_empty() {
            tracing::warn!("Matrix is empty, skipping traversal");
            return Ok(Vec::new());
        }
        tracing::info!(
            "Parsed {}x{} matrix",
            matrix.row_count(),
            matrix.col_count()
        );

        tracing::info!("Traversing in spiral order...");
        let flat = self.pipeline.traverse(matrix).await?;
        tracing::info!("Produced {} values", flat.len());

        Ok(flat)
    }
}
