use crate::core::fetcher::Fetcher;
use crate::core::parser::GridParser;
use crate::core::spiral::spiral_order;
use crate::core::{ConfigProvider, FlatResult, Matrix, Pipeline};
use crate::utils::error::Result;

pub struct MatrixPipeline<C: ConfigProvider> {
    config: C,
    fetcher: Fetcher,
    parser: GridParser,
}

impl<C: ConfigProvider> MatrixPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            fetcher: Fetcher::new(),
            parser: GridParser::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for MatrixPipeline<C> {
    async fn fetch(&self) -> Result<String> {
        // The fetcher contains its own failures; an empty body stands in
        // for every transport or status fault.
        Ok(self.fetcher.fetch(self.config.matrix_url()).await)
    }

    async fn parse(&self, body: &str) -> Result<Matrix> {
        self.parser.parse(body)
    }

    async fn traverse(&self, matrix: Matrix) -> Result<FlatResult> {
        Ok(spiral_order(&matrix))
    }
}
