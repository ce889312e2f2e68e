use crate::domain::model::{FlatResult, Matrix};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn matrix_url(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    async fn parse(&self, body: &str) -> Result<Matrix>;
    async fn traverse(&self, matrix: Matrix) -> Result<FlatResult>;
}
