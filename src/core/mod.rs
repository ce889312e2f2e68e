pub mod engine;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod spiral;

pub use crate::domain::model::{FlatResult, Matrix};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
