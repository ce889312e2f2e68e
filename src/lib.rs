pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, OutputFormat, DEFAULT_MATRIX_URL};
pub use core::{engine::SpiralEngine, pipeline::MatrixPipeline};
pub use utils::error::{Result, SpiralError};
