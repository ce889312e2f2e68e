pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Upstream endpoint serving the bordered grid.
pub const DEFAULT_MATRIX_URL: &str =
    "https://raw.githubusercontent.com/avito-tech/python-trainee-assignment/main/matrix.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "matrix-spiral")]
#[command(about = "Fetches a bordered integer grid over HTTP and flattens it in spiral order")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_MATRIX_URL)]
    pub matrix_url: String,

    #[arg(long, help = "Directory to also write the rendered result into")]
    pub output_path: Option<String>,

    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn matrix_url(&self) -> &str {
        &self.matrix_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("matrix_url", &self.matrix_url)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
