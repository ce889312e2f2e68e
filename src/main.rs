use clap::Parser;
use matrix_spiral::core::Storage;
use matrix_spiral::utils::{logger, validation::Validate};
use matrix_spiral::{CliConfig, LocalStorage, MatrixPipeline, OutputFormat, SpiralEngine};

fn render(values: &[i64], format: OutputFormat) -> matrix_spiral::Result<String> {
    match format {
        OutputFormat::Plain => Ok(values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => Ok(serde_json::to_string(values)?),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting matrix-spiral");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let pipeline = MatrixPipeline::new(config.clone());
    let engine = SpiralEngine::new(pipeline);

    match engine.run().await {
        Ok(flat) => {
            let rendered = render(&flat, config.format)?;
            println!("{}", rendered);

            if let Some(path) = &config.output_path {
                let file_name = match config.format {
                    OutputFormat::Plain => "spiral.txt",
                    OutputFormat::Json => "spiral.json",
                };
                let storage = LocalStorage::new(path.clone());
                storage.write_file(file_name, rendered.as_bytes()).await?;
                tracing::info!("Result saved to {}/{}", path, file_name);
            }
        }
        Err(e) => {
            // Transport and status faults degrade to an empty result inside
            // the pipeline; only grid-format faults land here and they are
            // fatal for the invocation.
            tracing::error!("Pipeline failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
