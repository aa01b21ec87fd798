//! Courtship headless playthrough entry point.

use std::error::Error;

use courtship_cli::config::CliConfig;
use courtship_cli::playthrough;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = CliConfig::from_env()?;
    tracing::info!(path = %config.sequence_path.display(), "Starting Courtship playthrough");

    let report = playthrough::run(&config).await?;
    println!("{}", report.to_json()?);

    Ok(())
}
