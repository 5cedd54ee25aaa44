use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use iris_xml::{Cli, ServerConfig, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();

    let config = match ServerConfig::from_cli(&cli) {
        Ok(config) => Arc::new(config),
        Err(err) => {
            eprintln!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    logging::init(&config);

    let listener = server::bind(&config)
        .await
        .context("Failed to start server")?;

    server::serve(listener, config, shutdown_signal())
        .await
        .context("Server error")?;

    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, stopping server...");
    }
}
