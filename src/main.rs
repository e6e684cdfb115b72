//! hello-metrics HTTP server
//!
//! Starts an Axum web server exposing the greeting and metrics endpoints.

use clap::Parser;
use hello_metrics::{
    cli::{Cli, Command, generate_config_template},
    config::Config,
    server, telemetry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        let template = generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                println!("Wrote configuration template to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    telemetry::init(&config.observability.log_level);

    tracing::info!(
        "Starting hello-metrics server on {}:{}",
        config.server.host,
        config.server.port
    );

    server::run(&config).await?;

    Ok(())
}
