//! docsift CLI - Extract per-sentence features from PDF documents.

use clap::Parser;
use docsift_cli::commands;
use docsift_cli::{Cli, Command, Config, Formatter};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> docsift_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so JSON on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let timeout = cli
        .timeout_secs
        .or(config.settings.timeout_secs)
        .map(Duration::from_secs);

    match cli.command {
        Command::Files(args) => {
            commands::execute_files(args, &formatter)?;
        }
        Command::Extract(args) => {
            let extractor = commands::build_extractor(config.extractor)?;
            commands::execute_extract(args, extractor, timeout, &formatter).await?;
        }
        Command::Batch(args) => {
            let extractor = commands::build_extractor(config.extractor)?;
            commands::execute_batch(args, extractor, timeout, &formatter).await?;
        }
    }

    Ok(())
}
