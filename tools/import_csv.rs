use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contact_intake::{ApplicationBuilder, Config};

/// Import contacts from a CSV file through the intake pipeline
#[derive(Parser)]
struct Cli {
    /// CSV file with a header row
    path: PathBuf,

    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().map_err(anyhow::Error::msg)?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let file = File::open(&cli.path)
        .with_context(|| format!("Failed to open {}", cli.path.display()))?;

    let builder = ApplicationBuilder::new(config)
        .with_database()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?
        .with_infrastructure()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let pool = builder.pool().cloned();
    let state = builder.build().map_err(|e| anyhow::anyhow!("{}", e))?;

    let report = state
        .import_use_case
        .execute(BufReader::new(file))
        .await
        .context("Import failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(pool) = pool {
        pool.close().await;
    }
    Ok(())
}
