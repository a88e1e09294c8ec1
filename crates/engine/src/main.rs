//! Chi War Engine - Main entry point.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chiwar_engine::cli::{self, Cli};
use chiwar_engine::infrastructure::scenario::load_catalog;
use chiwar_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; everything has a default.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    let mut config = EngineConfig::from_env()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(command = ?args.command, "Starting Chi War Engine");

    let catalog = load_catalog(config.archetypes_path.as_deref())
        .await
        .context("loading vehicle archetypes")?;
    let app = App::in_memory(&config, catalog);

    let result = cli::run(&app, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
