mod cli;
mod config;
mod ingest;
mod services;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(database) = cli.database.clone() {
        config.database_path = database;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .format_timestamp(None)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    log::debug!("Using store at {}", config.database_path.display());

    cli::run(cli.command, &config).await
}
