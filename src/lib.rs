pub(crate) mod cli;
pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod token;
pub(crate) mod types;
pub(crate) mod utils;
pub(crate) mod views;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::core::error::Error;
use crate::core::{config::Args, state::AppState};

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let state = AppState::new(&config)?;

    tracing::debug!("using API at {}", config.api_base);

    // dropping the command future cancels any loads still in flight
    tokio::select! {
        result = cli::execute(&state, cli.command) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            Ok(())
        }
    }
}
