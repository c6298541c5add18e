//! Field game client binary.
//!
//! Composition root: loads content, starts the runtime with a logging audio
//! sink, and hands the terminal to the event loop.
//!
//! # Environment
//!
//! - `FIELD_DATA_DIR`: load content from disk instead of the embedded set
//! - `FIELD_GAME_SEED`: fixed session seed
//! - `FIELD_SESSION_ID`, `FIELD_LOG_DIR`: log location
//! - `RUST_LOG`: log filter (default `info`)

mod app;
mod audio;
mod config;
mod input;
mod logging;
mod presentation;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{OracleManager, Runtime};

use crate::app::App;
use crate::audio::LoggingAudioSink;
use crate::config::ClientConfig;
use crate::presentation::terminal::{self, TerminalGuard};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config)?;

    tracing::info!("Starting field client");

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::builtin(),
    };
    match factory.data_dir() {
        Some(dir) => tracing::info!("Content directory: {}", dir.display()),
        None => tracing::info!("Using embedded content"),
    }
    let content = factory.load_all().context("failed to load game content")?;

    let runtime = Runtime::builder()
        .config(config.runtime.clone())
        .oracles(OracleManager::from_content(content))
        .audio(LoggingAudioSink)
        .build()
        .await
        .context("failed to start runtime")?;

    tracing::info!("Runtime built successfully");

    let result = {
        let mut tui = terminal::init()?;
        let _terminal_guard = TerminalGuard;
        App::new(runtime.handle()).run(&mut tui).await
    };

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    result
}
