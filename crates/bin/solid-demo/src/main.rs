//! # solid-demo — SOLID tour runner
//!
//! Runs the five demonstrations and exits. Takes no arguments.

use std::sync::Arc;

use anyhow::Context;
use solid_adapter_console::StdoutConsole;
use solid_app::ports::Console;
use solid_demo::config::Config;
use solid_demo::{demos, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    logging::init(&config.logging).context("failed to initialise logging")?;

    tracing::info!("starting SOLID tour");

    let console: Arc<dyn Console> = Arc::new(StdoutConsole::new());

    // The user lookup is left running on its own; its line may land anywhere
    // in the output, or not at all if the process exits first.
    drop(demos::run_all(&console));

    tracing::info!("SOLID tour finished");
    Ok(())
}
