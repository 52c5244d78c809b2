use anyhow::{Context, Result};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking::{config::Config, console, AppState};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Логи в stderr, чтобы не мешать меню в stdout
    let filter = tracing_subscriber::EnvFilter::new(&config.app.rust_log);
    if config.is_json_logging() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    info!("Starting cinema booking console");

    let mut state = AppState::new(config).context("Failed to initialise application state")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut state, stdin.lock(), stdout.lock()).context("Console session failed")?;

    info!("Shutting down");
    Ok(())
}
