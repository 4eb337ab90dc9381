//! FitTrack - Single-user Fitness Tracker
//!
//! Main entry point for the application.

use anyhow::Context;
use fittrack::storage::config::load_config;
use fittrack::{Database, Menu};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    let db_path = config.database_path();

    let db = Database::open(&db_path, config.database.seed_sample_data)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let stdin = std::io::stdin();
    let mut menu = Menu::new(stdin.lock(), std::io::stdout());
    menu.run(db).context("Menu terminated unexpectedly")?;

    Ok(())
}
