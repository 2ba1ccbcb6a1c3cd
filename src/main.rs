//! Gym Roster - Entry Point
//!
//! Wires configuration, logging and CSV storage to the interactive
//! menu, then runs the menu on stdin/stdout until the user exits.
//!
//! Wiring sequence:
//! 1. Load config.toml if present, defaults otherwise
//! 2. Init tracing (stderr, so logs never interleave with the menu)
//! 3. Open the CSV repository in the data directory + health check
//! 4. Build RosterService and MenuSession
//! 5. Run the menu loop until exit or end of input

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{self, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gym_roster::adapters::console::Prompter;
use gym_roster::adapters::persistence::CsvRepository;
use gym_roster::config::AppSection;
use gym_roster::config::loader::load_config_or_default;
use gym_roster::ports::RosterRepository;
use gym_roster::usecases::{MenuSession, RosterService};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let (config, source) =
        load_config_or_default("config.toml").context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    init_tracing(&config.app);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        config = ?source,
        data_dir = %config.storage.data_dir,
        "Starting gym roster"
    );

    // ── 3. Open CSV storage ─────────────────────────────────
    let repo = Arc::new(
        CsvRepository::from_config(&config.storage)
            .await
            .context("Failed to open data directory")?,
    );
    if !repo.is_healthy().await {
        warn!(
            dir = %repo.data_dir().display(),
            "Data directory is not writable; saves will fail"
        );
    }

    // ── 4. Build the menu session ───────────────────────────
    let service = RosterService::with_chart(Arc::clone(&repo), config.chart.to_options());
    let prompter = Prompter::new(BufReader::new(io::stdin()), io::stdout());
    let mut session = MenuSession::new(service, prompter, config.menu.clone(), &config.app.name);

    // ── 5. Run until exit ───────────────────────────────────
    session.run().await?;

    info!("Session ended");
    Ok(())
}

/// Structured logging to stderr; `RUST_LOG` overrides the configured level.
fn init_tracing(app: &AppSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
