//! Session availability probe entry point.
//!
//! Usage:
//!   sessionprobe                 Check the default "TestSession" session
//!   sessionprobe <APP_NAME>      Check a session keyed by APP_NAME

use anyhow::Result;
use clap::Parser;

use sessionprobe::{check_session_available, telemetry, SessionRegistry};

/// Verify that a named processing session can be created or retrieved.
#[derive(Debug, Parser)]
#[command(name = "sessionprobe", version, about)]
struct Cli {
    /// Application name the session is keyed by.
    #[arg(default_value = "TestSession")]
    app_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let registry = SessionRegistry::global();
    check_session_available(registry, &cli.app_name)?;

    // Presence plus a one-row probe; a broken context fails the process too.
    let handle = registry.get_or_create(&cli.app_name)?;
    handle.verify_usable().await?;
    tracing::debug!(stamp = ?handle.stamp(), "session metadata");

    Ok(())
}
