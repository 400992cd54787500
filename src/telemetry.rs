//! Global tracing bootstrap.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global fmt subscriber, writing to stderr.
///
/// Repeated calls are no-ops; only the first install wins.
pub fn init_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sessionprobe=info"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
            tracing::debug!(error = %error, "tracing subscriber already initialized");
        }
    });
}
