//! Failure taxonomy for the availability probe.

use datafusion_common::DataFusionError;
use thiserror::Error;

/// Exactly two failure kinds; both propagate unmodified to the caller.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The engine's get-or-create call itself failed.
    #[error("session get-or-create failed for '{app_name}': {source}")]
    SessionCreation {
        app_name: String,
        #[source]
        source: DataFusionError,
    },

    /// The call returned, but no handle came back.
    #[error("engine returned no session handle for '{app_name}'")]
    SessionUnavailable { app_name: String },
}
