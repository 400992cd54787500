//! Session handle identity and usability probing.

use std::fmt;
use std::sync::Arc;

use datafusion::execution::context::SessionContext;
use datafusion_common::{DataFusionError, Result};
use serde::{Deserialize, Serialize};

/// How a handle was obtained from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// First call for this name created the context.
    Created,
    /// A later call reused the existing context.
    Retrieved,
}

/// Opaque reference to a live processing context, keyed by application name.
///
/// The context is owned by the registry; handles are cheap clones over a
/// shared `Arc`.
#[derive(Clone)]
pub struct SessionHandle {
    app_name: String,
    provenance: Provenance,
    ctx: Arc<SessionContext>,
}

impl SessionHandle {
    pub(crate) fn new(
        app_name: impl Into<String>,
        provenance: Provenance,
        ctx: Arc<SessionContext>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            provenance,
            ctx,
        }
    }

    /// Application name this session is keyed by.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Whether this handle created the context or reused an existing one.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Underlying DataFusion context.
    pub fn context(&self) -> &Arc<SessionContext> {
        &self.ctx
    }

    /// Runs a one-row probe query to confirm the context is usable.
    pub async fn verify_usable(&self) -> Result<()> {
        let batches = self.ctx.sql("SELECT 1 AS probe").await?.collect().await?;
        let rows: usize = batches.iter().map(|batch| batch.num_rows()).sum();
        if rows == 1 {
            Ok(())
        } else {
            Err(DataFusionError::Execution(format!(
                "probe query returned {rows} rows for session '{}'",
                self.app_name
            )))
        }
    }

    /// Captures a metadata snapshot of the live session.
    pub fn stamp(&self) -> SessionStamp {
        let state = self.ctx.state();
        let config = state.config();
        SessionStamp {
            app_name: self.app_name.clone(),
            provenance: self.provenance,
            datafusion_version: datafusion::DATAFUSION_VERSION.to_string(),
            probe_version: env!("CARGO_PKG_VERSION").to_string(),
            target_partitions: config.target_partitions() as u32,
            batch_size: config.batch_size() as u32,
        }
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("app_name", &self.app_name)
            .field("provenance", &self.provenance)
            .finish_non_exhaustive()
    }
}

/// Version and tuning snapshot of a live session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStamp {
    pub app_name: String,
    pub provenance: Provenance,
    /// DataFusion version (e.g., "51.0.0")
    pub datafusion_version: String,
    /// This crate's version
    pub probe_version: String,
    pub target_partitions: u32,
    pub batch_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::factory::SessionFactory;
    use crate::session::profiles::SessionProfile;

    fn build_handle(app_name: &str, provenance: Provenance) -> SessionHandle {
        let ctx = SessionFactory::new(SessionProfile::default())
            .build()
            .unwrap();
        SessionHandle::new(app_name, provenance, Arc::new(ctx))
    }

    #[tokio::test]
    async fn test_handle_verifies_usable() {
        let handle = build_handle("TestSession", Provenance::Created);
        assert!(handle.verify_usable().await.is_ok());
    }

    #[test]
    fn test_stamp_captures_identity_and_tuning() {
        let handle = build_handle("TestSession", Provenance::Created);
        let stamp = handle.stamp();

        assert_eq!(stamp.app_name, "TestSession");
        assert_eq!(stamp.provenance, Provenance::Created);
        assert_eq!(stamp.datafusion_version, datafusion::DATAFUSION_VERSION);
        assert_eq!(stamp.probe_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(stamp.target_partitions, 2);
        assert_eq!(stamp.batch_size, 1024);
    }

    #[test]
    fn test_stamp_serialization() {
        let stamp = build_handle("TestSession", Provenance::Retrieved).stamp();
        let json = serde_json::to_string(&stamp).unwrap();
        let deserialized: SessionStamp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.app_name, stamp.app_name);
        assert_eq!(deserialized.provenance, Provenance::Retrieved);
    }
}
