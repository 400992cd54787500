//! Session factory for deterministic SessionContext construction.
//!
//! Uses SessionStateBuilder for builder-first session creation with no
//! post-build mutation.

use std::sync::Arc;

use datafusion::execution::context::SessionContext;
use datafusion::execution::disk_manager::{DiskManagerBuilder, DiskManagerMode};
use datafusion::execution::memory_pool::FairSpillPool;
use datafusion::execution::runtime_env::RuntimeEnvBuilder;
use datafusion::execution::session_state::SessionStateBuilder;
use datafusion::prelude::SessionConfig;
use datafusion_common::{DataFusionError, Result};

use super::profiles::SessionProfile;

/// Factory for building probe sessions.
///
/// Constructs SessionContext via SessionStateBuilder with all configuration
/// applied upfront.
pub struct SessionFactory {
    profile: SessionProfile,
}

impl SessionFactory {
    /// Creates a new SessionFactory with the given tuning profile.
    pub fn new(profile: SessionProfile) -> Self {
        Self { profile }
    }

    /// Tuning profile this factory builds with.
    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    /// Builds a SessionContext tuned by the factory profile.
    ///
    /// Construction order:
    /// 1. Build RuntimeEnv with memory pool and disk manager
    /// 2. Build SessionConfig with typed configuration
    /// 3. Build SessionState via SessionStateBuilder
    /// 4. Create SessionContext from state
    pub fn build(&self) -> Result<SessionContext> {
        let pool_bytes: usize = self.profile.memory_pool_bytes.try_into().map_err(|_| {
            DataFusionError::Configuration(format!(
                "memory pool size {} exceeds addressable memory",
                self.profile.memory_pool_bytes
            ))
        })?;
        let memory_pool = Arc::new(FairSpillPool::new(pool_bytes));
        let disk_manager_builder =
            DiskManagerBuilder::default().with_mode(DiskManagerMode::OsTmpDirectory);

        let runtime = RuntimeEnvBuilder::default()
            .with_memory_pool(memory_pool)
            .with_disk_manager_builder(disk_manager_builder)
            .build_arc()?;

        let mut config = SessionConfig::new()
            .with_default_catalog_and_schema("sessionprobe", "public")
            .with_information_schema(true)
            .with_target_partitions(self.profile.target_partitions as usize)
            .with_batch_size(self.profile.batch_size as usize);

        // Typed config mutation via options_mut()
        let config_opts = config.options_mut();
        config_opts.execution.coalesce_batches = true;

        // Canonical lowercase, no normalization surprises
        config_opts.sql_parser.enable_ident_normalization = false;

        let state = SessionStateBuilder::new()
            .with_default_features()
            .with_config(config)
            .with_runtime_env(runtime)
            .build();

        Ok(SessionContext::new_with_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::profiles::{SessionProfile, WorkloadClass};

    #[tokio::test]
    async fn test_factory_builds_usable_context() {
        let factory = SessionFactory::new(SessionProfile::default());
        let ctx = factory.build().unwrap();

        let sql_result = ctx.sql("SELECT 1 as test").await;
        assert!(sql_result.is_ok());
    }

    #[tokio::test]
    async fn test_factory_applies_profile_tuning() {
        let light = SessionFactory::new(SessionProfile::from_class(WorkloadClass::Light));
        let heavy = SessionFactory::new(SessionProfile::from_class(WorkloadClass::Heavy));

        let light_ctx = light.build().unwrap();
        let heavy_ctx = heavy.build().unwrap();

        assert_eq!(light_ctx.state().config().target_partitions(), 2);
        assert_eq!(light_ctx.state().config().batch_size(), 1024);
        assert_eq!(heavy_ctx.state().config().target_partitions(), 8);
        assert_eq!(heavy_ctx.state().config().batch_size(), 16384);
    }
}
