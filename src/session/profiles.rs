//! Tuning profiles for probe session construction.
//!
//! Maps workload classes to concrete DataFusion runtime parameters.

use serde::{Deserialize, Serialize};

/// Workload classification for the session being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadClass {
    /// Smoke checks and CI probes
    Light,
    /// Interactive analytical sessions
    Standard,
    /// Batch workloads
    Heavy,
}

/// Concrete session tuning parameters.
///
/// Controls DataFusion runtime sizing for the context under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    /// Workload classification
    pub class: WorkloadClass,
    /// Number of target partitions for parallel execution
    pub target_partitions: u32,
    /// Batch size for Arrow record batches
    pub batch_size: u32,
    /// Memory pool size in bytes for execution
    pub memory_pool_bytes: u64,
}

impl SessionProfile {
    /// Creates a profile from a workload class with class-appropriate tuning.
    pub fn from_class(class: WorkloadClass) -> Self {
        match class {
            WorkloadClass::Light => Self {
                class,
                target_partitions: 2,
                batch_size: 1024,
                memory_pool_bytes: 64 * 1024 * 1024, // 64 MB
            },
            WorkloadClass::Standard => Self {
                class,
                target_partitions: 4,
                batch_size: 8192,
                memory_pool_bytes: 512 * 1024 * 1024, // 512 MB
            },
            WorkloadClass::Heavy => Self {
                class,
                target_partitions: 8,
                batch_size: 16384,
                memory_pool_bytes: 2 * 1024 * 1024 * 1024, // 2 GB
            },
        }
    }
}

impl Default for SessionProfile {
    /// A probe wants the smallest footprint that still exercises the engine.
    fn default() -> Self {
        Self::from_class(WorkloadClass::Light)
    }
}
