//! DataFusion session availability probe.
//!
//! Verifies that requesting a named processing session from the engine
//! succeeds and yields a usable, non-null handle.
//!
//! Design principles:
//! 1. Builder-first session construction via SessionStateBuilder
//! 2. Get-or-create keyed by application name, one context per name
//! 3. Explicit registry lifecycle (close / scoped acquisition) instead of
//!    implicit process-lifetime teardown
//! 4. Two failure kinds only: creation error and unavailable handle

pub mod check;
pub mod error;
pub mod session;
pub mod telemetry;

pub use check::{check_session_available, SESSION_READY_BANNER};
pub use error::ProbeError;
pub use session::handle::SessionHandle;
pub use session::registry::SessionRegistry;
