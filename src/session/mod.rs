//! Session construction, identity, and lifecycle.

pub mod factory;
pub mod handle;
pub mod profiles;
pub mod registry;

use datafusion_common::Result;

use self::handle::SessionHandle;

/// Contract consumed from the processing engine: get-or-create a session
/// keyed by application name.
///
/// `None` models the engine's null-equivalent return. [`registry::SessionRegistry`]
/// is the production implementation; tests substitute backends that return
/// `None` or fail outright.
pub trait SessionBackend: Send + Sync {
    fn get_or_create(&self, app_name: &str) -> Result<Option<SessionHandle>>;
}
