//! Process-wide get-or-create session registry with explicit teardown.
//!
//! One live context per application name. The registry is an explicit object
//! passed by reference; `global()` exists for direct invocation but teardown
//! is always available via `close` or scoped acquisition.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use datafusion::execution::context::SessionContext;
use datafusion_common::Result;
use tracing::{debug, info};

use super::factory::SessionFactory;
use super::handle::{Provenance, SessionHandle};
use super::profiles::SessionProfile;
use super::SessionBackend;

static GLOBAL_REGISTRY: OnceLock<SessionRegistry> = OnceLock::new();

/// Registry of live processing contexts keyed by application name.
pub struct SessionRegistry {
    factory: SessionFactory,
    sessions: Mutex<HashMap<String, Arc<SessionContext>>>,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions are built with `profile`.
    pub fn new(profile: SessionProfile) -> Self {
        Self {
            factory: SessionFactory::new(profile),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide registry used by direct invocation.
    ///
    /// Initialized on first use with the default profile; lives for the rest
    /// of the process unless sessions are closed explicitly.
    pub fn global() -> &'static SessionRegistry {
        GLOBAL_REGISTRY.get_or_init(|| SessionRegistry::new(SessionProfile::default()))
    }

    /// Idempotent get-or-create keyed by application name.
    ///
    /// The second call with the same name returns a handle over the same
    /// underlying context. Any name the engine accepts is valid here,
    /// including the empty string.
    pub fn get_or_create(&self, app_name: &str) -> Result<SessionHandle> {
        let mut sessions = self.sessions.lock().expect("session map lock poisoned");

        if let Some(ctx) = sessions.get(app_name) {
            debug!(app_name, "reusing existing session context");
            return Ok(SessionHandle::new(
                app_name,
                Provenance::Retrieved,
                Arc::clone(ctx),
            ));
        }

        let ctx = Arc::new(self.factory.build()?);
        sessions.insert(app_name.to_string(), Arc::clone(&ctx));
        info!(app_name, "created session context");
        Ok(SessionHandle::new(app_name, Provenance::Created, ctx))
    }

    /// Get-or-create with release guaranteed on all exit paths.
    ///
    /// The returned guard closes the named session when dropped.
    pub fn acquire_scoped(&self, app_name: &str) -> Result<ScopedSession<'_>> {
        let handle = self.get_or_create(app_name)?;
        Ok(ScopedSession {
            registry: self,
            handle,
        })
    }

    /// Tears down the named session. Returns whether one existed.
    pub fn close(&self, app_name: &str) -> bool {
        let removed = self
            .sessions
            .lock()
            .expect("session map lock poisoned")
            .remove(app_name)
            .is_some();
        if removed {
            info!(app_name, "closed session context");
        }
        removed
    }

    /// Tears down every session in the registry.
    pub fn close_all(&self) {
        self.sessions
            .lock()
            .expect("session map lock poisoned")
            .clear();
    }

    /// Names of live sessions, sorted.
    pub fn active_sessions(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .sessions
            .lock()
            .expect("session map lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl SessionBackend for SessionRegistry {
    fn get_or_create(&self, app_name: &str) -> Result<Option<SessionHandle>> {
        SessionRegistry::get_or_create(self, app_name).map(Some)
    }
}

/// Guard over a registry session; closes it on drop.
pub struct ScopedSession<'a> {
    registry: &'a SessionRegistry,
    handle: SessionHandle,
}

impl ScopedSession<'_> {
    /// Handle over the acquired session.
    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }
}

impl Drop for ScopedSession<'_> {
    fn drop(&mut self) {
        self.registry.close(self.handle.app_name());
    }
}
