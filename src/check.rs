//! Session smoke check: get-or-create a named session, verify the handle.

use tracing::info;

use crate::error::ProbeError;
use crate::session::SessionBackend;

/// Confirmation line printed when the session handle is present.
pub const SESSION_READY_BANNER: &str = "✅ Spark Session Created Successfully!";

/// Requests the named session from the backend and verifies a handle came
/// back.
///
/// Single-shot: no retry, no local recovery. A backend failure surfaces as
/// [`ProbeError::SessionCreation`]; a null-equivalent return surfaces as
/// [`ProbeError::SessionUnavailable`]. The confirmation line is printed only
/// on success.
pub fn check_session_available(
    backend: &dyn SessionBackend,
    app_name: &str,
) -> Result<(), ProbeError> {
    let handle = backend
        .get_or_create(app_name)
        .map_err(|source| ProbeError::SessionCreation {
            app_name: app_name.to_string(),
            source,
        })?
        .ok_or_else(|| ProbeError::SessionUnavailable {
            app_name: app_name.to_string(),
        })?;

    info!(
        app_name,
        provenance = ?handle.provenance(),
        "session handle present"
    );
    println!("{SESSION_READY_BANNER}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use datafusion_common::{DataFusionError, Result};

    use super::*;
    use crate::session::handle::SessionHandle;
    use crate::session::profiles::SessionProfile;
    use crate::session::registry::SessionRegistry;

    struct NullBackend;

    impl SessionBackend for NullBackend {
        fn get_or_create(&self, _app_name: &str) -> Result<Option<SessionHandle>> {
            Ok(None)
        }
    }

    struct FailingBackend;

    impl SessionBackend for FailingBackend {
        fn get_or_create(&self, _app_name: &str) -> Result<Option<SessionHandle>> {
            Err(DataFusionError::Execution("engine offline".to_string()))
        }
    }

    #[test]
    fn test_check_succeeds_against_healthy_backend() {
        let registry = SessionRegistry::new(SessionProfile::default());
        assert!(check_session_available(&registry, "TestSession").is_ok());
    }

    #[test]
    fn test_check_is_repeatable_in_one_process() {
        let registry = SessionRegistry::new(SessionProfile::default());
        assert!(check_session_available(&registry, "TestSession").is_ok());
        assert!(check_session_available(&registry, "TestSession").is_ok());
        assert_eq!(registry.active_sessions(), vec!["TestSession"]);
    }

    #[test]
    fn test_null_handle_reports_unavailable() {
        let err = check_session_available(&NullBackend, "TestSession").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::SessionUnavailable { ref app_name } if app_name == "TestSession"
        ));
    }

    #[test]
    fn test_backend_failure_reports_creation_error() {
        let err = check_session_available(&FailingBackend, "TestSession").unwrap_err();
        match err {
            ProbeError::SessionCreation { app_name, source } => {
                assert_eq!(app_name, "TestSession");
                assert!(source.to_string().contains("engine offline"));
            }
            other => panic!("expected SessionCreation, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_is_exact() {
        assert_eq!(SESSION_READY_BANNER, "✅ Spark Session Created Successfully!");
    }
}
