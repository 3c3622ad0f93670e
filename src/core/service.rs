use crate::core::{ActivityStore, Confirmation, Directory};
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::validate_non_empty_string;

pub struct ActivityService<S: ActivityStore> {
    store: S,
}

impl<S: ActivityStore> ActivityService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_activities(&self) -> Result<Directory> {
        let directory = self.store.list()?;
        tracing::debug!("Listing {} activities", directory.len());
        Ok(directory)
    }

    pub fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation> {
        if let Err(e) = require_email(email) {
            log_rejection("signup", &e);
            return Err(e);
        }

        match self.store.sign_up(activity, email) {
            Ok(()) => {
                tracing::info!("✅ Signed up {} for {}", email, activity);
                Ok(Confirmation::signed_up(email, activity))
            }
            Err(e) => {
                log_rejection("signup", &e);
                Err(e)
            }
        }
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation> {
        if let Err(e) = require_email(email) {
            log_rejection("unregister", &e);
            return Err(e);
        }

        match self.store.unregister(activity, email) {
            Ok(()) => {
                tracing::info!("✅ Unregistered {} from {}", email, activity);
                Ok(Confirmation::unregistered(email, activity))
            }
            Err(e) => {
                log_rejection("unregister", &e);
                Err(e)
            }
        }
    }
}

fn require_email(email: &str) -> Result<()> {
    validate_non_empty_string("email", email).map_err(|_| SignupError::InvalidRequest {
        message: "Query parameter 'email' is required".to_string(),
    })
}

fn log_rejection(operation: &str, error: &SignupError) {
    match error.severity() {
        crate::utils::error::ErrorSeverity::Low => {
            tracing::warn!("⚠️ {} rejected: {}", operation, error)
        }
        _ => tracing::error!(
            "❌ {} failed: {} (Category: {:?})",
            operation,
            error,
            error.category()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::sample_directory;
    use crate::core::store::InMemoryActivityStore;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn service() -> ActivityService<InMemoryActivityStore> {
        ActivityService::new(InMemoryActivityStore::new(sample_directory()))
    }

    #[test]
    fn test_every_activity_lists_participants() {
        let service = service();
        let json = serde_json::to_value(service.list_activities().unwrap()).unwrap();

        for name in sample_directory().names() {
            assert!(json[name]["participants"].is_array(), "{}", name);
        }
    }

    #[test]
    fn test_chess_club_scenario() {
        let service = service();

        let confirmation = service
            .sign_up("Chess Club", "testuser@example.com")
            .unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up testuser@example.com for Chess Club"
        );

        let err = service
            .sign_up("Chess Club", "testuser@example.com")
            .unwrap_err();
        assert!(matches!(err, SignupError::AlreadySignedUp { .. }));

        let confirmation = service
            .unregister("Chess Club", "james@mergington.edu")
            .unwrap();
        assert_eq!(
            confirmation.message,
            "Unregistered james@mergington.edu from Chess Club"
        );
        let chess = service.list_activities().unwrap();
        assert!(!chess
            .get("Chess Club")
            .unwrap()
            .has_participant("james@mergington.edu"));

        let err = service
            .unregister("Chess Club", "not@registered.com")
            .unwrap_err();
        assert!(matches!(err, SignupError::NotSignedUp { .. }));
    }

    #[test]
    fn test_blank_email_is_invalid_request() {
        let service = service();

        let err = service.sign_up("Chess Club", "   ").unwrap_err();
        assert!(matches!(err, SignupError::InvalidRequest { .. }));

        let err = service.unregister("Chess Club", "").unwrap_err();
        assert!(matches!(err, SignupError::InvalidRequest { .. }));
    }

    #[test]
    fn test_missing_email_rejection_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let service = service();
            assert!(service.sign_up("Chess Club", " ").is_err());
            assert!(service.unregister("Chess Club", "").is_err());
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("signup rejected"), "{}", output);
        assert!(output.contains("unregister rejected"), "{}", output);
    }
}
