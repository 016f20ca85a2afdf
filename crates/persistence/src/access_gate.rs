//! Admin access gate.
//!
//! A single persisted flag that is set when the submitted credentials match
//! the configured pair and cleared on logout. There is no session expiry and
//! nothing ties the flag to a particular client; it only decides whether admin
//! routes are served.

use std::sync::Arc;

use domain::services::access::AdminCredentials;
use tracing::{error, info, warn};

use crate::keys;
use crate::metrics::record_write_failure;
use crate::storage::KeyValueStorage;

const FLAG_SET: &str = "true";

pub struct AccessGate {
    storage: Arc<dyn KeyValueStorage>,
    credentials: AdminCredentials,
}

impl AccessGate {
    pub fn new(storage: Arc<dyn KeyValueStorage>, credentials: AdminCredentials) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// Sets the flag on an exact credential match. A mismatch changes nothing.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if !self.credentials.matches(email, password) {
            warn!(email, "Admin login rejected");
            return false;
        }

        if let Err(e) = self.storage.set_item(keys::ADMIN_AUTHENTICATED, FLAG_SET) {
            error!(error = %e, "Failed to persist admin flag");
            record_write_failure(keys::ADMIN_AUTHENTICATED);
        }
        info!(email, "Admin logged in");
        true
    }

    pub fn logout(&self) {
        if let Err(e) = self.storage.remove_item(keys::ADMIN_AUTHENTICATED) {
            error!(error = %e, "Failed to clear admin flag");
            record_write_failure(keys::ADMIN_AUTHENTICATED);
        }
        info!("Admin logged out");
    }

    /// Whether the flag is currently set. An unreadable flag counts as unset.
    pub fn is_authenticated(&self) -> bool {
        match self.storage.get_item(keys::ADMIN_AUTHENTICATED) {
            Ok(value) => value.as_deref() == Some(FLAG_SET),
            Err(e) => {
                warn!(error = %e, "Failed to read admin flag");
                false
            }
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("email", &self.credentials.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn gate() -> (Arc<MemoryStorage>, AccessGate) {
        let storage = Arc::new(MemoryStorage::new());
        let gate = AccessGate::new(storage.clone(), AdminCredentials::default());
        (storage, gate)
    }

    #[test]
    fn test_starts_unauthenticated() {
        let (_, gate) = gate();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_wrong_credentials_leave_flag_untouched() {
        let (storage, gate) = gate();
        assert!(!gate.login("admin@mkevents.com", "wrong"));
        assert!(!gate.is_authenticated());
        assert_eq!(storage.get_item(keys::ADMIN_AUTHENTICATED).unwrap(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let (storage, gate) = gate();
        assert!(gate.login("admin@mkevents.com", "admin123"));
        assert!(gate.is_authenticated());
        assert_eq!(
            storage.get_item(keys::ADMIN_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );

        // A failed attempt after login does not log the admin out.
        assert!(!gate.login("someone@else.com", "admin123"));
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_flag_persists_across_gates() {
        let (storage, gate) = gate();
        gate.login("admin@mkevents.com", "admin123");
        let other = AccessGate::new(storage, AdminCredentials::default());
        assert!(other.is_authenticated());
    }

    #[test]
    fn test_only_exact_true_counts() {
        let (storage, gate) = gate();
        storage.set_item(keys::ADMIN_AUTHENTICATED, "false").unwrap();
        assert!(!gate.is_authenticated());
        storage.set_item(keys::ADMIN_AUTHENTICATED, "TRUE").unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_configured_credentials() {
        let storage = Arc::new(MemoryStorage::new());
        let gate = AccessGate::new(storage, AdminCredentials::new("ops@mk.test", "s3cret"));
        assert!(!gate.login("admin@mkevents.com", "admin123"));
        assert!(gate.login("ops@mk.test", "s3cret"));
    }
}
