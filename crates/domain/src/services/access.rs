//! Admin credentials for the access gate.
//!
//! This is a routing convenience, not a security boundary: there is exactly
//! one credential pair, it ships with the binary, and a successful login only
//! flips a persisted flag.

use serde::Deserialize;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@mkevents.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Message shown when a login attempt does not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials. (Try: admin@mkevents.com / admin123)";

/// The single accepted credential pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
    }
}

/// Login form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
