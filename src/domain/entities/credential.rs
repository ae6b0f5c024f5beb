//! Domain entity representing a stored login credential.

use chrono::{DateTime, Utc};
use std::fmt;

/// A username/password pair that grants access to the dashboard.
///
/// Passwords are stored and compared as plaintext. Usernames are not unique:
/// several records may share a username, and a login succeeds if any of them
/// matches the submitted pair exactly.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Returns `true` if this record matches the pair byte for byte.
    ///
    /// No trimming, case folding or Unicode normalization is applied.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"***")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input data for creating a new credential record.
#[derive(Clone)]
pub struct NewCredential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NewCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCredential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
