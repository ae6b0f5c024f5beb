//! Login input and outcome types.

use serde::Deserialize;
use std::fmt;

/// Form fields submitted with a login attempt.
///
/// Both fields are optional: a field absent from the request body is `None`,
/// while a field submitted with no text is `Some("")`.
#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Returns the submitted pair when both fields are present.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.username.as_deref()?, self.password.as_deref()?))
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Outcome of a login attempt.
///
/// A rejected attempt is not an error: wrong credentials, unknown users and
/// missing fields all collapse into [`LoginOutcome::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Authenticated => "authenticated",
            LoginOutcome::Rejected => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_requires_both_fields() {
        assert_eq!(
            LoginForm::new("alice", "secret").pair(),
            Some(("alice", "secret"))
        );

        let missing_password = LoginForm {
            username: Some("alice".to_string()),
            password: None,
        };
        assert_eq!(missing_password.pair(), None);
        assert_eq!(LoginForm::default().pair(), None);
    }

    #[test]
    fn test_pair_keeps_empty_strings() {
        assert_eq!(LoginForm::new("", "").pair(), Some(("", "")));
    }

    #[test]
    fn test_debug_hides_password() {
        let out = format!("{:?}", LoginForm::new("alice", "secret"));
        assert!(out.contains("alice"));
        assert!(!out.contains("secret"));
    }
}
