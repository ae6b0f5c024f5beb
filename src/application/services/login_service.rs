//! Login decision service.

use std::sync::Arc;

use crate::domain::entities::{LoginForm, LoginOutcome};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Decides whether a login attempt is accepted.
///
/// An attempt is accepted if and only if the credential store holds a record
/// whose username and password equal the submitted values exactly. The service
/// holds no state between calls, so repeating an attempt always yields the
/// same outcome for the same store contents.
pub struct LoginService {
    repository: Arc<dyn CredentialRepository>,
}

impl LoginService {
    pub fn new(repository: Arc<dyn CredentialRepository>) -> Self {
        Self { repository }
    }

    /// Checks a login attempt against the credential store.
    ///
    /// A form with a missing field is rejected without querying the store,
    /// since stored usernames and passwords are never absent. Empty strings are
    /// present values and are looked up like any other.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the credential store fails.
    pub async fn attempt(&self, form: &LoginForm) -> Result<LoginOutcome, AppError> {
        let Some((username, password)) = form.pair() else {
            tracing::warn!(
                username_present = form.username.is_some(),
                password_present = form.password.is_some(),
                "Login rejected: incomplete form"
            );
            return Ok(LoginOutcome::Rejected);
        };

        let outcome = if self.repository.exists(username, password).await? {
            LoginOutcome::Authenticated
        } else {
            LoginOutcome::Rejected
        };

        match outcome {
            LoginOutcome::Authenticated => tracing::info!(%username, "Login accepted"),
            LoginOutcome::Rejected => tracing::warn!(%username, "Login rejected"),
        }

        Ok(outcome)
    }

    /// Checks that the credential store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCredentialRepository;
    use serde_json::json;

    fn service(mock_repo: MockCredentialRepository) -> LoginService {
        LoginService::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_attempt_authenticated() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_exists()
            .withf(|username, password| username == "alice" && password == "secret")
            .times(1)
            .returning(|_, _| Ok(true));

        let outcome = service(mock_repo)
            .attempt(&LoginForm::new("alice", "secret"))
            .await
            .unwrap();

        assert_eq!(outcome, LoginOutcome::Authenticated);
    }

    #[tokio::test]
    async fn test_attempt_rejected_when_no_match() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_exists()
            .times(1)
            .returning(|_, _| Ok(false));

        let outcome = service(mock_repo)
            .attempt(&LoginForm::new("alice", "wrong"))
            .await
            .unwrap();

        assert_eq!(outcome, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn test_attempt_missing_field_skips_store() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo.expect_exists().never();

        let svc = service(mock_repo);

        let no_password = LoginForm {
            username: Some("alice".to_string()),
            password: None,
        };
        assert_eq!(
            svc.attempt(&no_password).await.unwrap(),
            LoginOutcome::Rejected
        );
        assert_eq!(
            svc.attempt(&LoginForm::default()).await.unwrap(),
            LoginOutcome::Rejected
        );
    }

    #[tokio::test]
    async fn test_attempt_passes_empty_strings_through() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_exists()
            .withf(|username, password| username.is_empty() && password.is_empty())
            .times(1)
            .returning(|_, _| Ok(false));

        let outcome = service(mock_repo)
            .attempt(&LoginForm::new("", ""))
            .await
            .unwrap();

        assert_eq!(outcome, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn test_attempt_repeated_failure_is_stable() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_exists()
            .times(3)
            .returning(|_, _| Ok(false));

        let svc = service(mock_repo);
        let form = LoginForm::new("bob", "secret");

        for _ in 0..3 {
            assert_eq!(svc.attempt(&form).await.unwrap(), LoginOutcome::Rejected);
        }
    }

    #[tokio::test]
    async fn test_attempt_propagates_store_error() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_exists()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let result = service(mock_repo)
            .attempt(&LoginForm::new("alice", "secret"))
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_health_check_delegates_to_ping() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(()));

        assert!(service(mock_repo).health_check().await.is_ok());
    }
}
