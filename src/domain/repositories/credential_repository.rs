//! Repository trait for credential records.

use crate::domain::entities::{Credential, NewCredential};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the credential store.
///
/// The login flow only calls [`CredentialRepository::exists`]; the remaining
/// operations back the `admin` CLI and the health check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCredentialRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryCredentialRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Checks whether at least one record has exactly this username and password.
    ///
    /// Comparison is case-sensitive with no normalization.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn exists(&self, username: &str, password: &str) -> Result<bool, AppError>;

    /// Stores a new credential record.
    ///
    /// Duplicate usernames are accepted.
    async fn create(&self, new_credential: NewCredential) -> Result<Credential, AppError>;

    /// Lists all records, newest first.
    async fn list(&self) -> Result<Vec<Credential>, AppError>;

    /// Finds a record by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, AppError>;

    /// Deletes a record.
    ///
    /// Returns `Ok(false)` if no record with this ID exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
