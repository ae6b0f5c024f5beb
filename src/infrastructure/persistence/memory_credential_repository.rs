//! In-memory implementation of the credential repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Credential, NewCredential};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Credential store kept in process memory.
///
/// Used when `CREDENTIAL_STORE=memory` and in handler tests. Records are lost
/// on restart.
#[derive(Default)]
pub struct MemoryCredentialRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: Vec<Credential>,
    last_id: i64,
}

impl MemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(username, password)` pairs.
    pub fn with_credentials<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        let mut inner = Inner::default();
        for (username, password) in pairs {
            inner.insert(NewCredential {
                username: username.into(),
                password: password.into(),
            });
        }

        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl Inner {
    fn insert(&mut self, new_credential: NewCredential) -> Credential {
        self.last_id += 1;
        let credential = Credential {
            id: self.last_id,
            username: new_credential.username,
            password: new_credential.password,
            created_at: Utc::now(),
        };
        self.records.push(credential.clone());
        credential
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    async fn exists(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().any(|c| c.matches(username, password)))
    }

    async fn create(&self, new_credential: NewCredential) -> Result<Credential, AppError> {
        Ok(self.inner.write().await.insert(new_credential))
    }

    async fn list(&self) -> Result<Vec<Credential>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|c| c.id != id);
        Ok(inner.records.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_credential(username: &str, password: &str) -> NewCredential {
        NewCredential {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_exists_exact_match() {
        let repo = MemoryCredentialRepository::with_credentials([("alice", "secret")]);

        assert!(repo.exists("alice", "secret").await.unwrap());
        assert!(!repo.exists("alice", "wrong").await.unwrap());
        assert!(!repo.exists("bob", "secret").await.unwrap());
        assert!(!repo.exists("ALICE", "secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_with_duplicate_usernames() {
        let repo =
            MemoryCredentialRepository::with_credentials([("alice", "one"), ("alice", "two")]);

        assert!(repo.exists("alice", "one").await.unwrap());
        assert!(repo.exists("alice", "two").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_pair_only_matches_empty_record() {
        let repo = MemoryCredentialRepository::with_credentials([("alice", "secret")]);
        assert!(!repo.exists("", "").await.unwrap());

        repo.create(new_credential("", "")).await.unwrap();
        assert!(repo.exists("", "").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MemoryCredentialRepository::new();

        let first = repo.create(new_credential("a", "1")).await.unwrap();
        let second = repo.create(new_credential("b", "2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = MemoryCredentialRepository::with_credentials([("a", "1"), ("b", "2")]);

        let items = repo.list().await.unwrap();
        let names: Vec<_> = items.iter().map(|c| c.username.as_str()).collect();

        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_find_and_delete() {
        let repo = MemoryCredentialRepository::with_credentials([("alice", "secret")]);

        let found = repo.find_by_id(1).await.unwrap();
        assert_eq!(found.map(|c| c.username), Some("alice".to_string()));

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert!(!repo.exists("alice", "secret").await.unwrap());
    }
}
