#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use credential_login::domain::entities::{Credential, NewCredential};
use credential_login::domain::repositories::CredentialRepository;
use credential_login::error::AppError;
use credential_login::infrastructure::persistence::MemoryCredentialRepository;
use credential_login::routes::router;
use credential_login::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub const LOGIN_FORM_MARKER: &str = r#"id="login-form""#;
pub const DASHBOARD_MARKER: &str = r#"id="dashboard""#;
pub const INVALID_CREDENTIALS: &str = "INVALID USERNAME OR PASSWORD";

pub fn create_test_state(pairs: &[(&str, &str)]) -> AppState {
    let repository = MemoryCredentialRepository::with_credentials(pairs.iter().copied());
    AppState::from_repository(Arc::new(repository))
}

pub fn make_server(pairs: &[(&str, &str)]) -> TestServer {
    TestServer::new(router(create_test_state(pairs))).unwrap()
}

pub fn make_failing_server() -> TestServer {
    let state = AppState::from_repository(Arc::new(FailingCredentialRepository));
    TestServer::new(router(state)).unwrap()
}

/// Credential store whose every operation fails.
pub struct FailingCredentialRepository;

fn storage_error() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl CredentialRepository for FailingCredentialRepository {
    async fn exists(&self, _username: &str, _password: &str) -> Result<bool, AppError> {
        Err(storage_error())
    }

    async fn create(&self, _new_credential: NewCredential) -> Result<Credential, AppError> {
        Err(storage_error())
    }

    async fn list(&self) -> Result<Vec<Credential>, AppError> {
        Err(storage_error())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Credential>, AppError> {
        Err(storage_error())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(storage_error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_error())
    }
}
