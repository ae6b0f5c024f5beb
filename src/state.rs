//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::domain::repositories::CredentialRepository;

/// Immutable, cheaply cloneable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self { login_service }
    }

    /// Builds the state around a credential repository.
    pub fn from_repository(repository: Arc<dyn CredentialRepository>) -> Self {
        Self::new(Arc::new(LoginService::new(repository)))
    }
}
