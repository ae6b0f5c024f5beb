//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Credential check for login attempts

pub mod services;
