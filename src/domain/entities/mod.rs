//! Core domain entities.
//!
//! - [`Credential`] - A stored username/password record
//! - [`LoginForm`] - Typed login input as submitted by a client
//! - [`LoginOutcome`] - Result of checking a login attempt

pub mod credential;
pub mod login;

pub use credential::{Credential, NewCredential};
pub use login::{LoginForm, LoginOutcome};
