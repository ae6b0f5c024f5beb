//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CredentialRepository`] - Credential lookup and management

pub mod credential_repository;

pub use credential_repository::CredentialRepository;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
