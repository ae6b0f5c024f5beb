//! Credential store implementations.
//!
//! # Repositories
//!
//! - [`PgCredentialRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryCredentialRepository`] - In-process storage for development and tests

pub mod memory_credential_repository;
pub mod pg_credential_repository;

pub use memory_credential_repository::MemoryCredentialRepository;
pub use pg_credential_repository::PgCredentialRepository;
