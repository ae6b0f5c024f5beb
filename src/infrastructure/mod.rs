//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Credential store implementations (PostgreSQL and in-memory)

pub mod persistence;
