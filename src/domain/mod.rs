//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Credential records and login input/outcome types
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the web or persistence layers.
//! Login decisions are made in [`crate::application::services::LoginService`].

pub mod entities;
pub mod repositories;
