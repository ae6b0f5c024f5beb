//! Data transfer objects for JSON endpoints.

pub mod health;
