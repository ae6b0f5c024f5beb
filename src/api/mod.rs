//! JSON endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Health check and fallback handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
