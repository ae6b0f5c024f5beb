//! Web layer for the browser-facing login flow.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Login form and submission handlers
//! - [`messages`] - Request-scoped one-shot notifications
//! - [`routes`] - Login route configuration

pub mod handlers;
pub mod messages;
pub mod routes;
