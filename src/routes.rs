//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET|POST /`        - Login form and credential check
//! - `GET|POST /login`   - Same as `/`
//! - `GET  /health`      - Health check (credential store)
//! - `/static/*`         - Static assets
//!
//! Unknown paths return a JSON `404`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and layers without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
