//! Login route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_form_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET  /`, `GET  /login` - Login form
/// - `POST /`, `POST /login` - Credential check, renders dashboard or form with error
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_form_handler).post(login_submit_handler))
        .route("/login", get(login_form_handler).post(login_submit_handler))
}
