//! Login form and submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Response},
};

use crate::domain::entities::{LoginForm, LoginOutcome};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::messages::{Message, Messages};

/// Notification shown when a login attempt is rejected.
pub const INVALID_CREDENTIALS: &str = "INVALID USERNAME OR PASSWORD";

/// Template for the login form.
///
/// Renders `templates/log.html` with any pending notifications.
#[derive(Template, WebTemplate)]
#[template(path = "log.html")]
pub struct LoginTemplate {
    pub messages: Vec<Message>,
}

impl LoginTemplate {
    pub fn new(messages: Messages) -> Self {
        Self {
            messages: messages.drain(),
        }
    }
}

/// Template for the post-login landing page.
///
/// Renders `templates/dash.html`. No data is passed in.
#[derive(Template, WebTemplate)]
#[template(path = "dash.html")]
pub struct DashboardTemplate {}

/// Renders the login form.
///
/// # Endpoint
///
/// `GET /` and `GET /login`
pub async fn login_form_handler(messages: Messages) -> impl IntoResponse {
    LoginTemplate::new(messages)
}

/// Checks submitted credentials and renders the outcome.
///
/// # Endpoint
///
/// `POST /` and `POST /login` with form fields `username` and `password`
///
/// # Responses
///
/// - **200** `dash.html` when the pair matches a stored record
/// - **200** `log.html` with [`INVALID_CREDENTIALS`] otherwise
///
/// A body that cannot be parsed as a form is handled like a form with no
/// fields, so it is rejected the same way as a wrong password.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the credential store fails.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    mut messages: Messages,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable login form");
            LoginForm::default()
        }
    };

    let outcome = state.login_service.attempt(&form).await?;

    let response = match outcome {
        LoginOutcome::Authenticated => DashboardTemplate {}.into_response(),
        LoginOutcome::Rejected => {
            messages.error(INVALID_CREDENTIALS);
            LoginTemplate::new(messages).into_response()
        }
    };

    Ok(response)
}
