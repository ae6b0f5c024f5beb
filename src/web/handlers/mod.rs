//! HTML rendering handlers for the login flow.

mod login;

pub use login::{
    DashboardTemplate, INVALID_CREDENTIALS, LoginTemplate, login_form_handler,
    login_submit_handler,
};
