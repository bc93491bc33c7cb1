use dioxus::prelude::*;
use showcase_common::auth::LoginFormErrors;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub remember: bool,
    pub show_password: bool,
    pub field_errors: LoginFormErrors,
    /// Credential mismatch, shown above the form
    pub auth_error: Option<String>,
    pub submitting: bool,
}
