use super::replace_with;
use crate::context::{use_services, use_session_user};
use chrono::Utc;
use dioxus::prelude::*;
use showcase_common::auth::{check_login_form, redirect_target, Credentials};
use showcase_ui::stores::login::{LoginState, LoginStateStoreExt};
use showcase_ui::timing::{sleep_ms, use_task_slot};
use showcase_ui::wasm_utils::alert;
use showcase_ui::LoginView;

#[component]
pub fn AdminLogin(redirect: String) -> Element {
    let services = use_services();
    let mut session = use_session_user();
    let state = use_store(LoginState::default);
    let mut request = use_task_slot();

    // Already signed in: skip the form
    let target = redirect_target(Some(redirect.as_str()).filter(|r| !r.is_empty()));
    let signed_in = session.is_admin();
    let landing = target.clone();
    use_effect(move || {
        if signed_in {
            replace_with(&landing);
        }
    });

    let demo_email = services.config.admin_email.clone();
    let demo_password = services.config.admin_password.clone();
    let login_ms = services.config.latency.login_ms;
    let auth = services.auth.clone();

    let on_submit = move |_: ()| {
        if *state.submitting().peek() {
            return;
        }
        let credentials = Credentials::new(
            state.email().peek().clone(),
            state.password().peek().clone(),
        );
        let errors = check_login_form(&credentials);
        if !errors.is_empty() {
            state.field_errors().set(errors);
            return;
        }
        state.field_errors().set(Default::default());
        state.auth_error().set(None);
        state.submitting().set(true);

        let remember = *state.remember().peek();
        let auth = auth.clone();
        let target = target.clone();
        let mut slot = request;
        request.start(async move {
            sleep_ms(login_ms).await;
            match auth.login(&credentials, remember, Utc::now()) {
                Ok(user) => {
                    session.0.set(Some(user));
                    replace_with(&target);
                }
                Err(e) => state.auth_error().set(Some(e.to_string())),
            }
            state.submitting().set(false);
            slot.finish();
        });
    };

    rsx! {
        LoginView {
            state,
            demo_email,
            demo_password,
            on_email: move |email: String| {
                state.email().set(email);
                state.field_errors().write().email = None;
            },
            on_password: move |password: String| {
                state.password().set(password);
                state.field_errors().write().password = None;
            },
            on_remember: move |remember: bool| state.remember().set(remember),
            on_toggle_password: move |_| {
                let shown = *state.show_password().peek();
                state.show_password().set(!shown);
            },
            on_forgot_password: move |_| alert("Password reset instructions would be sent to your email."),
            on_submit,
        }
    }
}
