//! Admin login form - pure rendering over `ReadStore<LoginState>`

use crate::components::icons::{EyeIcon, EyeOffIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, TextField};
use crate::stores::login::{LoginState, LoginStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn LoginView(
    state: ReadStore<LoginState>,
    /// Credentials shown in the demo hint box
    demo_email: String,
    demo_password: String,
    on_email: EventHandler<String>,
    on_password: EventHandler<String>,
    on_remember: EventHandler<bool>,
    on_toggle_password: EventHandler<()>,
    on_forgot_password: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let email = state.email().read().clone();
    let password = state.password().read().clone();
    let remember = *state.remember().read();
    let show_password = *state.show_password().read();
    let field_errors = state.field_errors().read().clone();
    let auth_error = state.auth_error().read().clone();
    let submitting = *state.submitting().read();

    let password_type = if show_password { "text" } else { "password" };
    let toggle_label = if show_password { "Hide password" } else { "Show password" };
    let submit_label = if submitting { "Signing in..." } else { "Sign In" };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8",
            div { class: "max-w-md w-full space-y-8",
                div { class: "text-center",
                    h1 { class: "text-3xl font-bold text-white mb-2", "Admin Login" }
                    p { class: "text-gray-400",
                        "Sign in to access the portfolio administration panel"
                    }
                }
                div { class: "bg-gray-900 border border-gray-800 rounded-lg shadow-sm p-8",
                    form {
                        class: "space-y-6",
                        novalidate: true,
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            on_submit.call(());
                        },
                        TextField {
                            id: "login-email",
                            label: "Email Address",
                            input_type: "email",
                            value: email,
                            placeholder: Some("Enter your admin email".to_string()),
                            required: true,
                            autocomplete: Some("username"),
                            autofocus: true,
                            error: field_errors.email.map(|e| e.to_string()),
                            on_input: on_email,
                        }
                        div { class: "relative",
                            TextField {
                                id: "login-password",
                                label: "Password",
                                input_type: password_type,
                                value: password,
                                placeholder: Some("Enter your password".to_string()),
                                required: true,
                                autocomplete: Some("current-password"),
                                error: field_errors.password.map(|e| e.to_string()),
                                on_input: on_password,
                            }
                            button {
                                r#type: "button",
                                class: "absolute right-3 top-8 text-gray-500 hover:text-white",
                                tabindex: "-1",
                                aria_label: toggle_label,
                                onclick: move |_| on_toggle_password.call(()),
                                if show_password {
                                    EyeOffIcon { class: "w-4 h-4" }
                                } else {
                                    EyeIcon { class: "w-4 h-4" }
                                }
                            }
                        }
                        div { class: "flex items-center justify-between",
                            label { class: "flex items-center gap-2 cursor-pointer",
                                input {
                                    r#type: "checkbox",
                                    class: "h-4 w-4 rounded border-gray-600 bg-gray-800",
                                    checked: remember,
                                    onchange: move |e| on_remember.call(e.checked()),
                                }
                                span { class: "text-sm text-gray-400", "Remember me" }
                            }
                            button {
                                r#type: "button",
                                class: "text-sm text-blue-400 hover:text-blue-300",
                                onclick: move |_| on_forgot_password.call(()),
                                "Forgot password?"
                            }
                        }
                        if let Some(message) = auth_error {
                            div {
                                class: "p-3 bg-red-500/10 border border-red-500/20 rounded-md text-sm text-red-400",
                                role: "alert",
                                "{message}"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            r#type: Some("submit"),
                            full_width: true,
                            loading: submitting,
                            onclick: move |_| {},
                            "{submit_label}"
                        }
                    }
                    div { class: "mt-6 pt-6 border-t border-gray-800",
                        div { class: "p-3 bg-amber-500/10 border border-amber-500/20 rounded-md",
                            div { class: "text-xs text-amber-400 font-medium mb-2", "Demo Credentials" }
                            div { class: "text-xs text-gray-400 space-y-1",
                                div { "Email: {demo_email}" }
                                div { "Password: {demo_password}" }
                            }
                        }
                    }
                }
                p { class: "text-center text-xs text-gray-500",
                    "This is a secure admin area. Your session will expire after 24 hours of inactivity."
                }
            }
        }
    }
}
