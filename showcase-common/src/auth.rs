//! Mock admin authentication over a pluggable key-value session store

use crate::config::SiteConfig;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

pub const LOGGED_IN_KEY: &str = "isAdminLoggedIn";
pub const ADMIN_USER_KEY: &str = "adminUser";
pub const REMEMBER_KEY: &str = "rememberAdminLogin";

/// Where a successful login lands when no redirect was requested
pub const DEFAULT_ADMIN_ROUTE: &str = "/admin-dashboard";
pub const LOGIN_ROUTE: &str = "/admin-login";

/// String key-value storage that survives reloads (browser local storage in the app)
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Problems with the login form itself, reported before any credential check
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFormError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Per-field form errors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<LoginFormError>,
    pub password: Option<LoginFormError>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("Login failed. Please try again.")]
    Unavailable,
}

pub const PASSWORD_MIN_CHARS: usize = 6;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Form-level checks that run before credentials are compared.
pub fn check_login_form(credentials: &Credentials) -> LoginFormErrors {
    let email = if credentials.email.is_empty() {
        Some(LoginFormError::EmailRequired)
    } else if !email_pattern().is_match(&credentials.email) {
        Some(LoginFormError::EmailInvalid)
    } else {
        None
    };

    let password = if credentials.password.is_empty() {
        Some(LoginFormError::PasswordRequired)
    } else if credentials.password.chars().count() < PASSWORD_MIN_CHARS {
        Some(LoginFormError::PasswordTooShort)
    } else {
        None
    };

    LoginFormErrors { email, password }
}

/// Record stored under [`ADMIN_USER_KEY`] after login.
///
/// Display data only. Every field tolerates being absent so a record written
/// by another client still parses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
}

/// Pick the route to land on after login.
///
/// Only same-site absolute paths are honored; the login page itself and
/// anything else fall back to the dashboard.
pub fn redirect_target(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with(LOGIN_ROUTE) =>
        {
            path.to_string()
        }
        _ => DEFAULT_ADMIN_ROUTE.to_string(),
    }
}

/// Login URL that returns to `from` afterwards
pub fn login_url_for(from: &str) -> String {
    format!(
        "{LOGIN_ROUTE}?redirect={}",
        url::form_urlencoded::byte_serialize(from.as_bytes()).collect::<String>()
    )
}

/// Admin session state, built once at startup and shared through context.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<dyn SessionStore>,
    email: String,
    password: String,
    display_name: String,
}

impl AuthContext {
    pub fn new(store: Rc<dyn SessionStore>, config: &SiteConfig) -> Self {
        Self {
            store,
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
            display_name: config.admin_name.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// The logged-in admin. `Some` exactly when [`Self::is_admin`] holds.
    ///
    /// The stored user record only supplies display data; a missing or
    /// malformed record falls back to the configured admin identity.
    pub fn current_user(&self) -> Option<AdminUser> {
        if !self.is_admin() {
            return None;
        }
        let stored = self.store.get(ADMIN_USER_KEY).and_then(|raw| {
            serde_json::from_str::<AdminUser>(&raw)
                .map_err(|e| warn!("Ignoring malformed {ADMIN_USER_KEY}: {e}"))
                .ok()
        });
        let mut user = stored.unwrap_or_default();
        if user.email.is_empty() {
            user.email = self.email.clone();
        }
        if user.name.is_empty() {
            user.name = self.display_name.clone();
        }
        Some(user)
    }

    pub fn remembered(&self) -> bool {
        self.store.get(REMEMBER_KEY).as_deref() == Some("true")
    }

    /// Compare credentials with the configured pair and open a session on match.
    pub fn login(
        &self,
        credentials: &Credentials,
        remember: bool,
        now: DateTime<Utc>,
    ) -> Result<AdminUser, AuthError> {
        if credentials.email != self.email || credentials.password != self.password {
            warn!("Rejected admin login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let user = AdminUser {
            email: credentials.email.clone(),
            name: self.display_name.clone(),
            login_time: Some(now),
        };
        let json = serde_json::to_string(&user).map_err(|e| {
            warn!("Failed to serialize admin user: {e}");
            AuthError::Unavailable
        })?;

        self.store.set(LOGGED_IN_KEY, "true");
        self.store.set(ADMIN_USER_KEY, &json);
        if remember {
            self.store.set(REMEMBER_KEY, "true");
        }
        info!("Admin logged in as {}", user.email);
        Ok(user)
    }

    pub fn logout(&self) {
        self.store.remove(LOGGED_IN_KEY);
        self.store.remove(ADMIN_USER_KEY);
        info!("Admin logged out");
    }
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context() -> (Rc<MemoryStore>, AuthContext) {
        let store = Rc::new(MemoryStore::new());
        let auth = AuthContext::new(store.clone(), &SiteConfig::default());
        (store, auth)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 3, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_form_checks() {
        let errors = check_login_form(&Credentials::default());
        assert_eq!(errors.email, Some(LoginFormError::EmailRequired));
        assert_eq!(errors.password, Some(LoginFormError::PasswordRequired));

        let errors = check_login_form(&Credentials::new("admin@local", "12345"));
        assert_eq!(errors.email, Some(LoginFormError::EmailInvalid));
        assert_eq!(errors.password, Some(LoginFormError::PasswordTooShort));

        let errors = check_login_form(&Credentials::new("a b@x.io", "123456"));
        assert_eq!(errors.email, Some(LoginFormError::EmailInvalid));

        assert!(check_login_form(&Credentials::new("someone@x.io", "123456")).is_empty());
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            LoginFormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password. Please try again."
        );
    }

    #[test]
    fn test_login_sets_session() {
        let (store, auth) = context();
        assert!(!auth.is_admin());

        let user = auth
            .login(
                &Credentials::new("admin@enterprise-ux.com", "admin123"),
                false,
                now(),
            )
            .unwrap();
        assert_eq!(user.name, "Admin User");
        assert!(auth.is_admin());
        assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(auth.current_user(), Some(user));
        assert!(!auth.remembered());

        let raw = store.get(ADMIN_USER_KEY).unwrap();
        assert!(raw.contains("\"loginTime\""));
    }

    #[test]
    fn test_wrong_credentials_leave_session_unset() {
        let (store, auth) = context();
        let result = auth.login(
            &Credentials::new("admin@enterprise-ux.com", "wrong-pass"),
            true,
            now(),
        );
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(!auth.is_admin());
        assert_eq!(store.get(REMEMBER_KEY), None);
    }

    #[test]
    fn test_remember_and_logout() {
        let (store, auth) = context();
        auth.login(
            &Credentials::new("admin@enterprise-ux.com", "admin123"),
            true,
            now(),
        )
        .unwrap();
        assert!(auth.remembered());

        auth.logout();
        assert!(!auth.is_admin());
        assert_eq!(store.get(ADMIN_USER_KEY), None);
        assert!(auth.remembered());
    }

    #[test]
    fn test_flag_must_be_exactly_true() {
        let (store, auth) = context();
        store.set(LOGGED_IN_KEY, "yes");
        assert!(!auth.is_admin());
        assert_eq!(auth.current_user(), None);
        store.set(LOGGED_IN_KEY, "true");
        assert!(auth.is_admin());
        assert!(auth.current_user().is_some());
    }

    #[test]
    fn test_flag_alone_yields_configured_identity() {
        let (store, auth) = context();
        store.set(LOGGED_IN_KEY, "true");
        let user = auth.current_user().unwrap();
        assert_eq!(user.email, "admin@enterprise-ux.com");
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.login_time, None);

        store.set(ADMIN_USER_KEY, "not json");
        assert_eq!(auth.current_user().unwrap().name, "Admin User");
    }

    #[test]
    fn test_user_record_without_login_time_parses() {
        let (store, auth) = context();
        store.set(LOGGED_IN_KEY, "true");
        store.set(
            ADMIN_USER_KEY,
            r#"{"email":"ops@enterprise-ux.com","name":"Ops"}"#,
        );
        let user = auth.current_user().unwrap();
        assert_eq!(user.email, "ops@enterprise-ux.com");
        assert_eq!(user.name, "Ops");
        assert_eq!(user.login_time, None);

        auth.logout();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(None), "/admin-dashboard");
        assert_eq!(
            redirect_target(Some("/create-new-page")),
            "/create-new-page"
        );
        assert_eq!(redirect_target(Some("https://evil.test")), "/admin-dashboard");
        assert_eq!(redirect_target(Some("//evil.test")), "/admin-dashboard");
        assert_eq!(redirect_target(Some("/admin-login")), "/admin-dashboard");
    }

    #[test]
    fn test_login_url_encodes_path() {
        assert_eq!(
            login_url_for("/edit-page-content"),
            "/admin-login?redirect=%2Fedit-page-content"
        );
    }
}
