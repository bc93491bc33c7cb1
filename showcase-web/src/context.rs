//! App-wide context: auth, site config, the logged-in user and flash messages

use crate::storage::BrowserStore;
use dioxus::prelude::*;
use showcase_common::auth::{AdminUser, AuthContext};
use showcase_common::config::SiteConfig;
use std::rc::Rc;

const SITE_YAML: &str = include_str!("../site.yaml");

/// Built once in [`crate::App`] and shared through context
#[derive(Clone)]
pub struct AppServices {
    pub auth: AuthContext,
    pub config: Rc<SiteConfig>,
}

impl AppServices {
    pub fn from_browser() -> Self {
        let config = SiteConfig::load_or_default(SITE_YAML);
        let auth = AuthContext::new(Rc::new(BrowserStore::local()), &config);
        Self {
            auth,
            config: Rc::new(config),
        }
    }
}

/// Reactive mirror of the stored session, so headers update on login/logout.
///
/// Seeded from [`AuthContext::current_user`], which is `Some` whenever the
/// logged-in flag is set. The user record only feeds the header's name and email.
#[derive(Clone, Copy)]
pub struct SessionUser(pub Signal<Option<AdminUser>>);

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.0.read().is_some()
    }
}

/// One-shot message shown by the next page that takes it
#[derive(Clone, Copy)]
pub struct Flash(Signal<Option<String>>);

impl Flash {
    pub fn new(signal: Signal<Option<String>>) -> Self {
        Self(signal)
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    pub fn take(&mut self) -> Option<String> {
        self.0.write().take()
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_session_user() -> SessionUser {
    use_context::<SessionUser>()
}

pub fn use_flash() -> Flash {
    use_context::<Flash>()
}
