pub mod auth;
pub mod catalog;
pub mod config;
pub mod edit;
pub mod gallery;
pub mod page;
pub mod player;
pub mod prototype;
pub mod slug;
pub mod validation;
pub mod viewer;

pub use auth::{AuthContext, AuthError, MemoryStore, SessionStore};
pub use config::{ConfigError, SiteConfig};
pub use page::{ContentType, PageConfig, PageRecord, PublishStatus};
pub use slug::{derive_slug, SlugField};
pub use validation::{validate, Field, ValidationErrors, ValidationMode};
pub use viewer::{ViewerEvent, ViewerMachine};
