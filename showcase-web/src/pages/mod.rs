mod create;
mod dashboard;
mod edit;
mod gallery;
mod layout;
mod login;
mod not_found;
mod player;
mod preview;
mod prototype;

pub use create::CreateNewPage;
pub use dashboard::AdminDashboard;
pub use edit::EditPageContent;
pub use gallery::{Home, HomeVideoGallery};
pub use layout::{AdminGuard, PublicLayout};
pub use login::AdminLogin;
pub use not_found::NotFound;
pub use player::FullScreenVideoPlayer;
pub use preview::Preview;
pub use prototype::FigmaPrototypeDisplay;

use crate::Route;
use dioxus::prelude::*;
use tracing::warn;

/// Push an in-app path. Paths the router does not know are logged and ignored.
pub(crate) fn go_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => warn!("Cannot navigate to {path}: {e}"),
    }
}

/// Like [`go_to`] but replaces the current history entry
pub(crate) fn replace_with(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().replace(route);
        }
        Err(e) => warn!("Cannot navigate to {path}: {e}"),
    }
}
