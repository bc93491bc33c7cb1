//! Browser storage behind the [`SessionStore`] seam
//!
//! Storage can be missing (private mode, sandboxed frames) or throw on write.
//! Failures are logged and otherwise ignored.

use showcase_common::auth::SessionStore;
use showcase_common::page::PreviewData;
use tracing::warn;

/// Session storage key holding the create-page preview draft
pub const PREVIEW_KEY: &str = "previewPageData";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

fn storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        StorageArea::Local => window.local_storage(),
        StorageArea::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

/// [`SessionStore`] over `localStorage` or `sessionStorage`
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        storage(self.area)?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = storage(self.area) else {
            warn!("{:?} storage unavailable, dropping {key}", self.area);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("Failed to write {key}: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage(self.area) {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn store_preview(data: &PreviewData) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(data)?;
    BrowserStore::session().set(PREVIEW_KEY, &json);
    Ok(())
}

pub fn load_preview() -> Option<PreviewData> {
    let raw = BrowserStore::session().get(PREVIEW_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Ignoring malformed preview data: {e}");
            None
        }
    }
}
