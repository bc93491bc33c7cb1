//! Edit-page form state

use dioxus::prelude::*;
use showcase_common::edit::EditDraft;

/// Navigation held back until the user confirms discarding changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingLeave {
    SwitchPage(String),
    Cancel,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct EditPageState {
    pub draft: EditDraft,
    /// Live feedback on the external URL input
    pub url_error: Option<String>,
    pub previewing: bool,
    pub preview_error: Option<String>,
    pub save_error: Option<String>,
    pub success: Option<String>,
    pub saving: bool,
    pub pending_leave: Option<PendingLeave>,
}
