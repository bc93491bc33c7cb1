//! Create-page form state

use dioxus::prelude::*;
use showcase_common::page::PageConfig;
use showcase_common::validation::ValidationErrors;

/// Save action currently waiting on simulated latency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveAction {
    Draft,
    Publish,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CreatePageState {
    pub page: PageConfig,
    pub errors: ValidationErrors,
    pub pending: Option<SaveAction>,
    /// Failure not tied to a field
    pub general_error: Option<String>,
}
