//! Public gallery state

use dioxus::prelude::*;
use showcase_common::gallery::{GalleryQuery, LayoutType};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryState {
    pub query: GalleryQuery,
    pub layout: LayoutType,
    /// Gallery video open in the modal player
    pub active_video: Option<u32>,
    /// Flash message carried over from the previous page
    pub notice: Option<String>,
}
