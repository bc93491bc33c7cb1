//! showcase-ui - view components and stores for the showcase web app
//!
//! Components are props-driven. Pages in `showcase-web` own the stores and
//! pass callbacks down, so everything here renders without a router.

pub mod components;
pub mod stores;
pub mod timing;
pub mod wasm_utils;

pub use components::*;
