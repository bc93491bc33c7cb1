//! Store types for page state
//!
//! Pages in the web app own these via `use_store`; views receive a
//! `ReadStore` and subscribe to individual fields through the generated lenses.

pub mod create_page;
pub mod dashboard;
pub mod edit_page;
pub mod gallery;
pub mod login;

pub use create_page::*;
pub use dashboard::*;
pub use edit_page::*;
pub use gallery::*;
pub use login::*;
