//! Embedded prototype page

mod frame;
mod view;

pub use frame::PrototypeFrame;
pub use view::PrototypeView;
