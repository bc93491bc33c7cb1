//! Video playback views

mod error;
mod modal;
mod player;

pub use error::VideoErrorView;
pub use modal::VideoModalView;
pub use player::VideoPlayer;
