//! Public video gallery

mod filter_bar;
mod hero;
mod layout_selector;
mod video_card;
mod view;

pub use filter_bar::FilterBar;
pub use hero::HeroSection;
pub use layout_selector::LayoutSelector;
pub use video_card::VideoCard;
pub use view::GalleryView;
