//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod create_page;
pub mod dashboard;
pub mod edit_page;
pub mod error_banner;
pub mod form;
pub mod gallery;
pub mod headers;
pub mod helpers;
pub mod icons;
pub mod image;
pub mod login;
pub mod modal;
pub mod not_found;
pub mod preview;
pub mod prototype;
pub mod video;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use create_page::CreatePageView;
pub use dashboard::DashboardView;
pub use edit_page::EditPageView;
pub use error_banner::{ErrorBanner, SuccessBanner};
pub use form::{Checkbox, SelectField, SelectOption, TextArea, TextField};
pub use gallery::GalleryView;
pub use headers::{AdminHeaderView, PublicHeaderView};
pub use helpers::{ConfirmDialogView, ErrorDisplay, LoadingSpinner, PageContainer};
pub use image::FallbackImage;
pub use login::LoginView;
pub use modal::Modal;
pub use not_found::NotFoundView;
pub use preview::PreviewView;
pub use prototype::PrototypeView;
pub use video::{VideoErrorView, VideoModalView, VideoPlayer};
