//! Create-page form sections
//!
//! Each section renders a slice of the [`PageConfig`] draft and reports
//! changes as [`PageEdit`] messages; the page applies them and re-validates.
//!
//! [`PageConfig`]: showcase_common::page::PageConfig
//! [`PageEdit`]: showcase_common::page::PageEdit

mod advanced;
mod content_type;
mod navigation;
mod save;
mod section;
mod setup;
mod template;
mod view;

pub use advanced::AdvancedOptionsSection;
pub use content_type::ContentTypeSection;
pub use navigation::NavigationSection;
pub use save::SavePublishSection;
pub use setup::PageSetupSection;
pub use template::TemplateSection;
pub use view::CreatePageView;
