//! Page configuration model used by the create-page workflow

use crate::slug::SlugField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length before validation complains
pub const TITLE_MAX_CHARS: usize = 60;
/// Maximum meta description length before validation complains
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
/// Upper bound for the navigation menu order input
pub const MENU_ORDER_MAX: u32 = 100;

/// Defines a string-backed option enum with `as_str`, `label`, `parse`
/// and an `ALL` list for rendering selects.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable identifier used in URLs, storage and select values
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

option_enum! {
    /// What kind of content a page shows
    ContentType {
        VideoTemplate => ("video-template", "Video Template"),
        PrototypeTemplate => ("prototype-template", "Prototype Template"),
        External => ("external", "External URL"),
        Custom => ("custom", "Custom Page"),
    }
}

option_enum! {
    GridLayout {
        Grid3 => ("grid-3", "3 Column Grid"),
        Grid4 => ("grid-4", "4 Column Grid"),
        Masonry => ("masonry", "Masonry Layout"),
    }
}

option_enum! {
    AspectRatio {
        Widescreen => ("16:9", "16:9 (Widescreen)"),
        Standard => ("4:3", "4:3 (Standard)"),
        Square => ("1:1", "1:1 (Square)"),
    }
}

option_enum! {
    /// How an embedded prototype scales inside its container
    ScalingMode {
        Responsive => ("responsive", "Responsive Scaling"),
        Fixed => ("fixed", "Fixed Dimensions"),
        Fill => ("fill", "Fill Container"),
    }
}

option_enum! {
    MenuPosition {
        MainNav => ("main-nav", "Main Navigation"),
        Footer => ("footer", "Footer Menu"),
        Hidden => ("hidden", "Hidden"),
    }
}

option_enum! {
    /// Section a page can be grouped under
    ParentPage {
        Portfolio => ("portfolio", "Portfolio"),
        CaseStudies => ("case-studies", "Case Studies"),
        About => ("about", "About"),
    }
}

option_enum! {
    PublishStatus {
        Draft => ("draft", "Draft"),
        Published => ("published", "Published"),
        Scheduled => ("scheduled", "Scheduled"),
    }
}

option_enum! {
    AccessLevel {
        Public => ("public", "Public"),
        Authenticated => ("authenticated", "Authenticated Users"),
        Admin => ("admin", "Admin Only"),
    }
}

/// Content-type specific settings. Only the fields relevant to the selected
/// content type are shown or validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub grid_layout: GridLayout,
    pub hover_preview: bool,
    pub auto_mute: bool,
    pub show_duration: bool,
    /// Raw input text, pixels
    pub thumbnail_height: String,
    pub aspect_ratio: AspectRatio,
    pub prototype_url: String,
    pub scaling: ScalingMode,
    pub show_controls: bool,
    pub allow_fullscreen: bool,
    pub show_external_link: bool,
    pub container_height: String,
    pub mobile_height: String,
    pub external_url: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            grid_layout: GridLayout::Grid3,
            hover_preview: false,
            auto_mute: true,
            show_duration: false,
            thumbnail_height: "200".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
            prototype_url: String::new(),
            scaling: ScalingMode::Responsive,
            show_controls: true,
            allow_fullscreen: true,
            show_external_link: false,
            container_height: "600".to_string(),
            mobile_height: "400".to_string(),
            external_url: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    pub menu_position: MenuPosition,
    pub parent_page: Option<ParentPage>,
    /// Empty means "use the page title"
    pub nav_label: String,
    pub menu_order: u32,
    pub menu_icon: String,
    pub show_in_nav: bool,
    pub show_in_sitemap: bool,
    pub require_auth: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            menu_position: MenuPosition::MainNav,
            parent_page: None,
            nav_label: String::new(),
            menu_order: 0,
            menu_icon: String::new(),
            show_in_nav: true,
            show_in_sitemap: true,
            require_auth: false,
        }
    }
}

impl NavigationConfig {
    /// Parse the menu order input. Anything unparsable is 0, large values clamp.
    pub fn set_menu_order_input(&mut self, input: &str) {
        self.menu_order = input.trim().parse::<u32>().unwrap_or(0).min(MENU_ORDER_MAX);
    }

    /// Label shown in menus: the custom label, or the page title
    pub fn effective_label<'a>(&'a self, title: &'a str) -> &'a str {
        let label = self.nav_label.trim();
        if label.is_empty() {
            title
        } else {
            label
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishState {
    pub status: PublishStatus,
    /// `YYYY-MM-DD` as produced by a date input
    pub publish_date: String,
    /// `HH:MM` as produced by a time input
    pub publish_time: String,
    pub access_level: AccessLevel,
}

impl Default for PublishState {
    fn default() -> Self {
        Self {
            status: PublishStatus::Draft,
            publish_date: String::new(),
            publish_time: String::new(),
            access_level: AccessLevel::Public,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    pub custom_route: String,
    /// Comma-separated dynamic route parameters
    pub route_params: String,
    pub allow_indexing: bool,
    pub enable_analytics: bool,
    pub social_previews: bool,
    pub lazy_loading: bool,
    pub preload_resources: bool,
    pub enable_caching: bool,
    /// Space-separated CSS classes for the page container
    pub custom_classes: String,
}

impl Default for AdvancedOptions {
    fn default() -> Self {
        Self {
            custom_route: String::new(),
            route_params: String::new(),
            allow_indexing: true,
            enable_analytics: true,
            social_previews: false,
            lazy_loading: true,
            preload_resources: false,
            enable_caching: true,
            custom_classes: String::new(),
        }
    }
}

impl AdvancedOptions {
    /// Route parameters split on commas, trimmed, empties dropped
    pub fn route_param_list(&self) -> Vec<String> {
        self.route_params
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// In-memory draft of a page being created
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub title: String,
    pub slug: SlugField,
    pub meta_description: String,
    pub content_type: Option<ContentType>,
    pub template: TemplateConfig,
    pub navigation: NavigationConfig,
    pub publish: PublishState,
    pub advanced: AdvancedOptions,
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the title and let the slug follow it if it is still automatic.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug.on_title_change(&self.title);
    }

    /// Direct slug edit from the user
    pub fn edit_slug(&mut self, input: &str) {
        self.slug.on_user_edit(input, &self.title);
    }

    /// Whether the draft has enough filled in to attempt publishing.
    pub fn can_publish(&self) -> bool {
        let Some(content_type) = self.content_type else {
            return false;
        };
        !self.title.is_empty()
            && !self.slug.value().is_empty()
            && (content_type != ContentType::PrototypeTemplate
                || !self.template.prototype_url.is_empty())
    }

    /// Setup step of the progress indicator is complete
    pub fn setup_complete(&self) -> bool {
        !self.title.is_empty() && !self.slug.value().is_empty()
    }

    /// Public path the page will live at once published
    pub fn preview_path(&self) -> String {
        let slug = self.slug.value();
        if slug.is_empty() {
            "/portfolio/your-page-slug".to_string()
        } else {
            format!("/portfolio/{slug}")
        }
    }

    pub fn apply(&mut self, edit: PageEdit) {
        match edit {
            PageEdit::Title(title) => self.set_title(title),
            PageEdit::Slug(input) => self.edit_slug(&input),
            PageEdit::MetaDescription(text) => self.meta_description = text,
            PageEdit::ContentType(content_type) => self.content_type = content_type,
            PageEdit::GridLayout(v) => self.template.grid_layout = v,
            PageEdit::HoverPreview(v) => self.template.hover_preview = v,
            PageEdit::AutoMute(v) => self.template.auto_mute = v,
            PageEdit::ShowDuration(v) => self.template.show_duration = v,
            PageEdit::ThumbnailHeight(v) => self.template.thumbnail_height = v,
            PageEdit::AspectRatio(v) => self.template.aspect_ratio = v,
            PageEdit::PrototypeUrl(v) => self.template.prototype_url = v,
            PageEdit::Scaling(v) => self.template.scaling = v,
            PageEdit::ShowControls(v) => self.template.show_controls = v,
            PageEdit::AllowFullscreen(v) => self.template.allow_fullscreen = v,
            PageEdit::ShowExternalLink(v) => self.template.show_external_link = v,
            PageEdit::ContainerHeight(v) => self.template.container_height = v,
            PageEdit::MobileHeight(v) => self.template.mobile_height = v,
            PageEdit::ExternalUrl(v) => self.template.external_url = v,
            PageEdit::MenuPosition(v) => self.navigation.menu_position = v,
            PageEdit::ParentPage(v) => self.navigation.parent_page = v,
            PageEdit::NavLabel(v) => self.navigation.nav_label = v,
            PageEdit::MenuOrder(input) => self.navigation.set_menu_order_input(&input),
            PageEdit::MenuIcon(v) => self.navigation.menu_icon = v,
            PageEdit::ShowInNav(v) => self.navigation.show_in_nav = v,
            PageEdit::ShowInSitemap(v) => self.navigation.show_in_sitemap = v,
            PageEdit::RequireAuth(v) => self.navigation.require_auth = v,
            PageEdit::Status(v) => self.publish.status = v,
            PageEdit::PublishDate(v) => self.publish.publish_date = v,
            PageEdit::PublishTime(v) => self.publish.publish_time = v,
            PageEdit::AccessLevel(v) => self.publish.access_level = v,
            PageEdit::CustomRoute(v) => self.advanced.custom_route = v,
            PageEdit::RouteParams(v) => self.advanced.route_params = v,
            PageEdit::AllowIndexing(v) => self.advanced.allow_indexing = v,
            PageEdit::EnableAnalytics(v) => self.advanced.enable_analytics = v,
            PageEdit::SocialPreviews(v) => self.advanced.social_previews = v,
            PageEdit::LazyLoading(v) => self.advanced.lazy_loading = v,
            PageEdit::PreloadResources(v) => self.advanced.preload_resources = v,
            PageEdit::EnableCaching(v) => self.advanced.enable_caching = v,
            PageEdit::CustomClasses(v) => self.advanced.custom_classes = v,
        }
    }

    /// Snapshot the draft for a save action.
    pub fn to_record(&self, status: PublishStatus, now: DateTime<Utc>) -> PageRecord {
        let mut publish = self.publish.clone();
        publish.status = status;
        PageRecord {
            title: self.title.clone(),
            slug: self.slug.value().to_string(),
            meta_description: self.meta_description.clone(),
            content_type: self.content_type,
            template: self.template.clone(),
            navigation: self.navigation.clone(),
            publish,
            advanced: self.advanced.clone(),
            created_at: now,
            updated_at: now,
            published_at: (status == PublishStatus::Published).then_some(now),
        }
    }
}

/// One field change from the create-page form
#[derive(Clone, Debug, PartialEq)]
pub enum PageEdit {
    Title(String),
    Slug(String),
    MetaDescription(String),
    ContentType(Option<ContentType>),
    GridLayout(GridLayout),
    HoverPreview(bool),
    AutoMute(bool),
    ShowDuration(bool),
    ThumbnailHeight(String),
    AspectRatio(AspectRatio),
    PrototypeUrl(String),
    Scaling(ScalingMode),
    ShowControls(bool),
    AllowFullscreen(bool),
    ShowExternalLink(bool),
    ContainerHeight(String),
    MobileHeight(String),
    ExternalUrl(String),
    MenuPosition(MenuPosition),
    ParentPage(Option<ParentPage>),
    NavLabel(String),
    /// Raw text of the menu order input
    MenuOrder(String),
    MenuIcon(String),
    ShowInNav(bool),
    ShowInSitemap(bool),
    RequireAuth(bool),
    Status(PublishStatus),
    PublishDate(String),
    PublishTime(String),
    AccessLevel(AccessLevel),
    CustomRoute(String),
    RouteParams(String),
    AllowIndexing(bool),
    EnableAnalytics(bool),
    SocialPreviews(bool),
    LazyLoading(bool),
    PreloadResources(bool),
    EnableCaching(bool),
    CustomClasses(String),
}

/// Serializable snapshot written by save draft / publish
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    pub content_type: Option<ContentType>,
    pub template: TemplateConfig,
    pub navigation: NavigationConfig,
    pub publish: PublishState,
    pub advanced: AdvancedOptions,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Data handed to the preview window through session storage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewData {
    pub title: String,
    pub slug: String,
    pub content_type: Option<ContentType>,
    pub template: TemplateConfig,
    pub is_preview: bool,
}

impl From<&PageConfig> for PreviewData {
    fn from(page: &PageConfig) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.value().to_string(),
            content_type: page.content_type,
            template: page.template.clone(),
            is_preview: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_option_enum_round_trips_through_str() {
        for ct in ContentType::ALL {
            assert_eq!(ContentType::parse(ct.as_str()), Some(*ct));
        }
        assert_eq!(ContentType::parse("video"), None);
        assert_eq!(GridLayout::Masonry.label(), "Masonry Layout");
    }

    #[test]
    fn test_content_type_serializes_kebab_case() {
        let json = serde_json::to_string(&ContentType::PrototypeTemplate).unwrap();
        assert_eq!(json, "\"prototype-template\"");
    }

    #[test]
    fn test_title_drives_slug() {
        let mut page = PageConfig::new();
        page.set_title("Mobile App Design");
        assert_eq!(page.slug.value(), "mobile-app-design");
        assert_eq!(page.preview_path(), "/portfolio/mobile-app-design");
    }

    #[test]
    fn test_can_publish_requires_prototype_url() {
        let mut page = PageConfig::new();
        page.set_title("Vision");
        assert!(!page.can_publish());

        page.content_type = Some(ContentType::PrototypeTemplate);
        assert!(!page.can_publish());

        page.template.prototype_url = "https://www.figma.com/proto/x".to_string();
        assert!(page.can_publish());

        page.content_type = Some(ContentType::VideoTemplate);
        page.template.prototype_url.clear();
        assert!(page.can_publish());
    }

    #[test]
    fn test_menu_order_input_parsing() {
        let mut nav = NavigationConfig::default();
        nav.set_menu_order_input("7");
        assert_eq!(nav.menu_order, 7);
        nav.set_menu_order_input("abc");
        assert_eq!(nav.menu_order, 0);
        nav.set_menu_order_input("500");
        assert_eq!(nav.menu_order, MENU_ORDER_MAX);
    }

    #[test]
    fn test_effective_nav_label() {
        let mut nav = NavigationConfig::default();
        assert_eq!(nav.effective_label("Vision"), "Vision");
        nav.nav_label = "  Our Vision ".to_string();
        assert_eq!(nav.effective_label("Vision"), "Our Vision");
    }

    #[test]
    fn test_route_param_list() {
        let advanced = AdvancedOptions {
            route_params: "id, ,section,".to_string(),
            ..Default::default()
        };
        assert_eq!(advanced.route_param_list(), vec!["id", "section"]);
    }

    #[test]
    fn test_record_forces_status_and_published_at() {
        let now = Utc.with_ymd_and_hms(2025, 10, 3, 14, 30, 0).unwrap();
        let mut page = PageConfig::new();
        page.set_title("Draft Page");
        page.publish.status = PublishStatus::Scheduled;

        let draft = page.to_record(PublishStatus::Draft, now);
        assert_eq!(draft.publish.status, PublishStatus::Draft);
        assert_eq!(draft.published_at, None);

        let published = page.to_record(PublishStatus::Published, now);
        assert_eq!(published.published_at, Some(now));
        let json = serde_json::to_value(&published).unwrap();
        assert_eq!(json["slug"], "draft-page");
        assert_eq!(json["publish"]["status"], "published");
        assert!(json.get("publishedAt").is_some());
    }

    #[test]
    fn test_apply_routes_edits() {
        let mut page = PageConfig::new();
        page.apply(PageEdit::Title("Case Study".into()));
        assert_eq!(page.slug.value(), "case-study");

        page.apply(PageEdit::Slug("custom".into()));
        page.apply(PageEdit::Title("Another".into()));
        assert_eq!(page.slug.value(), "custom");

        page.apply(PageEdit::MenuOrder("250".into()));
        assert_eq!(page.navigation.menu_order, MENU_ORDER_MAX);

        page.apply(PageEdit::Status(PublishStatus::Scheduled));
        page.apply(PageEdit::AllowIndexing(false));
        assert_eq!(page.publish.status, PublishStatus::Scheduled);
        assert!(!page.advanced.allow_indexing);
    }
}
