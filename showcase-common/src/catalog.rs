//! Static content the site renders: gallery videos, player videos, editable
//! pages, dashboard figures and the showcased prototype.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub static CATEGORIES: &[Category] = &[
    Category { id: "design-systems", name: "Design Systems" },
    Category { id: "mobile-ux", name: "Mobile UX" },
    Category { id: "e-commerce", name: "E-commerce" },
    Category { id: "healthcare", name: "Healthcare" },
    Category { id: "saas", name: "SaaS" },
    Category { id: "accessibility", name: "Accessibility" },
];

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryVideo {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub hero_image: Option<&'static str>,
    pub video_url: &'static str,
    /// Category display name
    pub category: &'static str,
    pub duration: &'static str,
    pub year: i32,
    pub month: u32,
    pub views: u32,
    pub is_new: bool,
    pub is_featured: bool,
}

impl GalleryVideo {
    /// Release month, e.g. "Oct 2025"
    pub fn date_label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_default()
    }

    pub fn views_label(&self) -> String {
        format_count(self.views)
    }

    /// Sort key for newest/oldest ordering
    pub fn released(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

pub static GALLERY_VIDEOS: &[GalleryVideo] = &[
    GalleryVideo {
        id: 1,
        title: "Built to Deliver - EDX Future Vision",
        description: "Comprehensive design system implementation for large-scale enterprise applications with focus on accessibility and scalability.",
        thumbnail: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800&h=600&fit=crop",
        hero_image: Some("https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1200&h=800&fit=crop"),
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
        category: "Design Systems",
        duration: "12:45",
        year: 2025,
        month: 10,
        views: 2100,
        is_new: true,
        is_featured: true,
    },
    GalleryVideo {
        id: 2,
        title: "Mobile Banking App Redesign",
        description: "Complete mobile banking application redesign focusing on user experience improvements and modern interface design.",
        thumbnail: "https://images.pexels.com/photos/4386431/pexels-photo-4386431.jpeg?w=800&h=600&fit=crop",
        hero_image: None,
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4",
        category: "Mobile UX",
        duration: "8:30",
        year: 2025,
        month: 9,
        views: 1800,
        is_new: true,
        is_featured: false,
    },
    GalleryVideo {
        id: 3,
        title: "E-commerce Platform Optimization",
        description: "Data-driven UX optimization for e-commerce platform resulting in 40% increase in conversion rates.",
        thumbnail: "https://images.pixabay.com/photo/2016/11/29/06/15/plans-1867745_1280.jpg?w=800&h=600&fit=crop",
        hero_image: None,
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
        category: "E-commerce",
        duration: "15:20",
        year: 2025,
        month: 8,
        views: 3200,
        is_new: false,
        is_featured: false,
    },
    GalleryVideo {
        id: 4,
        title: "Healthcare Dashboard Interface",
        description: "Intuitive dashboard design for healthcare professionals with complex data visualization and workflow optimization.",
        thumbnail: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=800&h=600&fit=crop",
        hero_image: None,
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4",
        category: "Healthcare",
        duration: "10:15",
        year: 2025,
        month: 7,
        views: 1500,
        is_new: false,
        is_featured: false,
    },
    GalleryVideo {
        id: 5,
        title: "SaaS Product Onboarding Flow",
        description: "Streamlined onboarding experience for SaaS platform reducing user drop-off by 60% in first week.",
        thumbnail: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?w=800&h=600&fit=crop",
        hero_image: None,
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
        category: "SaaS",
        duration: "7:45",
        year: 2025,
        month: 6,
        views: 2700,
        is_new: false,
        is_featured: false,
    },
    GalleryVideo {
        id: 6,
        title: "Accessibility-First Web Design",
        description: "Web application redesign with accessibility as primary focus, achieving WCAG 2.1 AA compliance.",
        thumbnail: "https://images.pixabay.com/photo/2016/11/19/14/00/code-1839406_1280.jpg?w=800&h=600&fit=crop",
        hero_image: None,
        video_url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4",
        category: "Accessibility",
        duration: "11:30",
        year: 2025,
        month: 5,
        views: 1900,
        is_new: false,
        is_featured: false,
    },
];

pub fn featured_video() -> Option<&'static GalleryVideo> {
    GALLERY_VIDEOS.iter().find(|v| v.is_featured)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerVideo {
    pub id: &'static str,
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PLAYER_VIDEOS: &[PlayerVideo] = &[
    PlayerVideo {
        id: "ux-research-methodology",
        src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        title: "UX Research Methodology Deep Dive",
        description: "Comprehensive exploration of user research methodologies including ethnographic studies, usability testing, and behavioral analytics.\n\nThis presentation covers advanced techniques for gathering meaningful user insights and translating them into actionable design decisions.",
    },
    PlayerVideo {
        id: "design-system-evolution",
        src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        title: "Design System Evolution at Scale",
        description: "Journey through the development and scaling of enterprise design systems across multiple product lines.\n\nLearn how we maintained consistency while enabling innovation across distributed design teams.",
    },
    PlayerVideo {
        id: "accessibility-first-design",
        src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        title: "Accessibility-First Design Approach",
        description: "Implementing inclusive design principles from the ground up to create experiences that work for everyone.\n\nCase studies demonstrating how accessibility constraints drive innovative design solutions.",
    },
    PlayerVideo {
        id: "data-driven-personalization",
        src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        title: "Data-Driven Personalization Strategy",
        description: "Leveraging user data and machine learning to create personalized experiences that adapt to individual user needs.\n\nExploring the balance between personalization and privacy in modern UX design.",
    },
    PlayerVideo {
        id: "mobile-first-transformation",
        src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
        title: "Mobile-First Digital Transformation",
        description: "Complete redesign of legacy enterprise applications using mobile-first principles and progressive enhancement.\n\nReal-world challenges and solutions in modernizing complex business workflows.",
    },
];

pub fn player_video(id: &str) -> Option<&'static PlayerVideo> {
    PLAYER_VIDEOS.iter().find(|v| v.id == id)
}

/// An existing page the admin can edit
#[derive(Clone, Debug, PartialEq)]
pub struct EditablePage {
    pub id: &'static str,
    pub name: &'static str,
    /// `external` or `custom`
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
    pub template: Option<&'static str>,
    pub last_modified: &'static str,
    pub modified_by: &'static str,
}

pub static EDITABLE_PAGES: &[EditablePage] = &[
    EditablePage {
        id: "home-video-gallery",
        name: "Home Video Gallery",
        kind: "custom",
        title: "Enterprise UX Showcase",
        description: "Main video gallery showcasing UX portfolio content",
        url: None,
        template: None,
        last_modified: "October 3, 2025 at 2:30 PM",
        modified_by: "admin@enterprise-ux.com",
    },
    EditablePage {
        id: "figma-prototype-display",
        name: "Figma Prototype Display",
        kind: "external",
        title: "Interactive Prototypes",
        description: "Showcase of interactive Figma prototypes and design systems",
        url: Some("https://www.figma.com/proto/example/prototype"),
        template: None,
        last_modified: "October 2, 2025 at 4:15 PM",
        modified_by: "admin@enterprise-ux.com",
    },
    EditablePage {
        id: "full-screen-video-player",
        name: "Full Screen Video Player",
        kind: "custom",
        title: "Video Showcase",
        description: "Immersive full-screen video player for detailed UX presentations",
        url: None,
        template: Some("video-gallery"),
        last_modified: "October 1, 2025 at 11:45 AM",
        modified_by: "admin@enterprise-ux.com",
    },
];

pub fn editable_page(id: &str) -> Option<&'static EditablePage> {
    EDITABLE_PAGES.iter().find(|p| p.id == id)
}

/// A suggested external URL offered on the edit page
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestedUrl {
    pub label: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub static SUGGESTED_URLS: &[SuggestedUrl] = &[
    SuggestedUrl {
        label: "Figma Prototype Example",
        url: "https://www.figma.com/proto/example/prototype",
        description: "Interactive design prototype",
    },
    SuggestedUrl {
        label: "Design System Demo",
        url: "https://storybook.example.com",
        description: "Component library showcase",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct PrototypeInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub last_updated: NaiveDate,
    pub version: &'static str,
    pub status: &'static str,
}

impl PrototypeInfo {
    /// e.g. "Oct 3, 2025"
    pub fn last_updated_label(&self) -> String {
        self.last_updated.format("%b %-d, %Y").to_string()
    }
}

pub fn showcased_prototype() -> PrototypeInfo {
    PrototypeInfo {
        title: "Enterprise UX Design System",
        description: "Interactive prototype showcasing our comprehensive design system with components, patterns, and user flows for enterprise applications.",
        url: "https://www.figma.com/embed?embed_host=share&url=https%3A%2F%2Fwww.figma.com%2Fproto%2FsamplePrototype",
        last_updated: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap_or_default(),
        version: "v2.1",
        status: "Live",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub static PUBLIC_NAV: &[NavLink] = &[
    NavLink { label: "Home", path: "/home-video-gallery" },
    NavLink { label: "Vision", path: "/figma-prototype-display" },
    NavLink { label: "Initiatives", path: "/full-screen-video-player" },
    NavLink { label: "Journeys", path: "/home-video-gallery" },
];

pub static ADMIN_NAV: &[NavLink] = &[
    NavLink { label: "Edit Pages", path: "/edit-page-content" },
    NavLink { label: "Create New", path: "/create-new-page" },
    NavLink { label: "Dashboard", path: "/admin-dashboard" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecentStatus {
    Published,
    Draft,
}

impl RecentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecentStatus::Published => "published",
            RecentStatus::Draft => "draft",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecentPage {
    pub id: u32,
    pub title: &'static str,
    pub status: RecentStatus,
    pub last_modified: DateTime<Utc>,
    pub views: u32,
    pub url: Option<&'static str>,
}

impl RecentPage {
    /// e.g. "Jan 2, 10:30 AM"
    pub fn modified_label(&self) -> String {
        format_short_datetime(self.last_modified)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_pages: u32,
    pub published_pages: u32,
    pub draft_pages: u32,
    pub total_views: u32,
    pub monthly_views: u32,
    pub weekly_views: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SystemStatus {
    pub healthy: bool,
    pub uptime: &'static str,
    pub last_backup: DateTime<Utc>,
    pub storage: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_pages: Vec<RecentPage>,
    pub system: SystemStatus,
}

/// Where a dashboard action leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTarget {
    Route(&'static str),
    /// Not built yet; shows a notice with this text
    ComingSoon(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub shortcut: &'static str,
    pub target: ActionTarget,
}

pub static QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Create New Page",
        description: "Add a new page with customizable content",
        shortcut: "Ctrl+N",
        target: ActionTarget::Route("/create-new-page"),
    },
    QuickAction {
        title: "Edit Existing Page",
        description: "Modify content and settings for existing pages",
        shortcut: "Ctrl+E",
        target: ActionTarget::Route("/edit-page-content"),
    },
    QuickAction {
        title: "Media Management",
        description: "Upload and organize videos, images, and files",
        shortcut: "Ctrl+M",
        target: ActionTarget::ComingSoon("Media management coming soon!"),
    },
    QuickAction {
        title: "Analytics & Reports",
        description: "View detailed performance metrics and insights",
        shortcut: "Ctrl+A",
        target: ActionTarget::ComingSoon("Analytics dashboard coming soon!"),
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ManagementCard {
    pub title: &'static str,
    pub count: String,
    pub description: String,
    pub trend: &'static str,
    pub target: ActionTarget,
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        stats: DashboardStats {
            total_pages: 4,
            published_pages: 3,
            draft_pages: 1,
            total_views: 1247,
            monthly_views: 342,
            weekly_views: 89,
        },
        recent_pages: vec![
            RecentPage {
                id: 1,
                title: "Home Video Gallery",
                status: RecentStatus::Published,
                last_modified: utc(2025, 1, 2, 10, 30),
                views: 523,
                url: Some("/home-video-gallery"),
            },
            RecentPage {
                id: 2,
                title: "Figma Prototype Display",
                status: RecentStatus::Published,
                last_modified: utc(2025, 1, 1, 15, 45),
                views: 287,
                url: Some("/figma-prototype-display"),
            },
            RecentPage {
                id: 3,
                title: "Full Screen Video Player",
                status: RecentStatus::Published,
                last_modified: utc(2024, 12, 30, 9, 20),
                views: 194,
                url: Some("/full-screen-video-player"),
            },
            RecentPage {
                id: 4,
                title: "New Landing Page",
                status: RecentStatus::Draft,
                last_modified: utc(2025, 1, 1, 12, 0),
                views: 0,
                url: None,
            },
        ],
        system: SystemStatus {
            healthy: true,
            uptime: "99.9%",
            last_backup: utc(2025, 1, 2, 2, 0),
            storage: "2.3 GB / 10 GB",
        },
    }
}

impl DashboardData {
    pub fn management_cards(&self) -> Vec<ManagementCard> {
        vec![
            ManagementCard {
                title: "Pages",
                count: self.stats.total_pages.to_string(),
                description: format!(
                    "{} published, {} draft",
                    self.stats.published_pages, self.stats.draft_pages
                ),
                trend: "+2 this month",
                target: ActionTarget::Route("/edit-page-content"),
            },
            ManagementCard {
                title: "Content",
                count: "12".to_string(),
                description: "Videos, prototypes, and media files".to_string(),
                trend: "+5 this week",
                target: ActionTarget::ComingSoon("Content management coming soon!"),
            },
            ManagementCard {
                title: "Views",
                count: format_thousands(self.stats.total_views),
                description: format!("{} this month", self.stats.monthly_views),
                trend: "+12% this month",
                target: ActionTarget::ComingSoon("Analytics coming soon!"),
            },
            ManagementCard {
                title: "Users",
                count: "1".to_string(),
                description: "Active admin users".to_string(),
                trend: "No change",
                target: ActionTarget::ComingSoon("User management coming soon!"),
            },
        ]
    }
}

/// Compact view count: 950, 2.1K, 1.3M
pub fn format_count(n: u32) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => with_tenths(n / 100, "K"),
        _ => with_tenths(n / 100_000, "M"),
    }
}

fn with_tenths(tenths: u32, suffix: &str) -> String {
    match tenths % 10 {
        0 => format!("{}{suffix}", tenths / 10),
        frac => format!("{}.{frac}{suffix}", tenths / 10),
    }
}

/// Group digits with commas: 1247 -> "1,247"
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// e.g. "Jan 2, 10:30 AM"
pub fn format_short_datetime(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_shape() {
        assert_eq!(GALLERY_VIDEOS.len(), 6);
        assert_eq!(CATEGORIES.len(), 6);
        for video in GALLERY_VIDEOS {
            assert!(
                CATEGORIES.iter().any(|c| c.name == video.category),
                "{} has unknown category",
                video.title
            );
        }
        let featured = featured_video().unwrap();
        assert_eq!(featured.title, "Built to Deliver - EDX Future Vision");
        assert_eq!(featured.date_label(), "Oct 2025");
        assert_eq!(featured.views_label(), "2.1K");
    }

    #[test]
    fn test_player_lookup() {
        assert_eq!(PLAYER_VIDEOS.len(), 5);
        assert_eq!(
            player_video("design-system-evolution").map(|v| v.title),
            Some("Design System Evolution at Scale")
        );
        assert!(player_video("missing").is_none());
    }

    #[test]
    fn test_editable_pages() {
        let page = editable_page("figma-prototype-display").unwrap();
        assert_eq!(page.kind, "external");
        assert_eq!(page.url, Some("https://www.figma.com/proto/example/prototype"));
        assert_eq!(
            editable_page("full-screen-video-player").and_then(|p| p.template),
            Some("video-gallery")
        );
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1K");
        assert_eq!(format_count(1247), "1.2K");
        assert_eq!(format_count(1900), "1.9K");
        assert_eq!(format_count(3200), "3.2K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(89), "89");
        assert_eq!(format_thousands(1247), "1,247");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_dashboard_labels() {
        let data = dashboard_data();
        assert_eq!(data.recent_pages[0].modified_label(), "Jan 2, 10:30 AM");
        assert_eq!(data.recent_pages[2].modified_label(), "Dec 30, 09:20 AM");
        let cards = data.management_cards();
        assert_eq!(cards[0].description, "3 published, 1 draft");
        assert_eq!(cards[2].count, "1,247");
        assert_eq!(showcased_prototype().last_updated_label(), "Oct 3, 2025");
    }
}
