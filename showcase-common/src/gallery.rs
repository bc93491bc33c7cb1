//! Filtering, sorting and summarising the public video gallery

use crate::catalog::{category_by_id, GalleryVideo};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Title,
    Popular,
}

impl SortOrder {
    pub const ALL: &'static [SortOrder] = &[
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Title,
        SortOrder::Popular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Title => "title",
            SortOrder::Popular => "popular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Title => "Title A-Z",
            SortOrder::Popular => "Most Popular",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Card layout of the gallery grid. Only admins can switch it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutType {
    #[default]
    Standard,
    Compact,
    Detailed,
}

impl LayoutType {
    pub const ALL: &'static [LayoutType] =
        &[LayoutType::Standard, LayoutType::Compact, LayoutType::Detailed];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutType::Standard => "Standard Grid",
            LayoutType::Compact => "Compact View",
            LayoutType::Detailed => "Detailed View",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LayoutType::Standard => "3x4 aspect ratio cards",
            LayoutType::Compact => "Video aspect ratio cards",
            LayoutType::Detailed => "4x5 aspect ratio with more info",
        }
    }

    /// Mobile toggle flips between standard and compact
    pub fn toggled(&self) -> Self {
        match self {
            LayoutType::Standard => LayoutType::Compact,
            _ => LayoutType::Standard,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryQuery {
    /// Category id or [`ALL_CATEGORIES`]
    pub category: String,
    pub search: String,
    pub sort: SortOrder,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortOrder::Newest,
        }
    }
}

impl GalleryQuery {
    fn category_name(&self) -> Option<&'static str> {
        if self.category == ALL_CATEGORIES {
            None
        } else {
            category_by_id(&self.category).map(|c| c.name)
        }
    }

    fn matches(&self, video: &GalleryVideo) -> bool {
        if self.category != ALL_CATEGORIES {
            match self.category_name() {
                Some(name) if video.category == name => {}
                _ => return false,
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        video.title.to_lowercase().contains(&needle)
            || video.description.to_lowercase().contains(&needle)
            || video.category.to_lowercase().contains(&needle)
    }

    /// Videos matching the category and search, in the requested order.
    pub fn apply<'a>(&self, videos: &'a [GalleryVideo]) -> Vec<&'a GalleryVideo> {
        let mut result: Vec<&GalleryVideo> = videos.iter().filter(|v| self.matches(v)).collect();
        match self.sort {
            SortOrder::Newest => result.sort_by(|a, b| b.released().cmp(&a.released())),
            SortOrder::Oldest => result.sort_by_key(|v| v.released()),
            SortOrder::Title => result.sort_by_key(|v| v.title.to_lowercase()),
            SortOrder::Popular => result.sort_by(|a, b| b.views.cmp(&a.views)),
        }
        result
    }

    /// e.g. `2 videos in Mobile UX matching "bank"`
    pub fn summary(&self, count: usize) -> String {
        let mut text = format!("{count} {}", if count == 1 { "video" } else { "videos" });
        if let Some(name) = self.category_name() {
            text.push_str(&format!(" in {name}"));
        }
        if !self.search.is_empty() {
            text.push_str(&format!(" matching \"{}\"", self.search));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GALLERY_VIDEOS;

    fn titles(videos: &[&GalleryVideo]) -> Vec<&'static str> {
        videos.iter().map(|v| v.title).collect()
    }

    #[test]
    fn test_default_query_is_newest_first() {
        let result = GalleryQuery::default().apply(GALLERY_VIDEOS);
        assert_eq!(result.len(), 6);
        assert_eq!(result[0].title, "Built to Deliver - EDX Future Vision");
        assert_eq!(result[5].title, "Accessibility-First Web Design");
    }

    #[test]
    fn test_oldest_and_popular() {
        let mut query = GalleryQuery {
            sort: SortOrder::Oldest,
            ..Default::default()
        };
        assert_eq!(query.apply(GALLERY_VIDEOS)[0].title, "Accessibility-First Web Design");

        query.sort = SortOrder::Popular;
        let result = query.apply(GALLERY_VIDEOS);
        assert_eq!(result[0].title, "E-commerce Platform Optimization");
        assert_eq!(result[1].title, "SaaS Product Onboarding Flow");
    }

    #[test]
    fn test_title_sort() {
        let query = GalleryQuery {
            sort: SortOrder::Title,
            ..Default::default()
        };
        let result = query.apply(GALLERY_VIDEOS);
        assert_eq!(
            titles(&result),
            vec![
                "Accessibility-First Web Design",
                "Built to Deliver - EDX Future Vision",
                "E-commerce Platform Optimization",
                "Healthcare Dashboard Interface",
                "Mobile Banking App Redesign",
                "SaaS Product Onboarding Flow",
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let query = GalleryQuery {
            category: "mobile-ux".to_string(),
            ..Default::default()
        };
        let result = query.apply(GALLERY_VIDEOS);
        assert_eq!(titles(&result), vec!["Mobile Banking App Redesign"]);
        assert_eq!(query.summary(result.len()), "1 video in Mobile UX");
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let query = GalleryQuery {
            category: "gaming".to_string(),
            ..Default::default()
        };
        assert!(query.apply(GALLERY_VIDEOS).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let query = GalleryQuery {
            search: "WCAG".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&query.apply(GALLERY_VIDEOS)),
            vec!["Accessibility-First Web Design"]
        );

        let query = GalleryQuery {
            search: "saas".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(GALLERY_VIDEOS).len(), 1);
    }

    #[test]
    fn test_summary_text() {
        let query = GalleryQuery {
            category: "healthcare".to_string(),
            search: "zzz".to_string(),
            sort: SortOrder::Newest,
        };
        assert_eq!(query.summary(0), "0 videos in Healthcare matching \"zzz\"");
        assert_eq!(GalleryQuery::default().summary(6), "6 videos");
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(SortOrder::parse("popular"), Some(SortOrder::Popular));
        assert_eq!(SortOrder::parse("best"), None);
        assert_eq!(LayoutType::Compact.toggled(), LayoutType::Standard);
    }
}
