//! Page configuration validator

use crate::page::{
    ContentType, PageConfig, PublishStatus, META_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::slug::is_valid_slug;
use std::collections::BTreeMap;
use url::Url;

/// Field a validation message is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Slug,
    MetaDescription,
    ContentType,
    PrototypeUrl,
    ExternalUrl,
    PublishDate,
    PublishTime,
}

impl Field {
    /// Stable key used by the form to look up inline errors
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::MetaDescription => "metaDescription",
            Field::ContentType => "contentType",
            Field::PrototypeUrl => "prototypeUrl",
            Field::ExternalUrl => "externalUrl",
            Field::PublishDate => "publishDate",
            Field::PublishTime => "publishTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Page Title",
            Field::Slug => "URL Slug",
            Field::MetaDescription => "Meta Description",
            Field::ContentType => "Content Type",
            Field::PrototypeUrl => "Prototype URL",
            Field::ExternalUrl => "External URL",
            Field::PublishDate => "Publish Date",
            Field::PublishTime => "Publish Time",
        }
    }
}

/// Which rule set to apply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    /// Title and slug presence only
    Draft,
    /// Every rule
    Publish,
}

/// Field to message mapping. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Re-check the fields already showing a message against a fresh result.
    ///
    /// Fields that now pass drop out and remaining messages are updated.
    /// Fields the user has not been told about yet are not added.
    pub fn refresh(&mut self, fresh: &ValidationErrors) {
        self.0.retain(|field, message| match fresh.get(*field) {
            Some(current) => {
                *message = current.to_string();
                true
            }
            None => false,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Whether `value` parses as an absolute URL
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Validate a page draft against the known slugs.
///
/// All failing rules are reported; nothing short-circuits across fields.
pub fn validate<S: AsRef<str>>(
    page: &PageConfig,
    existing_slugs: &[S],
    mode: ValidationMode,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let title = page.title.trim();
    if title.is_empty() {
        errors.insert(Field::Title, "Page title is required");
    } else if mode == ValidationMode::Publish && page.title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(Field::Title, "Page title must be 60 characters or less");
    }

    let slug = page.slug.value();
    if slug.trim().is_empty() {
        errors.insert(Field::Slug, "URL slug is required");
    } else if mode == ValidationMode::Publish {
        if existing_slugs.iter().any(|s| s.as_ref() == slug) {
            errors.insert(Field::Slug, "This URL slug already exists");
        } else if !is_valid_slug(slug) {
            errors.insert(
                Field::Slug,
                "URL slug can only contain lowercase letters, numbers, and hyphens",
            );
        }
    }

    if mode == ValidationMode::Draft {
        return errors;
    }

    if page.meta_description.chars().count() > META_DESCRIPTION_MAX_CHARS {
        errors.insert(
            Field::MetaDescription,
            "Meta description must be 160 characters or less",
        );
    }

    match page.content_type {
        None => errors.insert(Field::ContentType, "Please select a content type"),
        Some(ContentType::PrototypeTemplate) => check_url(
            &mut errors,
            Field::PrototypeUrl,
            &page.template.prototype_url,
            "Prototype URL is required",
        ),
        Some(ContentType::External) => check_url(
            &mut errors,
            Field::ExternalUrl,
            &page.template.external_url,
            "External URL is required",
        ),
        Some(ContentType::VideoTemplate) | Some(ContentType::Custom) => {}
    }

    if page.publish.status == PublishStatus::Scheduled {
        if page.publish.publish_date.trim().is_empty() {
            errors.insert(
                Field::PublishDate,
                "Publish date is required for scheduled pages",
            );
        }
        if page.publish.publish_time.trim().is_empty() {
            errors.insert(
                Field::PublishTime,
                "Publish time is required for scheduled pages",
            );
        }
    }

    errors
}

fn check_url(errors: &mut ValidationErrors, field: Field, value: &str, required: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, required);
    } else if !is_absolute_url(value) {
        errors.insert(field, "Please enter a valid URL");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXISTING: &[&str] = &[
        "home-video-gallery",
        "full-screen-video-player",
        "figma-prototype-display",
        "edit-page-content",
    ];

    fn valid_page() -> PageConfig {
        let mut page = PageConfig::new();
        page.set_title("Mobile App Design");
        page.content_type = Some(ContentType::VideoTemplate);
        page
    }

    #[test]
    fn test_valid_page_has_no_errors() {
        let errors = validate(&valid_page(), EXISTING, ValidationMode::Publish);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_empty_page_collects_every_error() {
        let errors = validate(&PageConfig::new(), EXISTING, ValidationMode::Publish);
        assert_eq!(errors.get(Field::Title), Some("Page title is required"));
        assert_eq!(errors.get(Field::Slug), Some("URL slug is required"));
        assert_eq!(
            errors.get(Field::ContentType),
            Some("Please select a content type")
        );
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_refresh_tracks_only_shown_fields() {
        let mut page = PageConfig::new();
        let mut shown = validate(&page, EXISTING, ValidationMode::Draft);
        assert_eq!(shown.len(), 2);

        page.set_title(&"x".repeat(70));
        shown.refresh(&validate(&page, EXISTING, ValidationMode::Publish));
        assert_eq!(
            shown.get(Field::Title),
            Some("Page title must be 60 characters or less")
        );
        assert!(!shown.contains(Field::Slug));
        assert!(!shown.contains(Field::ContentType));
        assert_eq!(shown.len(), 1);

        page.set_title("Short");
        shown.refresh(&validate(&page, EXISTING, ValidationMode::Publish));
        assert!(shown.is_empty());
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let mut page = valid_page();
        page.title = "   ".to_string();
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.get(Field::Title), Some("Page title is required"));
    }

    #[test]
    fn test_title_length_counts_characters() {
        let mut page = valid_page();
        page.title = "é".repeat(60);
        assert!(!validate(&page, EXISTING, ValidationMode::Publish).contains(Field::Title));

        page.title = "a".repeat(61);
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(
            errors.get(Field::Title),
            Some("Page title must be 60 characters or less")
        );
    }

    #[test]
    fn test_existing_slug_rejected() {
        let mut page = valid_page();
        page.edit_slug("home-video-gallery");
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.get(Field::Slug), Some("This URL slug already exists"));
    }

    #[test]
    fn test_slug_pattern_checked_after_uniqueness() {
        let mut page = valid_page();
        page.slug = crate::slug::SlugField::edited("Bad Slug");
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(
            errors.get(Field::Slug),
            Some("URL slug can only contain lowercase letters, numbers, and hyphens")
        );
    }

    #[test]
    fn test_meta_description_limit() {
        let mut page = valid_page();
        page.meta_description = "x".repeat(160);
        assert!(validate(&page, EXISTING, ValidationMode::Publish).is_empty());
        page.meta_description.push('x');
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(
            errors.get(Field::MetaDescription),
            Some("Meta description must be 160 characters or less")
        );
    }

    #[test]
    fn test_prototype_without_url_only_errors_on_url() {
        let mut page = valid_page();
        page.content_type = Some(ContentType::PrototypeTemplate);
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::PrototypeUrl),
            Some("Prototype URL is required")
        );
    }

    #[test]
    fn test_invalid_urls() {
        let mut page = valid_page();
        page.content_type = Some(ContentType::PrototypeTemplate);
        page.template.prototype_url = "not a url".to_string();
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.get(Field::PrototypeUrl), Some("Please enter a valid URL"));

        page.content_type = Some(ContentType::External);
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.get(Field::ExternalUrl), Some("External URL is required"));
        assert!(!errors.contains(Field::PrototypeUrl));

        page.template.external_url = "https://storybook.example.com".to_string();
        assert!(validate(&page, EXISTING, ValidationMode::Publish).is_empty());
    }

    #[test]
    fn test_schedule_with_one_missing_part() {
        let mut page = valid_page();
        page.publish.status = PublishStatus::Scheduled;
        page.publish.publish_date = "2025-11-01".to_string();
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::PublishTime),
            Some("Publish time is required for scheduled pages")
        );

        page.publish.publish_date.clear();
        page.publish.publish_time = "09:30".to_string();
        let errors = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::PublishDate));
    }

    #[test]
    fn test_draft_mode_checks_presence_only() {
        let mut page = PageConfig::new();
        page.set_title("a".repeat(80));
        page.edit_slug("home-video-gallery");
        page.publish.status = PublishStatus::Scheduled;
        assert!(validate(&page, EXISTING, ValidationMode::Draft).is_empty());

        let errors = validate(&PageConfig::new(), EXISTING, ValidationMode::Draft);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(Field::Title));
        assert!(errors.contains(Field::Slug));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut page = valid_page();
        page.content_type = Some(ContentType::External);
        page.publish.status = PublishStatus::Scheduled;
        let first = validate(&page, EXISTING, ValidationMode::Publish);
        let second = validate(&page, EXISTING, ValidationMode::Publish);
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::MetaDescription.key(), "metaDescription");
        assert_eq!(Field::PublishTime.key(), "publishTime");
    }
}
