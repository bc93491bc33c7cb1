use chrono::Utc;
use showcase_common::page::{ContentType, PageConfig, PageEdit, PreviewData, PublishStatus};
use showcase_common::validation::{validate, Field, ValidationMode};
use showcase_common::SiteConfig;

fn reserved() -> Vec<String> {
    SiteConfig::default().reserved_slugs
}

#[test]
fn test_title_drives_slug_until_user_edits() {
    let mut page = PageConfig::new();
    page.set_title("Mobile App Design");
    assert_eq!(page.slug.value(), "mobile-app-design");

    page.edit_slug("mobile-apps");
    page.set_title("Mobile App Design 2");
    assert_eq!(page.slug.value(), "mobile-apps");
}

#[test]
fn test_draft_save_with_minimal_fields() {
    let mut page = PageConfig::new();
    page.set_title("Landing");
    assert!(validate(&page, &reserved(), ValidationMode::Draft).is_empty());

    let record = page.to_record(PublishStatus::Draft, Utc::now());
    assert_eq!(record.publish.status, PublishStatus::Draft);
    assert_eq!(record.slug, "landing");
}

#[test]
fn test_publish_blocked_until_complete() {
    let mut page = PageConfig::new();
    page.set_title("Home Video Gallery");

    let errors = validate(&page, &reserved(), ValidationMode::Publish);
    assert_eq!(errors.get(Field::Slug), Some("This URL slug already exists"));
    assert!(errors.contains(Field::ContentType));
    assert!(!page.can_publish());

    page.edit_slug("home-video-gallery-v2");
    page.content_type = Some(ContentType::PrototypeTemplate);
    let errors = validate(&page, &reserved(), ValidationMode::Publish);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(Field::PrototypeUrl));

    page.template.prototype_url =
        "https://www.figma.com/proto/example/prototype".to_string();
    assert!(validate(&page, &reserved(), ValidationMode::Publish).is_empty());
    assert!(page.can_publish());

    let record = page.to_record(PublishStatus::Published, Utc::now());
    assert!(record.published_at.is_some());
}

#[test]
fn test_preview_payload_round_trips() {
    let mut page = PageConfig::new();
    page.set_title("Vision Deck");
    page.content_type = Some(ContentType::External);
    page.template.external_url = "https://storybook.example.com".to_string();

    let json = serde_json::to_string(&PreviewData::from(&page)).unwrap();
    assert!(json.contains("\"isPreview\":true"));
    let back: PreviewData = serde_json::from_str(&json).unwrap();
    assert_eq!(back.slug, "vision-deck");
    assert_eq!(back.content_type, Some(ContentType::External));
}

#[test]
fn test_shown_errors_follow_edits_after_failed_publish() {
    let mut page = PageConfig::new();
    let mut shown = validate(&page, &reserved(), ValidationMode::Publish);
    assert_eq!(shown.len(), 3);

    // Same sequence the create form runs: apply the edit, then refresh
    page.apply(PageEdit::ContentType(Some(ContentType::External)));
    shown.refresh(&validate(&page, &reserved(), ValidationMode::Publish));
    assert!(!shown.contains(Field::ContentType));
    assert!(!shown.contains(Field::ExternalUrl));

    page.apply(PageEdit::Title("Edit Page Content".into()));
    shown.refresh(&validate(&page, &reserved(), ValidationMode::Publish));
    assert!(!shown.contains(Field::Title));
    assert_eq!(shown.get(Field::Slug), Some("This URL slug already exists"));

    page.apply(PageEdit::Slug("edit-page-content-2".into()));
    shown.refresh(&validate(&page, &reserved(), ValidationMode::Publish));
    assert!(shown.is_empty());
}
