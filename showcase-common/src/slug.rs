//! URL slug derivation and the slug field of a page draft

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"))
}

/// Whether `slug` only contains lowercase letters, digits and hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

/// Lower-case, drop characters outside `[a-z0-9\s-]`, turn whitespace runs into
/// single hyphens and collapse repeated hyphens. Edge hyphens are kept.
fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    if pending_hyphen {
        out.push('-');
    }

    out
}

/// Derive a URL slug from a page title.
///
/// "Mobile App Design" becomes "mobile-app-design". The result never has
/// leading, trailing or doubled hyphens.
pub fn derive_slug(title: &str) -> String {
    normalize(title).trim_matches('-').to_string()
}

/// Clean up a slug typed directly by the user.
///
/// Same character rules as [`derive_slug`], but edge hyphens survive so the
/// user can type "case-" on the way to "case-study".
pub fn sanitize_slug_input(input: &str) -> String {
    normalize(input)
}

/// Slug value plus whether the user has taken it over from the title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugField {
    value: String,
    is_user_edited: bool,
}

impl SlugField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slug that was set explicitly, e.g. loaded from an existing page.
    pub fn edited(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_user_edited: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_user_edited(&self) -> bool {
        self.is_user_edited
    }

    /// Follow the title unless the user has edited the slug.
    pub fn on_title_change(&mut self, title: &str) {
        if !self.is_user_edited {
            self.value = derive_slug(title);
        }
    }

    /// Apply a direct edit. Clearing the field hands it back to the title.
    pub fn on_user_edit(&mut self, input: &str, current_title: &str) {
        let cleaned = sanitize_slug_input(input);
        if cleaned.is_empty() {
            self.is_user_edited = false;
            self.value = derive_slug(current_title);
        } else {
            self.is_user_edited = true;
            self.value = cleaned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clean(slug: &str) {
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {slug:?}"
        );
        assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
        assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        assert!(!slug.contains("--"), "doubled hyphen in {slug:?}");
    }

    #[test]
    fn test_derive_basic_title() {
        assert_eq!(derive_slug("Mobile App Design"), "mobile-app-design");
    }

    #[test]
    fn test_derive_strips_punctuation() {
        assert_eq!(derive_slug("UX: Research & Strategy!"), "ux-research-strategy");
    }

    #[test]
    fn test_derive_collapses_hyphens_and_whitespace() {
        assert_eq!(derive_slug("  a --  b\t\tc  "), "a-b-c");
    }

    #[test]
    fn test_derive_drops_non_ascii() {
        assert_eq!(derive_slug("Café Déjà Vu"), "caf-dj-vu");
    }

    #[test]
    fn test_derive_empty_and_symbol_only() {
        assert_eq!(derive_slug(""), "");
        assert_eq!(derive_slug("!!! ---"), "");
    }

    #[test]
    fn test_derived_slugs_are_always_clean() {
        let titles = [
            "Mobile App Design",
            "-leading",
            "trailing-",
            "--both--",
            "Ünïcödé   Title 2025",
            "tabs\tand\nnewlines",
            "a - - - b",
            "123",
            "  ",
            "Design System Evolution at Scale",
        ];
        for title in titles {
            let slug = derive_slug(title);
            assert_clean(&slug);
            if !slug.is_empty() {
                assert!(is_valid_slug(&slug));
            }
        }
    }

    #[test]
    fn test_sanitize_keeps_trailing_hyphen() {
        assert_eq!(sanitize_slug_input("Case-"), "case-");
        assert_eq!(sanitize_slug_input("case study"), "case-study");
    }

    #[test]
    fn test_field_follows_title_until_edited() {
        let mut field = SlugField::new();
        field.on_title_change("Mobile");
        assert_eq!(field.value(), "mobile");
        field.on_title_change("Mobile App Design");
        assert_eq!(field.value(), "mobile-app-design");
        assert!(!field.is_user_edited());

        field.on_user_edit("apps", "Mobile App Design");
        assert!(field.is_user_edited());
        field.on_title_change("Something Else");
        assert_eq!(field.value(), "apps");
    }

    #[test]
    fn test_clearing_slug_returns_to_auto() {
        let mut field = SlugField::new();
        field.on_user_edit("custom", "Title");
        field.on_user_edit("", "My Title");
        assert!(!field.is_user_edited());
        assert_eq!(field.value(), "my-title");

        field.on_title_change("My Title Two");
        assert_eq!(field.value(), "my-title-two");
    }

    #[test]
    fn test_user_edit_matching_derived_value_still_counts_as_edit() {
        let mut field = SlugField::new();
        field.on_title_change("Portfolio");
        field.on_user_edit("portfolio", "Portfolio");
        field.on_title_change("Portfolio 2");
        assert_eq!(field.value(), "portfolio");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("home-video-gallery"));
        assert!(is_valid_slug("a1"));
        assert!(!is_valid_slug("Home"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug(""));
    }
}
