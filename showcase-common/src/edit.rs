//! Editing an existing page: draft state, URL checks and save rules

use crate::catalog::EditablePage;
use crate::page::{META_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditContentType {
    #[default]
    External,
    Custom,
}

impl EditContentType {
    pub const ALL: &'static [EditContentType] = &[EditContentType::External, EditContentType::Custom];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "external" => Some(EditContentType::External),
            "custom" => Some(EditContentType::Custom),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditContentType::External => "External URL",
            EditContentType::Custom => "Custom Page",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditContentType::External => "Link to external content like Figma prototypes",
            EditContentType::Custom => "Create custom components and layouts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTemplate {
    VideoGallery,
    PrototypeDisplay,
    ContentShowcase,
    CustomComponent,
}

impl PageTemplate {
    pub const ALL: &'static [PageTemplate] = &[
        PageTemplate::VideoGallery,
        PageTemplate::PrototypeDisplay,
        PageTemplate::ContentShowcase,
        PageTemplate::CustomComponent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageTemplate::VideoGallery => "video-gallery",
            PageTemplate::PrototypeDisplay => "prototype-display",
            PageTemplate::ContentShowcase => "content-showcase",
            PageTemplate::CustomComponent => "custom-component",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageTemplate::VideoGallery => "Video Gallery Template",
            PageTemplate::PrototypeDisplay => "Prototype Display Template",
            PageTemplate::ContentShowcase => "Content Showcase Template",
            PageTemplate::CustomComponent => "Custom Component",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PageTemplate::VideoGallery => "Grid layout for video content with thumbnails",
            PageTemplate::PrototypeDisplay => "Full-screen iframe for interactive prototypes",
            PageTemplate::ContentShowcase => "Flexible layout for mixed content types",
            PageTemplate::CustomComponent => "Build your own component from scratch",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl PropType {
    pub const ALL: &'static [PropType] = &[
        PropType::String,
        PropType::Number,
        PropType::Boolean,
        PropType::Array,
        PropType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Array => "array",
            PropType::Object => "object",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropType::String => "String",
            PropType::Number => "Number",
            PropType::Boolean => "Boolean",
            PropType::Array => "Array",
            PropType::Object => "Object",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProp {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: PropType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropField {
    Key,
    Value,
}

/// Problems with an external URL on the edit page
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlCheckError {
    #[error("URL is required")]
    Required,
    #[error("Please enter a valid URL")]
    Invalid,
    #[error("URL must use HTTP or HTTPS protocol")]
    UnsupportedScheme,
    #[error("URL may not support iframe embedding. Please verify the link works in an incognito window.")]
    NotEmbeddable,
}

/// Live check while typing: present, parseable, http(s)
pub fn check_external_url(url: &str) -> Result<(), UrlCheckError> {
    if url.trim().is_empty() {
        return Err(UrlCheckError::Required);
    }
    let parsed = Url::parse(url).map_err(|_| UrlCheckError::Invalid)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlCheckError::UnsupportedScheme),
    }
}

/// Preview only opens URLs that are likely to allow embedding
pub fn check_preview_url(url: &str) -> Result<(), UrlCheckError> {
    check_external_url(url)?;
    if url.contains("figma.com") || url.contains("prototype") {
        Ok(())
    } else {
        Err(UrlCheckError::NotEmbeddable)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSaveError {
    #[error("Page title is required")]
    TitleRequired,
    #[error("External URL is required")]
    ExternalUrlRequired,
    #[error("Component name is required for custom components")]
    ComponentNameRequired,
}

/// Public URL shown in the SEO preview card
pub fn seo_preview_url(base: &str, title: &str) -> String {
    let mut path = String::new();
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                path.push('-');
            }
            in_space = true;
        } else {
            path.push(c);
            in_space = false;
        }
    }
    if path.is_empty() {
        path.push_str("page-url");
    }
    format!("{}/{path}", base.trim_end_matches('/'))
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// One change from the edit form
#[derive(Clone, Debug, PartialEq)]
pub enum EditChange {
    ContentType(EditContentType),
    ExternalUrl(String),
    Template(Option<PageTemplate>),
    ComponentName(String),
    Title(String),
    Description(String),
    AddProp,
    RemoveProp(usize),
    UpdateProp(usize, PropField, String),
    PropType(usize, PropType),
}

/// Edit form state for one existing page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    page_id: Option<String>,
    pub content_type: EditContentType,
    pub external_url: String,
    pub template: Option<PageTemplate>,
    pub component_name: String,
    pub custom_props: Vec<CustomProp>,
    pub title: String,
    pub description: String,
    dirty: bool,
}

impl EditDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switching away from the current page needs confirmation
    pub fn needs_confirmation(&self) -> bool {
        self.page_id.is_some() && self.dirty
    }

    /// Replace the draft with a stored page and clear the dirty flag
    pub fn load(&mut self, page: &EditablePage) {
        *self = Self {
            page_id: Some(page.id.to_string()),
            content_type: EditContentType::parse(page.kind).unwrap_or_default(),
            external_url: page.url.unwrap_or_default().to_string(),
            template: page.template.and_then(PageTemplate::parse),
            component_name: String::new(),
            custom_props: Vec::new(),
            title: page.title.to_string(),
            description: page.description.to_string(),
            dirty: false,
        };
    }

    fn touch(&mut self) {
        if self.page_id.is_some() {
            self.dirty = true;
        }
    }

    pub fn set_content_type(&mut self, content_type: EditContentType) {
        self.content_type = content_type;
        self.touch();
    }

    pub fn set_external_url(&mut self, url: impl Into<String>) {
        self.external_url = url.into();
        self.touch();
    }

    pub fn set_template(&mut self, template: Option<PageTemplate>) {
        self.template = template;
        self.touch();
    }

    pub fn set_component_name(&mut self, name: impl Into<String>) {
        self.component_name = name.into();
        self.touch();
    }

    /// Title input is capped at the SEO length
    pub fn set_title(&mut self, title: &str) {
        self.title = truncate_chars(title, TITLE_MAX_CHARS);
        self.touch();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = truncate_chars(description, META_DESCRIPTION_MAX_CHARS);
        self.touch();
    }

    pub fn add_prop(&mut self) {
        self.custom_props.push(CustomProp::default());
        self.touch();
    }

    pub fn remove_prop(&mut self, index: usize) {
        if index < self.custom_props.len() {
            self.custom_props.remove(index);
            self.touch();
        }
    }

    pub fn update_prop(&mut self, index: usize, field: PropField, value: &str) {
        if let Some(prop) = self.custom_props.get_mut(index) {
            match field {
                PropField::Key => prop.key = value.to_string(),
                PropField::Value => prop.value = value.to_string(),
            }
            self.touch();
        }
    }

    pub fn set_prop_type(&mut self, index: usize, kind: PropType) {
        if let Some(prop) = self.custom_props.get_mut(index) {
            prop.kind = kind;
            self.touch();
        }
    }

    pub fn apply(&mut self, change: EditChange) {
        match change {
            EditChange::ContentType(content_type) => self.set_content_type(content_type),
            EditChange::ExternalUrl(url) => self.set_external_url(url),
            EditChange::Template(template) => self.set_template(template),
            EditChange::ComponentName(name) => self.set_component_name(name),
            EditChange::Title(title) => self.set_title(&title),
            EditChange::Description(text) => self.set_description(&text),
            EditChange::AddProp => self.add_prop(),
            EditChange::RemoveProp(index) => self.remove_prop(index),
            EditChange::UpdateProp(index, field, value) => self.update_prop(index, field, &value),
            EditChange::PropType(index, kind) => self.set_prop_type(index, kind),
        }
    }

    /// Save rules. Nothing to do (`Ok(false)`) unless the draft is dirty.
    pub fn check_save(&self) -> Result<bool, EditSaveError> {
        if !self.dirty {
            return Ok(false);
        }
        if self.title.trim().is_empty() {
            return Err(EditSaveError::TitleRequired);
        }
        match self.content_type {
            EditContentType::External if self.external_url.trim().is_empty() => {
                Err(EditSaveError::ExternalUrlRequired)
            }
            EditContentType::Custom
                if self.template == Some(PageTemplate::CustomComponent)
                    && self.component_name.trim().is_empty() =>
            {
                Err(EditSaveError::ComponentNameRequired)
            }
            _ => Ok(true),
        }
    }

    /// Record a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Where "save and preview" navigates afterwards
    pub fn preview_route(&self) -> Option<String> {
        match self.content_type {
            EditContentType::External => Some("/figma-prototype-display".to_string()),
            EditContentType::Custom => self.page_id.as_ref().map(|id| format!("/{id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::editable_page;

    fn loaded(id: &str) -> EditDraft {
        let mut draft = EditDraft::new();
        draft.load(editable_page(id).unwrap());
        draft
    }

    #[test]
    fn test_load_fills_and_clears_dirty() {
        let mut draft = loaded("figma-prototype-display");
        assert_eq!(draft.content_type, EditContentType::External);
        assert_eq!(draft.external_url, "https://www.figma.com/proto/example/prototype");
        assert!(!draft.is_dirty());

        draft.set_title("Prototypes");
        assert!(draft.needs_confirmation());

        draft.load(editable_page("full-screen-video-player").unwrap());
        assert!(!draft.is_dirty());
        assert_eq!(draft.template, Some(PageTemplate::VideoGallery));
        assert_eq!(draft.external_url, "");
    }

    #[test]
    fn test_edits_before_selecting_a_page_are_not_dirty() {
        let mut draft = EditDraft::new();
        draft.set_title("x");
        assert!(!draft.is_dirty());
        assert!(!draft.needs_confirmation());
    }

    #[test]
    fn test_save_requires_changes() {
        let draft = loaded("home-video-gallery");
        assert_eq!(draft.check_save(), Ok(false));
    }

    #[test]
    fn test_save_rules() {
        let mut draft = loaded("figma-prototype-display");
        draft.set_external_url("");
        assert_eq!(draft.check_save(), Err(EditSaveError::ExternalUrlRequired));

        draft.set_external_url("https://www.figma.com/proto/x");
        draft.set_title("   ");
        assert_eq!(draft.check_save(), Err(EditSaveError::TitleRequired));

        let mut draft = loaded("home-video-gallery");
        draft.set_template(Some(PageTemplate::CustomComponent));
        assert_eq!(draft.check_save(), Err(EditSaveError::ComponentNameRequired));
        draft.set_component_name("CaseStudyHero");
        assert_eq!(draft.check_save(), Ok(true));

        draft.mark_saved();
        assert_eq!(draft.check_save(), Ok(false));
    }

    #[test]
    fn test_title_and_description_capped() {
        let mut draft = loaded("home-video-gallery");
        draft.set_title(&"t".repeat(80));
        draft.set_description(&"d".repeat(200));
        assert_eq!(draft.title.chars().count(), 60);
        assert_eq!(draft.description.chars().count(), 160);
    }

    #[test]
    fn test_custom_props() {
        let mut draft = loaded("home-video-gallery");
        draft.add_prop();
        draft.add_prop();
        draft.update_prop(0, PropField::Key, "columns");
        draft.update_prop(0, PropField::Value, "3");
        draft.set_prop_type(0, PropType::Number);
        draft.remove_prop(1);
        draft.remove_prop(7);
        assert_eq!(
            draft.custom_props,
            vec![CustomProp {
                key: "columns".into(),
                value: "3".into(),
                kind: PropType::Number,
            }]
        );
        let json = serde_json::to_string(&draft.custom_props[0]).unwrap();
        assert_eq!(json, r#"{"key":"columns","value":"3","type":"number"}"#);
    }

    #[test]
    fn test_url_checks() {
        assert_eq!(check_external_url(""), Err(UrlCheckError::Required));
        assert_eq!(check_external_url("figma"), Err(UrlCheckError::Invalid));
        assert_eq!(
            check_external_url("ftp://files.example.com"),
            Err(UrlCheckError::UnsupportedScheme)
        );
        assert_eq!(check_external_url("https://storybook.example.com"), Ok(()));

        assert_eq!(
            check_preview_url("https://storybook.example.com"),
            Err(UrlCheckError::NotEmbeddable)
        );
        assert_eq!(
            check_preview_url("https://www.figma.com/proto/example/prototype"),
            Ok(())
        );
    }

    #[test]
    fn test_seo_preview_url() {
        assert_eq!(
            seo_preview_url("https://enterprise-ux.com", "Video  Showcase"),
            "https://enterprise-ux.com/video-showcase"
        );
        assert_eq!(
            seo_preview_url("https://enterprise-ux.com/", ""),
            "https://enterprise-ux.com/page-url"
        );
    }

    #[test]
    fn test_preview_route() {
        assert_eq!(
            loaded("figma-prototype-display").preview_route().as_deref(),
            Some("/figma-prototype-display")
        );
        assert_eq!(
            loaded("full-screen-video-player").preview_route().as_deref(),
            Some("/full-screen-video-player")
        );
    }

    #[test]
    fn test_apply_changes() {
        let mut draft = loaded("home-video-gallery");
        draft.apply(EditChange::ContentType(EditContentType::Custom));
        draft.apply(EditChange::Template(Some(PageTemplate::CustomComponent)));
        draft.apply(EditChange::AddProp);
        draft.apply(EditChange::UpdateProp(0, PropField::Key, "columns".into()));
        draft.apply(EditChange::PropType(0, PropType::Number));
        assert_eq!(draft.custom_props[0].key, "columns");
        assert_eq!(draft.custom_props[0].kind, PropType::Number);
        assert_eq!(draft.check_save(), Err(EditSaveError::ComponentNameRequired));

        draft.apply(EditChange::ComponentName("TeamGrid".into()));
        assert_eq!(draft.check_save(), Ok(true));
        draft.apply(EditChange::RemoveProp(0));
        assert!(draft.custom_props.is_empty());
    }
}
