//! Full-screen player: resolving what to play from the query string and
//! mapping keyboard shortcuts.

use crate::catalog::{player_video, PLAYER_VIDEOS};
use thiserror::Error;

pub const CUSTOM_VIDEO_TITLE: &str = "Custom Video";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("The requested video could not be found or loaded")]
    NotFound(String),
    #[error("Failed to load video")]
    LoadFailed,
}

/// What the player page was asked to show
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub id: Option<String>,
    pub src: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PlayerQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedVideo {
    pub src: String,
    pub title: String,
    pub description: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A custom `src` wins over `id`; no parameters plays the first video.
pub fn resolve(query: &PlayerQuery) -> Result<ResolvedVideo, PlayerError> {
    if let Some(src) = non_empty(&query.src) {
        return Ok(ResolvedVideo {
            src: src.to_string(),
            title: non_empty(&query.title)
                .unwrap_or(CUSTOM_VIDEO_TITLE)
                .to_string(),
            description: non_empty(&query.description)
                .unwrap_or_default()
                .to_string(),
        });
    }

    let video = match non_empty(&query.id) {
        Some(id) => player_video(id).ok_or_else(|| PlayerError::NotFound(id.to_string()))?,
        None => PLAYER_VIDEOS
            .first()
            .ok_or_else(|| PlayerError::NotFound(String::new()))?,
    };
    Ok(ResolvedVideo {
        src: video.src.to_string(),
        title: video.title.to_string(),
        description: video.description.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    Close,
    ToggleMute,
    ToggleFullscreen,
    SeekBackward,
    SeekForward,
}

impl ShortcutAction {
    /// Map a `KeyboardEvent.key` value to a player action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(ShortcutAction::TogglePlay),
            "Escape" => Some(ShortcutAction::Close),
            "m" | "M" => Some(ShortcutAction::ToggleMute),
            "f" | "F" => Some(ShortcutAction::ToggleFullscreen),
            "ArrowLeft" => Some(ShortcutAction::SeekBackward),
            "ArrowRight" => Some(ShortcutAction::SeekForward),
            _ => None,
        }
    }

    /// Keys whose browser default (scrolling) must be suppressed
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            ShortcutAction::TogglePlay | ShortcutAction::SeekBackward | ShortcutAction::SeekForward
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_plays_first_video() {
        let video = resolve(&PlayerQuery::default()).unwrap();
        assert_eq!(video.title, "UX Research Methodology Deep Dive");
        assert!(video.src.ends_with("BigBuckBunny.mp4"));
    }

    #[test]
    fn test_id_lookup() {
        let video = resolve(&PlayerQuery::by_id("mobile-first-transformation")).unwrap();
        assert_eq!(video.title, "Mobile-First Digital Transformation");

        match resolve(&PlayerQuery::by_id("nope")) {
            Err(PlayerError::NotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_src_wins_over_id() {
        let query = PlayerQuery {
            id: Some("nope".to_string()),
            src: Some("https://cdn.test/a.mp4".to_string()),
            title: None,
            description: Some("Demo reel".to_string()),
        };
        let video = resolve(&query).unwrap();
        assert_eq!(video.src, "https://cdn.test/a.mp4");
        assert_eq!(video.title, "Custom Video");
        assert_eq!(video.description, "Demo reel");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            PlayerError::NotFound("x".into()).to_string(),
            "The requested video could not be found or loaded"
        );
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(ShortcutAction::from_key(" "), Some(ShortcutAction::TogglePlay));
        assert_eq!(ShortcutAction::from_key("M"), Some(ShortcutAction::ToggleMute));
        assert_eq!(ShortcutAction::from_key("f"), Some(ShortcutAction::ToggleFullscreen));
        assert_eq!(ShortcutAction::from_key("Escape"), Some(ShortcutAction::Close));
        assert_eq!(ShortcutAction::from_key("x"), None);
        assert!(ShortcutAction::SeekForward.prevents_default());
        assert!(!ShortcutAction::Close.prevents_default());
    }
}
