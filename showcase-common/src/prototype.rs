//! Embedded prototype helpers: zoom, sandboxing and external links

use url::Url;

/// Sandbox applied to every embedded prototype frame
pub const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-popups allow-forms";

const MIN_TENTHS: u8 = 5;
const MAX_TENTHS: u8 = 20;
const DEFAULT_TENTHS: u8 = 10;

/// Frame zoom between 50% and 200% in 10% steps.
///
/// Kept as whole tenths so repeated steps land exactly on the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zoom {
    tenths: u8,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            tenths: DEFAULT_TENTHS,
        }
    }
}

impl Zoom {
    pub fn zoom_in(&mut self) {
        self.tenths = (self.tenths + 1).min(MAX_TENTHS);
    }

    pub fn zoom_out(&mut self) {
        self.tenths = self.tenths.saturating_sub(1).max(MIN_TENTHS);
    }

    pub fn reset(&mut self) {
        self.tenths = DEFAULT_TENTHS;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.tenths < MAX_TENTHS
    }

    pub fn can_zoom_out(&self) -> bool {
        self.tenths > MIN_TENTHS
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn percent(&self) -> u32 {
        u32::from(self.tenths) * 10
    }

    /// Inline style for the scaled frame
    pub fn transform_style(&self) -> String {
        format!("transform: scale({}); transform-origin: top left;", self.scale())
    }
}

/// URL to open in a new tab for a prototype.
///
/// Figma embed URLs carry the real prototype in their `url` query parameter.
pub fn external_link(src: &str) -> String {
    if !src.contains("embed") {
        return src.to_string();
    }
    Url::parse(src)
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|inner| !inner.is_empty())
        .unwrap_or_else(|| src.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_bounds() {
        let mut zoom = Zoom::default();
        assert_eq!(zoom.percent(), 100);
        for _ in 0..20 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.scale(), 2.0);
        assert!(!zoom.can_zoom_in());

        for _ in 0..30 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.scale(), 0.5);
        assert_eq!(zoom.percent(), 50);
        assert!(!zoom.can_zoom_out());

        zoom.reset();
        assert_eq!(zoom, Zoom::default());
    }

    #[test]
    fn test_zoom_steps() {
        let mut zoom = Zoom::default();
        zoom.zoom_in();
        zoom.zoom_in();
        assert_eq!(zoom.percent(), 120);
        assert!(zoom.transform_style().contains("scale(1.2)"));
    }

    #[test]
    fn test_external_link_unwraps_embed() {
        let src = "https://www.figma.com/embed?embed_host=share&url=https%3A%2F%2Fwww.figma.com%2Fproto%2FsamplePrototype";
        assert_eq!(
            external_link(src),
            "https://www.figma.com/proto/samplePrototype"
        );
    }

    #[test]
    fn test_external_link_passthrough() {
        assert_eq!(
            external_link("https://www.figma.com/proto/example/prototype"),
            "https://www.figma.com/proto/example/prototype"
        );
        assert_eq!(
            external_link("https://embed.example.com/x"),
            "https://embed.example.com/x"
        );
    }
}
