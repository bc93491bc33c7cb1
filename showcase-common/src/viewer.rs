//! State machine shared by the video modal, the full-screen player and the
//! prototype frame.
//!
//! Load state and playback are driven by media/frame events. Fullscreen is an
//! orthogonal flag that only the platform `fullscreenchange` listener may set.

use tracing::debug;

/// Seconds skipped by the seek shortcuts
pub const SEEK_STEP_SECS: f64 = 10.0;
pub const DEFAULT_VOLUME: f64 = 0.8;
/// Idle time before player controls hide while playing
pub const CONTROLS_HIDE_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready,
    /// Terminal until [`ViewerEvent::Retry`]
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Frame,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// Media can play / frame finished loading
    Loaded,
    Failed(String),
    Retry,
    /// Media element reports it started playing
    Played,
    /// Media element reports it paused
    Paused,
    Ended,
    /// Source changed: start over
    Reset,
    FullscreenChanged(bool),
    Buffering(bool),
    Metadata { duration: f64 },
    TimeUpdate(f64),
}

/// Current position, volume and buffering state of a video
#[derive(Clone, Debug, PartialEq)]
pub struct Transport {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub buffering: bool,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            muted: true,
            buffering: false,
        }
    }
}

impl Transport {
    /// Playback position as a fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Target time for a relative seek, clamped to the media length
    pub fn seek_target(&self, delta: f64) -> f64 {
        let upper = if self.duration.is_finite() {
            self.duration.max(0.0)
        } else {
            f64::MAX
        };
        (self.current_time + delta).clamp(0.0, upper)
    }

    /// Target time for a click at `fraction` of the progress bar
    pub fn seek_fraction(&self, fraction: f64) -> Option<f64> {
        if self.duration > 0.0 && self.duration.is_finite() {
            Some(fraction.clamp(0.0, 1.0) * self.duration)
        } else {
            None
        }
    }

    /// Set volume from the slider. Zero mutes; anything else unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            self.volume
        };
        self.volume = volume;
        self.muted = volume == 0.0;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerMachine {
    kind: MediaKind,
    phase: LoadPhase,
    playback: Playback,
    fullscreen: bool,
    transport: Transport,
}

impl ViewerMachine {
    pub fn video() -> Self {
        Self::new(MediaKind::Video)
    }

    pub fn frame() -> Self {
        Self::new(MediaKind::Frame)
    }

    fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            phase: LoadPhase::Loading,
            playback: Playback::Paused,
            fullscreen: false,
            transport: Transport::default(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut Transport {
        &mut self.transport
    }

    /// Apply an event. Returns whether anything changed.
    pub fn apply(&mut self, event: ViewerEvent) -> bool {
        let before = self.clone();
        match event {
            ViewerEvent::Loaded => {
                if self.phase == LoadPhase::Loading {
                    self.phase = LoadPhase::Ready;
                }
            }
            ViewerEvent::Failed(message) => {
                if self.phase != LoadPhase::Ready || self.kind == MediaKind::Video {
                    self.phase = LoadPhase::Error(message);
                    self.playback = Playback::Paused;
                    self.transport.buffering = false;
                }
            }
            ViewerEvent::Retry => {
                if matches!(self.phase, LoadPhase::Error(_)) {
                    self.phase = LoadPhase::Loading;
                }
            }
            ViewerEvent::Reset => {
                let fullscreen = self.fullscreen;
                let volume = self.transport.volume;
                let muted = self.transport.muted;
                *self = Self::new(self.kind);
                self.fullscreen = fullscreen;
                self.transport.volume = volume;
                self.transport.muted = muted;
            }
            ViewerEvent::Played => {
                if self.kind == MediaKind::Video && self.phase == LoadPhase::Ready {
                    self.playback = Playback::Playing;
                }
            }
            ViewerEvent::Paused => self.playback = Playback::Paused,
            ViewerEvent::Ended => {
                self.playback = Playback::Paused;
                self.transport.current_time = 0.0;
            }
            ViewerEvent::FullscreenChanged(on) => self.fullscreen = on,
            ViewerEvent::Buffering(on) => self.transport.buffering = on,
            ViewerEvent::Metadata { duration } => {
                self.transport.duration = if duration.is_finite() { duration } else { 0.0 };
            }
            ViewerEvent::TimeUpdate(time) => {
                if time.is_finite() {
                    self.transport.current_time = time.max(0.0);
                }
            }
        }
        let changed = *self != before;
        if changed {
            debug!("Viewer {:?} now {:?}/{:?}", self.kind, self.phase, self.playback);
        }
        changed
    }

    /// Whether a play request should be issued for a play/pause toggle
    pub fn wants_play_on_toggle(&self) -> bool {
        self.kind == MediaKind::Video && self.is_ready() && !self.is_playing()
    }
}

/// `m:ss`, with non-finite and negative values showing `0:00`
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_load_and_play() {
        let mut viewer = ViewerMachine::video();
        assert!(viewer.is_loading());
        assert!(!viewer.apply(ViewerEvent::Played));

        assert!(viewer.apply(ViewerEvent::Loaded));
        assert!(viewer.wants_play_on_toggle());
        viewer.apply(ViewerEvent::Played);
        assert!(viewer.is_playing());
        assert!(!viewer.wants_play_on_toggle());

        viewer.apply(ViewerEvent::Paused);
        assert!(!viewer.is_playing());
    }

    #[test]
    fn test_error_is_terminal_until_retry() {
        let mut viewer = ViewerMachine::video();
        viewer.apply(ViewerEvent::Failed("Failed to load video".into()));
        assert_eq!(viewer.error(), Some("Failed to load video"));

        assert!(!viewer.apply(ViewerEvent::Loaded));
        assert!(!viewer.apply(ViewerEvent::Played));
        assert!(viewer.error().is_some());

        assert!(viewer.apply(ViewerEvent::Retry));
        assert!(viewer.is_loading());
        viewer.apply(ViewerEvent::Loaded);
        assert!(viewer.is_ready());
    }

    #[test]
    fn test_retry_only_from_error() {
        let mut viewer = ViewerMachine::frame();
        viewer.apply(ViewerEvent::Loaded);
        assert!(!viewer.apply(ViewerEvent::Retry));
        assert!(viewer.is_ready());
    }

    #[test]
    fn test_frame_never_plays() {
        let mut viewer = ViewerMachine::frame();
        viewer.apply(ViewerEvent::Loaded);
        assert!(!viewer.apply(ViewerEvent::Played));
        assert!(!viewer.wants_play_on_toggle());
    }

    #[test]
    fn test_loaded_frame_ignores_late_failure() {
        let mut viewer = ViewerMachine::frame();
        viewer.apply(ViewerEvent::Loaded);
        assert!(!viewer.apply(ViewerEvent::Failed("timeout".into())));
        assert!(viewer.is_ready());
    }

    #[test]
    fn test_fullscreen_is_orthogonal() {
        let mut viewer = ViewerMachine::video();
        viewer.apply(ViewerEvent::FullscreenChanged(true));
        assert!(viewer.is_fullscreen());
        assert!(viewer.is_loading());

        viewer.apply(ViewerEvent::Failed("x".into()));
        assert!(viewer.is_fullscreen());
        viewer.apply(ViewerEvent::Reset);
        assert!(viewer.is_fullscreen());
        assert!(viewer.is_loading());
    }

    #[test]
    fn test_ended_rewinds_and_pauses() {
        let mut viewer = ViewerMachine::video();
        viewer.apply(ViewerEvent::Loaded);
        viewer.apply(ViewerEvent::Metadata { duration: 120.0 });
        viewer.apply(ViewerEvent::Played);
        viewer.apply(ViewerEvent::TimeUpdate(119.5));
        viewer.apply(ViewerEvent::Ended);
        assert!(!viewer.is_playing());
        assert_eq!(viewer.transport().current_time, 0.0);
    }

    #[test]
    fn test_transport_defaults() {
        let transport = Transport::default();
        assert_eq!(transport.volume, 0.8);
        assert!(transport.muted);
        assert_eq!(transport.progress(), 0.0);
    }

    #[test]
    fn test_seek_clamps() {
        let transport = Transport {
            current_time: 5.0,
            duration: 100.0,
            ..Default::default()
        };
        assert_eq!(transport.seek_target(-SEEK_STEP_SECS), 0.0);
        assert_eq!(transport.seek_target(SEEK_STEP_SECS), 15.0);

        let near_end = Transport {
            current_time: 95.0,
            duration: 100.0,
            ..Default::default()
        };
        assert_eq!(near_end.seek_target(SEEK_STEP_SECS), 100.0);
        assert_eq!(near_end.seek_fraction(0.25), Some(25.0));
        assert_eq!(Transport::default().seek_fraction(0.5), None);
    }

    #[test]
    fn test_volume_and_mute() {
        let mut transport = Transport::default();
        transport.set_volume(0.5);
        assert!(!transport.muted);
        assert_eq!(transport.volume, 0.5);

        transport.set_volume(0.0);
        assert!(transport.muted);

        transport.set_volume(3.0);
        assert_eq!(transport.volume, 1.0);
        transport.toggle_mute();
        assert!(transport.muted);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(765.0), "12:45");
    }
}
