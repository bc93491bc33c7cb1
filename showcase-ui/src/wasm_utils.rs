//! Browser interop: document listeners, fullscreen, media elements
//!
//! # Event Listener Cleanup
//!
//! A `Closure` handed to `addEventListener` must outlive the listener. Instead
//! of `closure.forget()`, the closure is stored in [`DocumentEventListener`],
//! whose `Drop` removes the listener again:
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//! drop(listener); // listener removed
//! ```
//!
//! [`use_document_listener`] ties that lifetime to a component scope.

use dioxus::prelude::*;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not attach document listener for {event_name}");
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Listen on the document for as long as the calling component is mounted.
///
/// The handler is installed once; read signals inside it rather than
/// capturing props by value.
pub fn use_document_listener(
    event_name: &'static str,
    handler: impl FnMut(JsValue) + 'static,
) {
    use_hook(move || {
        Rc::new(document().map(|d| DocumentEventListener::new(d, event_name, handler)))
    });
}

/// `KeyboardEvent.key` of a raw document event
pub fn event_key(event: &JsValue) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|e| e.key())
}

/// Whether Ctrl (or Cmd on macOS) was held
pub fn has_command_modifier(event: &JsValue) -> bool {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|e| e.ctrl_key() || e.meta_key())
        .unwrap_or(false)
}

pub fn prevent_default(event: &JsValue) {
    if let Some(e) = event.dyn_ref::<web_sys::Event>() {
        e.prevent_default();
    }
}

pub fn is_document_fullscreen() -> bool {
    document()
        .and_then(|d| d.fullscreen_element())
        .is_some()
}

/// Enter fullscreen on the element with `element_id`, or leave it.
///
/// Callers learn the outcome from `fullscreenchange`, not from here.
pub fn toggle_fullscreen(element_id: &str) {
    let Some(document) = document() else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    let Some(element) = document.get_element_by_id(element_id) else {
        warn!("No element #{element_id} to make fullscreen");
        return;
    };
    if let Err(e) = element.request_fullscreen() {
        warn!("Fullscreen request rejected: {:?}", e);
    }
}

pub fn exit_fullscreen() {
    if let Some(document) = document() {
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        }
    }
}

pub fn scroll_into_view(element_id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(element_id)) {
        element.scroll_into_view();
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Could not open {url}: {:?}", e);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Reference to a mounted `<video>` element.
///
/// The element is captured from `onmounted`. Commands issued before it
/// mounts are ignored.
#[derive(Clone, Copy, PartialEq)]
pub struct MediaHandle {
    element: Signal<Option<web_sys::HtmlMediaElement>>,
}

impl MediaHandle {
    pub fn attach(&mut self, mounted: &MountedData) {
        let media = mounted
            .downcast::<web_sys::Element>()
            .cloned()
            .and_then(|el| el.dyn_into::<web_sys::HtmlMediaElement>().ok());
        if media.is_none() {
            warn!("Mounted element is not a media element");
        }
        self.element.set(media);
    }

    pub fn play(&self) {
        if let Some(ref media) = *self.element.peek() {
            if let Err(e) = media.play() {
                warn!("Play request failed: {:?}", e);
            }
        }
    }

    pub fn pause(&self) {
        if let Some(ref media) = *self.element.peek() {
            let _ = media.pause();
        }
    }

    pub fn seek(&self, secs: f64) {
        if let Some(ref media) = *self.element.peek() {
            media.set_current_time(secs);
        }
    }

    pub fn set_volume(&self, volume: f64) {
        if let Some(ref media) = *self.element.peek() {
            media.set_volume(volume);
        }
    }

    pub fn set_muted(&self, muted: bool) {
        if let Some(ref media) = *self.element.peek() {
            media.set_muted(muted);
        }
    }

    /// Restart loading the current source
    pub fn reload(&self) {
        if let Some(ref media) = *self.element.peek() {
            media.load();
        }
    }

    pub fn current_time(&self) -> Option<f64> {
        self.element.peek().as_ref().map(|m| m.current_time())
    }

    pub fn duration(&self) -> Option<f64> {
        self.element.peek().as_ref().map(|m| m.duration())
    }
}

pub fn use_media_handle() -> MediaHandle {
    MediaHandle {
        element: use_signal(|| None),
    }
}
