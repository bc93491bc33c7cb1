//! Sandboxed `<iframe>` with zoom, load/error overlays and fullscreen
//!
//! Load state runs through the same [`ViewerMachine`] as the video player,
//! in its frame flavour: no transport, only loading/ready/error and
//! fullscreen.

use crate::components::icons::{
    AlertTriangleIcon, ExternalLinkIcon, FileTextIcon, MinimizeIcon, RefreshIcon, ZoomInIcon,
    ZoomOutIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::wasm_utils::{
    is_document_fullscreen, open_in_new_tab, toggle_fullscreen, use_document_listener,
};
use dioxus::prelude::*;
use showcase_common::prototype::{external_link, Zoom, FRAME_SANDBOX};
use showcase_common::viewer::{ViewerEvent, ViewerMachine};

const ZOOM_BUTTON: &str =
    "h-8 w-8 flex items-center justify-center rounded text-gray-300 hover:bg-gray-700 disabled:opacity-40";

const FAILURE_REASONS: &[&str] = &[
    "Invalid or expired Figma URL",
    "Network connectivity issues",
    "Prototype privacy settings",
];

#[component]
pub fn PrototypeFrame(
    /// Element id the page toggles fullscreen on
    container_id: String,
    src: String,
    title: String,
    /// Mirrors fullscreen changes up to the page
    on_fullscreen_change: EventHandler<bool>,
) -> Element {
    let mut machine = use_signal(ViewerMachine::frame);
    let mut zoom = use_signal(Zoom::default);

    let mut loaded_src = use_signal(|| src.clone());
    use_effect(use_reactive((&src,), move |(src,)| {
        if *loaded_src.peek() == src {
            return;
        }
        loaded_src.set(src);
        machine.write().apply(ViewerEvent::Reset);
    }));

    use_document_listener("fullscreenchange", move |_| {
        let fullscreen = is_document_fullscreen();
        if machine
            .write()
            .apply(ViewerEvent::FullscreenChanged(fullscreen))
        {
            on_fullscreen_change.call(fullscreen);
        }
    });

    if src.is_empty() {
        return rsx! {
            div { class: "flex-1 flex items-center justify-center",
                div { class: "text-center p-8",
                    FileTextIcon { class: "w-16 h-16 mx-auto mb-4 text-gray-500" }
                    h3 { class: "text-xl font-semibold text-white mb-2", "No Prototype Available" }
                    p { class: "text-gray-400 max-w-md",
                        "This page is configured to display a Figma prototype, but no URL has been provided yet. Please contact the administrator to add prototype content."
                    }
                }
            }
        };
    }

    let state = machine.read().clone();
    let current_zoom = *zoom.read();
    let fullscreen = state.is_fullscreen();
    let frame_style = format!(
        "{} min-height: {};",
        current_zoom.transform_style(),
        if fullscreen { "100vh" } else { "600px" }
    );
    let frame_opacity = if state.is_ready() { "opacity-100" } else { "opacity-0" };
    let zoom_label = format!("{}%", current_zoom.percent());
    let external = external_link(&src);
    let exit_target = container_id.clone();

    rsx! {
        div {
            id: "{container_id}",
            class: if fullscreen { "fixed inset-0 z-50 bg-black" } else { "flex-1 relative bg-black" },
            if fullscreen {
                ChromelessButton {
                    class: Some("absolute top-4 right-4 z-30 p-2 bg-black/60 rounded-full text-white".to_string()),
                    aria_label: Some("Exit fullscreen".to_string()),
                    onclick: move |_| toggle_fullscreen(&exit_target),
                    MinimizeIcon { class: "w-5 h-5" }
                }
            } else {
                div { class: "absolute top-4 right-4 z-10 flex items-center gap-1 bg-gray-900/90 border border-gray-700 rounded-md p-1",
                    ChromelessButton {
                        class: Some(ZOOM_BUTTON.to_string()),
                        aria_label: Some("Zoom out".to_string()),
                        disabled: !current_zoom.can_zoom_out(),
                        onclick: move |_| zoom.write().zoom_out(),
                        ZoomOutIcon { class: "w-4 h-4" }
                    }
                    span { class: "text-xs font-mono text-gray-400 px-2 min-w-[3rem] text-center",
                        "{zoom_label}"
                    }
                    ChromelessButton {
                        class: Some(ZOOM_BUTTON.to_string()),
                        aria_label: Some("Zoom in".to_string()),
                        disabled: !current_zoom.can_zoom_in(),
                        onclick: move |_| zoom.write().zoom_in(),
                        ZoomInIcon { class: "w-4 h-4" }
                    }
                    ChromelessButton {
                        class: Some(ZOOM_BUTTON.to_string()),
                        aria_label: Some("Reset zoom".to_string()),
                        onclick: move |_| zoom.write().reset(),
                        RefreshIcon { class: "w-4 h-4" }
                    }
                }
            }
            if state.is_loading() {
                div { class: "absolute inset-0 flex items-center justify-center z-20",
                    div { class: "text-center",
                        div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500 mx-auto mb-4" }
                        p { class: "text-gray-400", "Loading prototype..." }
                    }
                }
            }
            if state.error().is_some() {
                div { class: "absolute inset-0 flex items-center justify-center z-20",
                    div { class: "text-center p-8 max-w-md",
                        AlertTriangleIcon { class: "w-16 h-16 mx-auto mb-4 text-amber-400" }
                        h4 { class: "text-xl font-semibold text-white mb-3", "Failed to Load Prototype" }
                        p { class: "text-gray-400 mb-4",
                            "The prototype could not be loaded. This might be due to:"
                        }
                        ul { class: "text-sm text-gray-400 text-left mb-6 space-y-2 list-disc list-inside",
                            for reason in FAILURE_REASONS.iter() {
                                li { key: "{reason}", "{reason}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Medium,
                            onclick: move |_| open_in_new_tab(&external),
                            ExternalLinkIcon { class: "w-4 h-4" }
                            "Try Opening Directly"
                        }
                    }
                }
            }
            iframe {
                src: "{src}",
                title: "{title}",
                class: "w-full h-full border-0 transition-opacity duration-300 {frame_opacity}",
                style: "{frame_style}",
                allow: "fullscreen",
                "sandbox": FRAME_SANDBOX,
                onload: move |_| {
                    machine.write().apply(ViewerEvent::Loaded);
                },
                onerror: move |_| {
                    machine
                        .write()
                        .apply(ViewerEvent::Failed("Failed to load prototype".to_string()));
                },
            }
            div { class: "absolute bottom-4 left-4 md:hidden bg-black/70 text-white text-xs px-3 py-2 rounded-md",
                "Tap and drag to interact"
            }
        }
    }
}
