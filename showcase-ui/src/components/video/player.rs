//! Video surface shared by the gallery modal and the full-screen player
//!
//! Playback state lives in a [`ViewerMachine`] fed only by media element
//! events. Buttons and shortcuts issue commands to the element and wait for
//! the resulting `play`/`pause`/`fullscreenchange` events.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::icons::{
    MaximizeIcon, MinimizeIcon, PauseIcon, PlayIcon, VolumeIcon, VolumeMutedIcon, XIcon,
};
use crate::components::video::VideoErrorView;
use crate::components::ChromelessButton;
use crate::timing::{sleep_ms, use_task_slot};
use crate::wasm_utils::{
    event_key, is_document_fullscreen, prevent_default, toggle_fullscreen, use_document_listener,
    use_media_handle,
};
use dioxus::prelude::*;
use showcase_common::player::{PlayerError, ShortcutAction};
use showcase_common::viewer::{
    format_time, ViewerEvent, ViewerMachine, CONTROLS_HIDE_MS, SEEK_STEP_SECS,
};
use tracing::debug;

static PLAYER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const CONTROL_BUTTON: &str = "p-2 rounded-full text-white hover:bg-white/20 transition-colors";

fn bar_fraction(bar_id: &str, client_x: f64) -> Option<f64> {
    let rect = crate::wasm_utils::document()?
        .get_element_by_id(bar_id)?
        .get_bounding_client_rect();
    (rect.width() > 0.0).then(|| (client_x - rect.left()) / rect.width())
}

#[component]
pub fn VideoPlayer(
    src: String,
    title: String,
    #[props(default)] description: String,
    /// Start playing as soon as metadata arrives
    #[props(default = true)]
    autoplay: bool,
    on_close: EventHandler<()>,
) -> Element {
    let container_id = use_hook(|| {
        let id = PLAYER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("video-player-{id}")
    });
    let bar_id = format!("{container_id}-progress");

    let mut machine = use_signal(ViewerMachine::video);
    let mut media = use_media_handle();
    let mut controls_visible = use_signal(|| true);
    let mut hide_controls = use_task_slot();

    let mut loaded_src = use_signal(|| src.clone());
    use_effect(use_reactive((&src,), move |(src,)| {
        if *loaded_src.peek() == src {
            return;
        }
        debug!("Switching video source to {src}");
        loaded_src.set(src);
        machine.write().apply(ViewerEvent::Reset);
    }));

    let fullscreen_target = container_id.clone();
    let dispatch = use_callback(move |action: ShortcutAction| {
        let state = machine.peek().clone();
        match action {
            ShortcutAction::TogglePlay => {
                if state.wants_play_on_toggle() {
                    media.play();
                } else if state.is_playing() {
                    media.pause();
                }
            }
            ShortcutAction::Close => {
                media.pause();
                on_close.call(());
            }
            ShortcutAction::ToggleMute => {
                let mut m = machine.write();
                m.transport_mut().toggle_mute();
                media.set_muted(m.transport().muted);
            }
            ShortcutAction::ToggleFullscreen => toggle_fullscreen(&fullscreen_target),
            ShortcutAction::SeekBackward | ShortcutAction::SeekForward => {
                let delta = if action == ShortcutAction::SeekForward {
                    SEEK_STEP_SECS
                } else {
                    -SEEK_STEP_SECS
                };
                let target = state.transport().seek_target(delta);
                media.seek(target);
                machine.write().apply(ViewerEvent::TimeUpdate(target));
            }
        }
    });

    use_document_listener("keydown", move |event| {
        let Some(action) = event_key(&event).as_deref().and_then(ShortcutAction::from_key) else {
            return;
        };
        if action.prevents_default() {
            prevent_default(&event);
        }
        dispatch.call(action);
    });

    use_document_listener("fullscreenchange", move |_| {
        machine
            .write()
            .apply(ViewerEvent::FullscreenChanged(is_document_fullscreen()));
    });

    let on_activity = move |_| {
        controls_visible.set(true);
        let mut slot = hide_controls;
        hide_controls.start(async move {
            sleep_ms(CONTROLS_HIDE_MS).await;
            if machine.peek().is_playing() {
                controls_visible.set(false);
            }
            slot.finish();
        });
    };

    let state = machine.read().clone();
    let transport = state.transport().clone();
    let show_controls = controls_visible() || !state.is_playing();
    let fade = if show_controls {
        "opacity-100"
    } else {
        "opacity-0 pointer-events-none"
    };
    let progress_percent = transport.progress() * 100.0;
    let volume_value = if transport.muted { 0.0 } else { transport.volume };
    let bar_id_for_click = bar_id.clone();
    let time_label = format!(
        "{} / {}",
        format_time(transport.current_time),
        format_time(transport.duration)
    );
    let seek_value = format!("{progress_percent:.0}");
    let play_label = if state.is_playing() { "Pause" } else { "Play" };
    let mute_label = if transport.muted { "Unmute" } else { "Mute" };

    rsx! {
        div {
            id: "{container_id}",
            class: "relative w-full h-full bg-black flex flex-col",
            onmousemove: on_activity,
            if let Some(message) = state.error() {
                VideoErrorView {
                    message: message.to_string(),
                    on_retry: move |_| {
                        machine.write().apply(ViewerEvent::Retry);
                        media.reload();
                    },
                    on_close: move |_| on_close.call(()),
                }
            }
            div { class: "flex-1 flex items-center justify-center relative min-h-0",
                video {
                    class: "w-full h-full object-contain",
                    src: "{src}",
                    preload: "metadata",
                    playsinline: true,
                    muted: transport.muted,
                    onmounted: move |evt| {
                        media.attach(&evt.data());
                        media.set_volume(machine.peek().transport().volume);
                    },
                    onloadedmetadata: move |_| {
                        let duration = media.duration().unwrap_or(0.0);
                        let mut m = machine.write();
                        m.apply(ViewerEvent::Metadata { duration });
                        m.apply(ViewerEvent::Loaded);
                        drop(m);
                        if autoplay {
                            media.play();
                        }
                    },
                    ontimeupdate: move |_| {
                        if let Some(time) = media.current_time() {
                            machine.write().apply(ViewerEvent::TimeUpdate(time));
                        }
                    },
                    onplay: move |_| {
                        machine.write().apply(ViewerEvent::Played);
                    },
                    onplaying: move |_| {
                        machine.write().apply(ViewerEvent::Buffering(false));
                    },
                    onwaiting: move |_| {
                        machine.write().apply(ViewerEvent::Buffering(true));
                    },
                    onpause: move |_| {
                        machine.write().apply(ViewerEvent::Paused);
                    },
                    onended: move |_| {
                        machine.write().apply(ViewerEvent::Ended);
                    },
                    onerror: move |_| {
                        machine
                            .write()
                            .apply(ViewerEvent::Failed(PlayerError::LoadFailed.to_string()));
                    },
                    onclick: move |_| dispatch.call(ShortcutAction::TogglePlay),
                }
                if state.is_loading() || transport.buffering {
                    div { class: "absolute inset-0 flex items-center justify-center pointer-events-none",
                        div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
                    }
                }
                if state.is_ready() && !state.is_playing() {
                    button {
                        r#type: "button",
                        class: "absolute inset-0 flex items-center justify-center",
                        aria_label: "Play video",
                        onclick: move |_| dispatch.call(ShortcutAction::TogglePlay),
                        div { class: "p-4 bg-black/50 rounded-full",
                            PlayIcon { class: "w-12 h-12 text-white" }
                        }
                    }
                }
            }
            ChromelessButton {
                class: Some(format!("absolute top-4 right-4 z-10 p-2 bg-black/50 rounded-full text-white hover:bg-black/70 transition-opacity {fade}")),
                aria_label: Some("Close video player".to_string()),
                onclick: move |_| dispatch.call(ShortcutAction::Close),
                XIcon { class: "w-6 h-6" }
            }
            div { class: "absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/80 to-transparent p-4 transition-opacity {fade}",
                if !title.is_empty() || !description.is_empty() {
                    div { class: "mb-4",
                        if !title.is_empty() {
                            h3 { class: "text-lg font-semibold text-white mb-1", "{title}" }
                        }
                        if !description.is_empty() {
                            p { class: "text-sm text-gray-300 whitespace-pre-line", "{description}" }
                        }
                    }
                }
                div {
                    id: "{bar_id}",
                    class: "w-full h-2 mb-4 bg-white/20 rounded-full cursor-pointer",
                    role: "slider",
                    aria_label: "Seek",
                    aria_valuenow: "{seek_value}",
                    onclick: move |evt| {
                        let x = evt.client_coordinates().x;
                        let target = bar_fraction(&bar_id_for_click, x)
                            .and_then(|f| machine.peek().transport().seek_fraction(f));
                        if let Some(target) = target {
                            media.seek(target);
                            machine.write().apply(ViewerEvent::TimeUpdate(target));
                        }
                    },
                    div {
                        class: "h-full bg-blue-500 rounded-full",
                        style: "width: {progress_percent}%;",
                    }
                }
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center gap-4",
                        ChromelessButton {
                            class: Some(CONTROL_BUTTON.to_string()),
                            aria_label: Some(play_label.to_string()),
                            disabled: !state.is_ready(),
                            onclick: move |_| dispatch.call(ShortcutAction::TogglePlay),
                            if state.is_playing() {
                                PauseIcon { class: "w-5 h-5" }
                            } else {
                                PlayIcon { class: "w-5 h-5" }
                            }
                        }
                        div { class: "flex items-center gap-2",
                            ChromelessButton {
                                class: Some(CONTROL_BUTTON.to_string()),
                                aria_label: Some(mute_label.to_string()),
                                onclick: move |_| dispatch.call(ShortcutAction::ToggleMute),
                                if transport.muted {
                                    VolumeMutedIcon { class: "w-5 h-5" }
                                } else {
                                    VolumeIcon { class: "w-5 h-5" }
                                }
                            }
                            input {
                                r#type: "range",
                                class: "w-20 accent-blue-500",
                                min: "0",
                                max: "1",
                                step: "0.1",
                                aria_label: "Volume",
                                value: "{volume_value}",
                                oninput: move |evt| {
                                    let Ok(volume) = evt.value().parse::<f64>() else {
                                        return;
                                    };
                                    let mut m = machine.write();
                                    m.transport_mut().set_volume(volume);
                                    media.set_volume(m.transport().volume);
                                    media.set_muted(m.transport().muted);
                                },
                            }
                        }
                        span { class: "text-sm text-white tabular-nums",
                            "{time_label}"
                        }
                    }
                    ChromelessButton {
                        class: Some(CONTROL_BUTTON.to_string()),
                        aria_label: Some("Toggle fullscreen".to_string()),
                        onclick: move |_| dispatch.call(ShortcutAction::ToggleFullscreen),
                        if state.is_fullscreen() {
                            MinimizeIcon { class: "w-5 h-5" }
                        } else {
                            MaximizeIcon { class: "w-5 h-5" }
                        }
                    }
                }
            }
        }
    }
}
