//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling and
//! a `::backdrop`. `showModal()` throws if the dialog is already open, so the
//! `open` attribute is checked first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn call_dialog_method(element: &web_sys::Element, method: &str) {
    if let Ok(func) = js_sys::Reflect::get(element, &method.into()) {
        if let Some(func) = func.dyn_ref::<js_sys::Function>() {
            let _ = func.call0(element);
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{id}")
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let open = is_open();
        let Some(element) = crate::wasm_utils::document()
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        match (open, element.has_attribute("open")) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on <dialog>: they would override the native
    // display:none of a closed dialog. Layout lives on the inner container.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
