//! Page shell shared by the public and admin areas
//!
//! Headers are fixed, so the content area is offset by their height unless
//! the page renders edge to edge (the gallery hero does).

use dioxus::prelude::*;

#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    #[props(default)] header: Option<Element>,
    /// Content starts under the fixed header instead of behind it
    #[props(default = true)]
    offset_header: bool,
    /// Extra top-level elements such as flash banners
    #[props(default)]
    extra: Option<Element>,
    #[props(default = "min-h-screen bg-black text-white")] class: &'static str,
) -> Element {
    let main_class = if offset_header && header.is_some() {
        "pt-16"
    } else {
        ""
    };

    rsx! {
        div { class,
            if let Some(header) = header {
                {header}
            }
            main { class: main_class, {children} }
            if let Some(extra) = extra {
                {extra}
            }
        }
    }
}
