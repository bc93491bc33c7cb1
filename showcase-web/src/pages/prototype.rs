use super::go_to;
use dioxus::prelude::*;
use showcase_common::catalog::showcased_prototype;
use showcase_ui::PrototypeView;

#[component]
pub fn FigmaPrototypeDisplay() -> Element {
    let info = use_hook(showcased_prototype);

    rsx! {
        PrototypeView { info, on_navigate: move |path: String| go_to(&path) }
    }
}
