use dioxus::prelude::*;

#[component]
pub fn PageContainer(
    #[props(default = "max-w-7xl")] width: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div { class: "{width} mx-auto px-4 sm:px-6 py-8", {children} }
    }
}
