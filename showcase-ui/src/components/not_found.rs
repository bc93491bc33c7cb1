use crate::components::icons::ArrowLeftIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div { class: "min-h-screen bg-black flex items-center justify-center px-6",
            div { class: "text-center",
                p { class: "text-7xl font-bold text-blue-500", "404" }
                h1 { class: "mt-4 text-2xl font-semibold text-white", "Page Not Found" }
                p { class: "mt-2 text-gray-400",
                    "Nothing lives at "
                    code { class: "text-gray-300", "{path}" }
                    ". It may have been moved or deleted."
                }
                div { class: "mt-8 flex justify-center",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_home.call(()),
                        ArrowLeftIcon { class: "w-4 h-4" }
                        "Back to Gallery"
                    }
                }
            }
        }
    }
}
