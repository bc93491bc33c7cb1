//! Loading spinner component

use dioxus::prelude::*;

/// Centered spinner with a message underneath
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
    /// Fill the viewport instead of the parent
    #[props(default)]
    full_screen: bool,
) -> Element {
    let container = if full_screen {
        "fixed inset-0 bg-black flex flex-col justify-center items-center z-50"
    } else {
        "flex flex-col justify-center items-center py-12"
    };

    rsx! {
        div { class: "{container}", role: "status",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            p { class: "mt-4 text-gray-300", "{message}" }
        }
    }
}
