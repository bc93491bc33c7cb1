//! Create-page form: setup, content, navigation, advanced options and save

use super::{
    AdvancedOptionsSection, ContentTypeSection, NavigationSection, PageSetupSection,
    SavePublishSection, TemplateSection,
};
use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon};
use crate::stores::create_page::{CreatePageState, CreatePageStateStoreExt};
use dioxus::prelude::*;
use showcase_common::page::PageEdit;
use showcase_common::validation::Field;

#[component]
fn ProgressStep(index: u32, label: String, done: bool) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            if done {
                CheckCircleIcon { class: "w-5 h-5 text-green-400" }
            } else {
                span { class: "w-5 h-5 rounded-full border border-gray-600 text-xs text-gray-400 flex items-center justify-center",
                    "{index}"
                }
            }
            span { class: if done { "text-sm text-white" } else { "text-sm text-gray-400" }, "{label}" }
        }
    }
}

#[component]
pub fn CreatePageView(
    state: ReadStore<CreatePageState>,
    on_edit: EventHandler<PageEdit>,
    on_save_draft: EventHandler<()>,
    on_publish: EventHandler<()>,
    on_preview: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let page = state.page().read().clone();
    let errors = state.errors().read().clone();
    let pending = *state.pending().read();
    let general_error = state.general_error().read().clone();
    let can_publish = page.can_publish();

    rsx! {
        div { class: "max-w-4xl mx-auto px-4 sm:px-6 py-8 space-y-8",
            div {
                h1 { class: "text-3xl font-bold text-white mb-2", "Create New Page" }
                p { class: "text-gray-400",
                    "Add a new page to your portfolio with customizable content and navigation"
                }
            }
            div { class: "flex items-center gap-6",
                ProgressStep { index: 1, label: "Setup", done: page.setup_complete() }
                div { class: "flex-1 h-px bg-gray-700" }
                ProgressStep { index: 2, label: "Content", done: page.content_type.is_some() }
                div { class: "flex-1 h-px bg-gray-700" }
                ProgressStep { index: 3, label: "Publish", done: can_publish }
            }
            if let Some(message) = general_error {
                div { class: "p-4 bg-red-900/20 border border-red-700/50 rounded-lg flex items-center gap-2",
                    role: "alert",
                    AlertTriangleIcon { class: "w-5 h-5 text-red-400" }
                    p { class: "text-sm text-red-200", "{message}" }
                }
            }
            PageSetupSection { page: page.clone(), errors: errors.clone(), on_edit }
            ContentTypeSection {
                selected: page.content_type,
                error: errors.get(Field::ContentType).map(str::to_string),
                on_edit,
            }
            TemplateSection {
                content_type: page.content_type,
                template: page.template.clone(),
                errors: errors.clone(),
                on_edit,
            }
            NavigationSection {
                navigation: page.navigation.clone(),
                title: page.title.clone(),
                on_edit,
            }
            AdvancedOptionsSection {
                publish: page.publish.clone(),
                advanced: page.advanced.clone(),
                errors: errors.clone(),
                on_edit,
            }
            SavePublishSection {
                errors,
                can_publish,
                pending,
                on_save_draft,
                on_publish,
                on_preview,
                on_cancel,
            }
        }
    }
}
