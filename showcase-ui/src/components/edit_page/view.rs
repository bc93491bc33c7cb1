use super::{
    CustomPageConfig, EditContentTypeSelector, ExternalUrlConfig, PageMetadata, PageSelector,
    SaveActions, TipList,
};
use crate::components::icons::{ChevronRightIcon, PencilIcon};
use crate::components::ConfirmDialogView;
use crate::stores::edit_page::{EditPageState, EditPageStateStoreExt};
use dioxus::prelude::*;
use showcase_common::catalog::editable_page;
use showcase_common::edit::{EditChange, EditContentType};

const HELP: &[&str] = &[
    "External URLs work best with Figma prototypes",
    "Custom pages offer unlimited design flexibility",
    "Always preview changes before publishing",
    "Use keyboard shortcuts to save time",
];

#[component]
pub fn EditPageView(
    state: ReadStore<EditPageState>,
    public_base_url: String,
    on_select_page: EventHandler<String>,
    on_change: EventHandler<EditChange>,
    on_preview_url: EventHandler<()>,
    on_save: EventHandler<()>,
    on_save_and_preview: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_dismiss_success: EventHandler<()>,
    on_confirm_leave: EventHandler<()>,
    on_cancel_leave: EventHandler<()>,
) -> Element {
    let leave_open = use_memo(move || state.pending_leave().read().is_some());
    let is_leave_open: ReadSignal<bool> = leave_open.into();

    let draft = state.draft().read().clone();
    let saving = *state.saving().read();
    let page = draft.page_id().and_then(editable_page);

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            div { class: "mb-8",
                div { class: "flex items-center gap-3 mb-4",
                    div { class: "w-12 h-12 bg-blue-500/10 rounded-lg flex items-center justify-center",
                        PencilIcon { class: "w-6 h-6 text-blue-400" }
                    }
                    div {
                        h1 { class: "text-3xl font-bold text-white", "Edit Page Content" }
                        p { class: "text-gray-400",
                            "Modify existing pages and configure content types for your portfolio"
                        }
                    }
                }
                nav { class: "flex items-center gap-2 text-sm text-gray-500", aria_label: "Breadcrumb",
                    span { "Admin" }
                    ChevronRightIcon { class: "w-4 h-4" }
                    span { "Content Management" }
                    ChevronRightIcon { class: "w-4 h-4" }
                    span { class: "text-white", "Edit Page Content" }
                }
            }
            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-8",
                div { class: "xl:col-span-2 space-y-8",
                    PageSelector {
                        selected: draft.page_id().map(str::to_string),
                        on_select: on_select_page,
                    }
                    if page.is_some() {
                        EditContentTypeSelector {
                            selected: draft.content_type,
                            disabled: saving,
                            on_change,
                        }
                        if draft.content_type == EditContentType::External {
                            ExternalUrlConfig {
                                url: draft.external_url.clone(),
                                url_error: state.url_error().read().clone(),
                                previewing: *state.previewing().read(),
                                preview_error: state.preview_error().read().clone(),
                                on_change,
                                on_preview: on_preview_url,
                            }
                        } else {
                            CustomPageConfig {
                                template: draft.template,
                                component_name: draft.component_name.clone(),
                                custom_props: draft.custom_props.clone(),
                                on_change,
                            }
                        }
                    }
                }
                div { class: "space-y-8",
                    if let Some(page) = page {
                        PageMetadata {
                            title: draft.title.clone(),
                            description: draft.description.clone(),
                            last_modified: Some(page.last_modified.to_string()),
                            modified_by: Some(page.modified_by.to_string()),
                            public_base_url,
                            on_change,
                        }
                        SaveActions {
                            saving,
                            has_unsaved_changes: draft.is_dirty(),
                            save_error: state.save_error().read().clone(),
                            success: state.success().read().clone(),
                            on_save,
                            on_save_and_preview,
                            on_cancel,
                            on_dismiss_success,
                        }
                    }
                    TipList { heading: "Need Help?", tips: HELP }
                }
            }
        }
        ConfirmDialogView {
            is_open: is_leave_open,
            title: "Unsaved Changes".to_string(),
            message: "You have unsaved changes. Are you sure you want to leave this page?".to_string(),
            confirm_label: "Discard Changes".to_string(),
            cancel_label: "Keep Editing".to_string(),
            on_confirm: move |_| on_confirm_leave.call(()),
            on_cancel: move |_| on_cancel_leave.call(()),
        }
    }
}
