pub mod context;
pub mod pages;
pub mod storage;

use context::{AppServices, Flash, SessionUser};
use dioxus::prelude::*;
use pages::{
    AdminDashboard, AdminGuard, AdminLogin, CreateNewPage, EditPageContent,
    FigmaPrototypeDisplay, FullScreenVideoPlayer, Home, HomeVideoGallery, NotFound, Preview,
    PublicLayout,
};

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/home-video-gallery")]
        HomeVideoGallery {},
        #[route("/figma-prototype-display")]
        FigmaPrototypeDisplay {},
    #[end_layout]
    #[layout(AdminGuard)]
        #[route("/admin-dashboard")]
        AdminDashboard {},
        #[route("/create-new-page")]
        CreateNewPage {},
        #[route("/edit-page-content")]
        EditPageContent {},
    #[end_layout]
    #[route("/admin-login?:redirect")]
    AdminLogin { redirect: String },
    #[route("/full-screen-video-player?:id&:src&:title&:description")]
    FullScreenVideoPlayer { id: String, src: String, title: String, description: String },
    #[route("/preview/:slug")]
    Preview { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(AppServices::from_browser);
    let session = use_signal(|| services.auth.current_user());
    use_context_provider(|| SessionUser(session));
    let flash = use_signal(|| None);
    use_context_provider(|| Flash::new(flash));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Title { "{services.config.site_name}" }
        div { class: "min-h-screen bg-black", Router::<Route> {} }
    }
}
