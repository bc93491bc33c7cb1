use tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        web_sys::console::warn_1(&format!("Logger already initialized: {e}").into());
    }
    dioxus::launch(showcase_web::App);
}
