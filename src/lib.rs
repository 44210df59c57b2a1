pub mod api;
pub mod errors;
pub mod router;
pub mod session;
pub mod views;

use dioxus::prelude::*;

use crate::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root. Provides the session to every descendant view and hands
/// the route table to the router, which owns the browser history integration
/// from here on.
pub fn App() -> Element {
    use_context_provider(|| Signal::new(session::load()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
