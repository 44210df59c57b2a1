use dioxus::prelude::*;

use crate::router::Route;

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { "There is no page at {attempted}." }
            Link { to: Route::Home {}, "Back to the menu" }
        }
    }
}
