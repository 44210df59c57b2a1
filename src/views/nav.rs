use dioxus::prelude::*;

use crate::router::Route;
use crate::session;

/// Layout route: the chrome shared by every page, with the resolved page
/// mounted in the outlet below it.
#[component]
pub fn NavBar() -> Element {
    let session = session::use_session();

    rsx! {
        header { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Golden Wok" }
            nav {
                Link { to: Route::Cart {}, "Cart" }
                Link { to: Route::Orders {}, "Orders" }
                if let Some(current) = session() {
                    if current.is_admin() {
                        Link { to: Route::AdminDashboard {}, "Admin" }
                    }
                    span { class: "navbar-user", "{current.user.username}" }
                    button {
                        class: "link-button",
                        onclick: move |_| session::log_out(session),
                        "Log out"
                    }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
