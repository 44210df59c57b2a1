//! The route table resolved against concrete paths, and the views the
//! resolution mounts.

use std::rc::Rc;
use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use food_delivery_site::router::{DishId, Route};
use food_delivery_site::session::Session;

#[test]
fn static_routes_parse() {
    assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
    assert_eq!(Route::from_str("/login").unwrap(), Route::Login {});
    assert_eq!(Route::from_str("/register").unwrap(), Route::Register {});
    assert_eq!(Route::from_str("/cart").unwrap(), Route::Cart {});
    assert_eq!(Route::from_str("/orders").unwrap(), Route::Orders {});
    assert_eq!(Route::from_str("/admin").unwrap(), Route::AdminDashboard {});
}

#[test]
fn trailing_slashes_parse() {
    assert_eq!(Route::from_str("/cart/").unwrap(), Route::Cart {});
    assert_eq!(
        Route::from_str("/dishes/42/reviews/").unwrap(),
        Route::Review {
            dish_id: DishId("42".to_string())
        }
    );
}

#[test]
fn the_review_route_binds_the_dish_id_verbatim() {
    assert_eq!(
        Route::from_str("/dishes/42/reviews").unwrap(),
        Route::Review {
            dish_id: DishId("42".to_string())
        }
    );
    // Dish ids are opaque strings, not numbers.
    assert_eq!(
        Route::from_str("/dishes/abc/reviews").unwrap(),
        Route::Review {
            dish_id: DishId("abc".to_string())
        }
    );
}

#[test]
fn an_empty_dish_id_segment_is_not_a_review_route() {
    assert!(matches!(
        Route::from_str("/dishes//reviews").unwrap(),
        Route::NotFound { .. }
    ));
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        Route::from_str("/nonexistent").unwrap(),
        Route::NotFound {
            segments: vec!["nonexistent".to_string()]
        }
    );
}

#[test]
fn routes_format_back_to_their_paths() {
    assert_eq!(Route::Home {}.to_string(), "/");
    assert_eq!(Route::Login {}.to_string(), "/login");
    assert_eq!(Route::Register {}.to_string(), "/register");
    assert_eq!(Route::Cart {}.to_string(), "/cart");
    assert_eq!(Route::Orders {}.to_string(), "/orders");
    assert_eq!(Route::AdminDashboard {}.to_string(), "/admin");
    assert_eq!(
        Route::Review {
            dish_id: DishId("42".to_string())
        }
        .to_string(),
        "/dishes/42/reviews"
    );
}

fn shell() -> Element {
    use_context_provider(|| Signal::new(None::<Session>));
    rsx! {
        Router::<Route> {}
    }
}

fn render_at(path: &str) -> String {
    let mut vdom = VirtualDom::new(shell);
    vdom.insert_any_root_context(Box::new(
        Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
    ));
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

#[test]
fn resolving_the_root_mounts_the_home_view() {
    let html = render_at("/");
    assert!(html.contains("Loading the menu"));
}

#[test]
fn resolving_an_unknown_path_mounts_the_not_found_view() {
    let html = render_at("/no/such/page");
    assert!(html.contains("404"));
    assert!(html.contains("/no/such/page"));
}
