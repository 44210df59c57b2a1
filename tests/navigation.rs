//! Navigation semantics against the in-memory history provider: the same
//! push/back/forward contract the browser-backed provider follows at runtime.

use dioxus_history::{History, MemoryHistory};
use food_delivery_site::router::Route;

#[test]
fn back_returns_to_the_previous_route() {
    let history = MemoryHistory::with_initial_path(Route::Home {});
    assert!(!history.can_go_back());

    history.push(Route::Cart {}.to_string());
    assert_eq!(history.current_route(), "/cart");
    assert!(history.can_go_back());

    history.go_back();
    assert_eq!(history.current_route(), "/");
    assert!(history.can_go_forward());

    history.go_forward();
    assert_eq!(history.current_route(), "/cart");
}

#[test]
fn sequential_pushes_apply_in_call_order() {
    let history = MemoryHistory::with_initial_path(Route::Home {});

    history.push(Route::Cart {}.to_string());
    history.push(Route::Orders {}.to_string());

    assert_eq!(history.current_route(), "/orders");
    history.go_back();
    assert_eq!(history.current_route(), "/cart");
    history.go_back();
    assert_eq!(history.current_route(), "/");
}

#[test]
fn a_new_navigation_clears_the_forward_stack() {
    let history = MemoryHistory::with_initial_path(Route::Home {});

    history.push(Route::Cart {}.to_string());
    history.go_back();
    assert!(history.can_go_forward());

    history.push(Route::Login {}.to_string());
    assert!(!history.can_go_forward());
    assert_eq!(history.current_route(), "/login");
}

#[test]
fn pushing_the_current_route_does_not_stack_a_duplicate() {
    let history = MemoryHistory::with_initial_path(Route::Home {});

    history.push(Route::Home {}.to_string());
    assert!(!history.can_go_back());
}
