use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::api;
use crate::router::Route;
use crate::session;

/// The signed-in user's cart. Checkout turns the whole cart into an order
/// server-side, so on success we just move on to the order history.
#[component]
pub fn Cart() -> Element {
    let session = session::use_session();
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<String>);

    let mut cart = use_resource(move || {
        let current = session();
        async move {
            match current {
                Some(session) => api::fetch_cart(&session.token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let checkout = move |_| async move {
        let Some(current) = session() else {
            return;
        };
        match api::place_order(&current.token).await {
            Ok(created) => {
                info!(order = created.order_id, "order placed");
                navigator.push(Route::Orders {});
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    match &*cart.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading your cart…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load your cart: {err}" }
        },
        Some(Ok(None)) => rsx! {
            section { class: "empty-state",
                p { "Log in to see your cart." }
                Link { to: Route::Login {}, "Log in" }
            }
        },
        Some(Ok(Some(items))) if items.is_empty() => rsx! {
            section { class: "empty-state",
                p { "Your cart is empty." }
                Link { to: Route::Home {}, "Browse the menu" }
            }
        },
        Some(Ok(Some(items))) => {
            let total: f64 = items
                .iter()
                .map(|item| item.dish.price * f64::from(item.quantity))
                .sum();
            let rows = items.clone();
            rsx! {
                section { class: "cart",
                    h1 { "Your cart" }
                    if let Some(message) = error() {
                        p { class: "error", "{message}" }
                    }
                    ul { class: "cart-list",
                        for item in rows {
                            CartRow {
                                key: "{item.id}",
                                item,
                                on_change: move |_| cart.restart(),
                            }
                        }
                    }
                    footer { class: "cart-footer",
                        span { class: "price", "Total: ¥{total:.2}" }
                        button { onclick: checkout, "Place order" }
                    }
                }
            }
        }
    }
}

#[component]
fn CartRow(item: api::CartItem, on_change: EventHandler<()>) -> Element {
    let session = session::use_session();
    let mut error = use_signal(|| None::<String>);

    let item_id = item.id;
    let quantity = item.quantity;
    let line_total = item.dish.price * f64::from(quantity);

    let increase = move |_| async move {
        let Some(current) = session() else {
            return;
        };
        match api::update_cart_item(&current.token, item_id, quantity + 1).await {
            Ok(_) => on_change.call(()),
            Err(err) => error.set(Some(err.to_string())),
        }
    };
    // Going below one item means removing it.
    let decrease = move |_| async move {
        let Some(current) = session() else {
            return;
        };
        let result = if quantity <= 1 {
            api::remove_cart_item(&current.token, item_id).await
        } else {
            api::update_cart_item(&current.token, item_id, quantity - 1).await
        };
        match result {
            Ok(_) => on_change.call(()),
            Err(err) => error.set(Some(err.to_string())),
        }
    };
    let remove = move |_| async move {
        let Some(current) = session() else {
            return;
        };
        match api::remove_cart_item(&current.token, item_id).await {
            Ok(_) => on_change.call(()),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        li { class: "cart-row",
            div { class: "cart-row-dish",
                span { "{item.dish.name}" }
                if let Some(specs) = item.specifications.as_deref() {
                    if !specs.is_empty() {
                        span { class: "tag", "{specs}" }
                    }
                }
            }
            div { class: "cart-row-quantity",
                button { onclick: decrease, "−" }
                span { "{quantity}" }
                button { onclick: increase, "+" }
            }
            span { class: "price", "¥{line_total:.2}" }
            button { class: "link-button", onclick: remove, "Remove" }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
        }
    }
}
