use dioxus::prelude::*;

use crate::api;
use crate::router::Route;
use crate::session;

/// Order history for the signed-in user.
#[component]
pub fn Orders() -> Element {
    let session = session::use_session();

    let orders = use_resource(move || {
        let current = session();
        async move {
            match current {
                Some(session) => api::fetch_orders(&session.token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    match &*orders.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading your orders…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load your orders: {err}" }
        },
        Some(Ok(None)) => rsx! {
            section { class: "empty-state",
                p { "Log in to see your orders." }
                Link { to: Route::Login {}, "Log in" }
            }
        },
        Some(Ok(Some(orders))) if orders.is_empty() => rsx! {
            section { class: "empty-state",
                p { "You have not ordered anything yet." }
                Link { to: Route::Home {}, "Browse the menu" }
            }
        },
        Some(Ok(Some(orders))) => rsx! {
            section { class: "orders",
                h1 { "Your orders" }
                for order in orders.clone() {
                    OrderCard { key: "{order.id}", order }
                }
            }
        },
    }
}

#[component]
fn OrderCard(order: api::Order) -> Element {
    let placed = order
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    rsx! {
        article { class: "order-card",
            header {
                h2 { "Order #{order.id}" }
                span { class: "status-badge {order.status}", "{order.status}" }
                span { class: "order-date", "{placed}" }
            }
            ul {
                for line in order.items.clone() {
                    li {
                        "{line.quantity} × {line.dish.name}"
                        span { class: "price", "¥{line.price:.2}" }
                    }
                }
            }
            footer {
                span { class: "price", "Total: ¥{order.total_amount:.2}" }
            }
        }
    }
}
