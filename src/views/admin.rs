use dioxus::prelude::*;

use crate::api::{self, DishPayload, OrderStatus};
use crate::router::Route;
use crate::session;

/// Management console. The route entry is public like every other one in
/// the table; the gate below is presentation only, the backend enforces the
/// actual permission on every call.
#[component]
pub fn AdminDashboard() -> Element {
    let session = session::use_session();

    match session() {
        Some(current) if current.is_admin() => rsx! {
            Dashboard { token: current.token }
        },
        Some(_) => rsx! {
            section { class: "empty-state",
                p { "This area needs an administrator account." }
            }
        },
        None => rsx! {
            section { class: "empty-state",
                p { "Log in with an administrator account." }
                Link { to: Route::Login {}, "Log in" }
            }
        },
    }
}

#[component]
fn Dashboard(token: String) -> Element {
    let token = use_signal(|| token);

    let mut dishes = use_resource(move || async move { api::admin_fetch_dishes(&token()).await });
    let categories =
        use_resource(move || async move { api::admin_fetch_categories(&token()).await });
    let mut orders = use_resource(move || async move { api::admin_fetch_orders(&token()).await });

    // Dish form. `editing` decides between create and update.
    let mut editing = use_signal(|| None::<u32>);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut category_id = use_signal(|| None::<u32>);
    let mut form_error = use_signal(|| None::<String>);

    let mut clear_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        price.set(String::new());
        image_url.set(String::new());
        category_id.set(None);
        form_error.set(None);
    };

    let submit = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let parsed_price = match price().parse::<f64>() {
                Ok(value) if value >= 0.0 => value,
                _ => {
                    form_error.set(Some("Price must be a non-negative number".to_string()));
                    return;
                }
            };
            let payload = DishPayload {
                name: name(),
                description: description(),
                price: parsed_price,
                image_url: image_url(),
                category_id: category_id(),
            };
            let result = match editing() {
                Some(dish_id) => api::admin_update_dish(&token(), dish_id, &payload).await,
                None => api::admin_create_dish(&token(), &payload).await,
            };
            match result {
                Ok(_) => {
                    clear_form();
                    dishes.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        }
    };

    let edit = move |dish: api::AdminDish| {
        editing.set(Some(dish.id));
        name.set(dish.name);
        description.set(dish.description.unwrap_or_default());
        price.set(dish.price.to_string());
        image_url.set(dish.image_url.unwrap_or_default());
    };

    let dish_list = match &*dishes.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading dishes…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load dishes: {err}" }
        },
        Some(Ok(list)) => rsx! {
            table { class: "admin-table",
                thead {
                    tr {
                        th { "Dish" }
                        th { "Price" }
                        th {}
                    }
                }
                tbody {
                    for dish in list.clone() {
                        DishRow {
                            key: "{dish.id}",
                            dish,
                            token,
                            on_edit: edit,
                            on_change: move |_| dishes.restart(),
                        }
                    }
                }
            }
        },
    };

    let order_list = match &*orders.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading orders…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load orders: {err}" }
        },
        Some(Ok(list)) => rsx! {
            for order in list.clone() {
                AdminOrderCard {
                    key: "{order.id}",
                    order,
                    token,
                    on_change: move |_| orders.restart(),
                }
            }
        },
    };

    rsx! {
        section { class: "admin",
            h1 { "Admin dashboard" }

            section { class: "admin-dishes",
                h2 { "Menu" }
                form { class: "dish-form", onsubmit: submit,
                    if let Some(message) = form_error() {
                        p { class: "error", "{message}" }
                    }
                    label {
                        "Name"
                        input {
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    label {
                        "Description"
                        textarea {
                            value: "{description}",
                            oninput: move |event| description.set(event.value()),
                        }
                    }
                    label {
                        "Price"
                        input {
                            value: "{price}",
                            oninput: move |event| price.set(event.value()),
                        }
                    }
                    label {
                        "Image URL"
                        input {
                            value: "{image_url}",
                            oninput: move |event| image_url.set(event.value()),
                        }
                    }
                    label {
                        "Category"
                        select {
                            onchange: move |event| category_id.set(event.value().parse().ok()),
                            option { value: "", "No category" }
                            if let Some(Ok(list)) = &*categories.read_unchecked() {
                                for category in list.clone() {
                                    option {
                                        value: "{category.id}",
                                        selected: category_id() == Some(category.id),
                                        "{category.name}"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "dish-form-actions",
                        if editing().is_some() {
                            button { r#type: "submit", "Update dish" }
                            button {
                                r#type: "button",
                                class: "link-button",
                                onclick: move |_| clear_form(),
                                "Cancel"
                            }
                        } else {
                            button { r#type: "submit", "Add dish" }
                        }
                    }
                }
                {dish_list}
            }

            section { class: "admin-orders",
                h2 { "Orders" }
                {order_list}
            }
        }
    }
}

#[component]
fn DishRow(
    dish: api::AdminDish,
    token: Signal<String>,
    on_edit: EventHandler<api::AdminDish>,
    on_change: EventHandler<()>,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    let dish_id = dish.id;
    let for_edit = dish.clone();
    let delete = move |_| async move {
        match api::admin_delete_dish(&token(), dish_id).await {
            Ok(_) => on_change.call(()),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        tr {
            td {
                "{dish.name}"
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
            }
            td { "¥{dish.price:.2}" }
            td {
                button {
                    class: "link-button",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                button { class: "link-button", onclick: delete, "Delete" }
            }
        }
    }
}

#[component]
fn AdminOrderCard(
    order: api::AdminOrder,
    token: Signal<String>,
    on_change: EventHandler<()>,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    let order_id = order.id;
    let set_status = move |event: FormEvent| async move {
        let Some(status) = OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == event.value())
        else {
            return;
        };
        match api::admin_set_order_status(&token(), order_id, status).await {
            Ok(_) => on_change.call(()),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let placed = order
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    rsx! {
        article { class: "order-card",
            header {
                h3 { "Order #{order.id} · {order.user.username}" }
                span { class: "order-date", "{placed}" }
                select { onchange: set_status,
                    for status in OrderStatus::ALL {
                        option {
                            value: "{status}",
                            selected: status == order.status,
                            "{status}"
                        }
                    }
                }
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
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
        }
    }
}
