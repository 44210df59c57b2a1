use dioxus::prelude::*;

use crate::api;
use crate::router::{DishId, Route};
use crate::session;

/// The menu. Dishes come straight from the backend with their aggregated
/// rating, so the page is a plain fetch-and-render.
#[component]
pub fn Home() -> Element {
    let dishes = use_resource(|| api::fetch_dishes());

    match &*dishes.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading the menu…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load the menu: {err}" }
        },
        Some(Ok(dishes)) => rsx! {
            section { class: "dish-grid",
                for dish in dishes.clone() {
                    DishCard { key: "{dish.id}", dish }
                }
            }
        },
    }
}

#[component]
fn DishCard(dish: api::Dish) -> Element {
    let session = session::use_session();
    let navigator = use_navigator();
    let mut feedback = use_signal(|| None::<String>);

    let dish_id = dish.id;
    let add_to_cart = move |_| async move {
        let Some(current) = session() else {
            navigator.push(Route::Login {});
            return;
        };
        match api::add_to_cart(&current.token, dish_id, 1).await {
            Ok(_) => feedback.set(Some("Added to cart".to_string())),
            Err(err) => feedback.set(Some(err.to_string())),
        }
    };

    rsx! {
        article { class: "dish-card",
            if let Some(image) = dish.image_url.as_deref() {
                img { src: "{image}", alt: "{dish.name}" }
            }
            div { class: "dish-card-body",
                h2 { "{dish.name}" }
                if let Some(category) = dish.category.as_ref() {
                    span { class: "tag", "{category.name}" }
                }
                if let Some(description) = dish.description.as_deref() {
                    p { class: "description", "{description}" }
                }
                p { class: "rating",
                    "{stars(dish.rating)} "
                    Link {
                        to: Route::Review { dish_id: DishId(dish.id.to_string()) },
                        "{dish.review_count} reviews"
                    }
                }
                div { class: "dish-card-footer",
                    span { class: "price", "¥{dish.price:.2}" }
                    button { onclick: add_to_cart, "Add to cart" }
                }
                if let Some(message) = feedback() {
                    p { class: "feedback", "{message}" }
                }
            }
        }
    }
}

fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let mut out = String::with_capacity(5 * '★'.len_utf8());
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn ratings_round_to_star_strings() {
        assert_eq!(stars(4.5), "★★★★★");
        assert_eq!(stars(3.2), "★★★☆☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }
}
