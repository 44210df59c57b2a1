use dioxus::prelude::*;

use crate::api;
use crate::router::{DishId, Route};
use crate::session;

#[component]
fn ReviewEntry(review: api::Review) -> Element {
    let posted = review
        .created_at
        .map(|at| at.format(" on %Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        li {
            p { class: "review-meta",
                strong { "{review.user.username}" }
                " rated {review.rating}/5{posted}"
            }
            if let Some(text) = review.comment.as_deref() {
                p { "{text}" }
            }
        }
    }
}

/// Reviews for a single dish. The dish id arrives from the path as an
/// opaque string; the backend decides whether it refers to anything.
#[component]
pub fn Review(dish_id: DishId) -> Element {
    let session = session::use_session();

    let dish = use_resource({
        let dish_id = dish_id.clone();
        move || {
            let dish_id = dish_id.clone();
            async move { api::fetch_dish(&dish_id.0).await }
        }
    });
    let mut reviews = use_resource({
        let dish_id = dish_id.clone();
        move || {
            let dish_id = dish_id.clone();
            async move { api::fetch_reviews(&dish_id.0).await }
        }
    });

    let mut rating = use_signal(|| 5u8);
    let mut comment = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = {
        let dish_id = dish_id.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let dish_id = dish_id.clone();
            async move {
                let Some(current) = session() else {
                    return;
                };
                match api::submit_review(&current.token, &dish_id.0, rating(), &comment()).await {
                    Ok(_) => {
                        comment.set(String::new());
                        error.set(None);
                        reviews.restart();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            }
        }
    };

    let header = match &*dish.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading dish…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load this dish: {err}" }
        },
        Some(Ok(detail)) => rsx! {
            header { class: "dish-header",
                h1 { "{detail.name}" }
                if let Some(description) = detail.description.as_deref() {
                    p { class: "description", "{description}" }
                }
                p {
                    span { class: "price", "¥{detail.price:.2}" }
                    " · rated {detail.average_rating:.1} by {detail.review_count} reviews"
                }
            }
        },
    };

    let list = match &*reviews.read_unchecked() {
        None => rsx! {
            p { class: "status", "Loading reviews…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Could not load reviews: {err}" }
        },
        Some(Ok(reviews)) if reviews.is_empty() => rsx! {
            p { class: "status", "No reviews yet. Be the first!" }
        },
        Some(Ok(reviews)) => rsx! {
            ul { class: "review-list",
                for review in reviews.clone() {
                    ReviewEntry { key: "{review.id}", review }
                }
            }
        },
    };

    rsx! {
        section { class: "reviews-page",
            {header}
            {list}
            if session().is_some() {
                form { class: "review-form", onsubmit: submit,
                    h2 { "Leave a review" }
                    if let Some(message) = error() {
                        p { class: "error", "{message}" }
                    }
                    label {
                        "Rating"
                        select {
                            value: "{rating}",
                            onchange: move |event| {
                                if let Ok(value) = event.value().parse::<u8>() {
                                    rating.set(value);
                                }
                            },
                            for value in 1..=5u8 {
                                option { value: "{value}", "{value} ★" }
                            }
                        }
                    }
                    label {
                        "Comment"
                        textarea {
                            value: "{comment}",
                            oninput: move |event| comment.set(event.value()),
                        }
                    }
                    button { r#type: "submit", "Submit review" }
                }
            } else {
                p {
                    Link { to: Route::Login {}, "Log in" }
                    " to leave a review."
                }
            }
        }
    }
}
