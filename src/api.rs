//! Client for the ordering backend's JSON API.
//!
//! Every function maps onto one backend endpoint. Authenticated calls take
//! the session's bearer token; the caller decides what to do when it has
//! none. Non-success responses are turned into [`ApiError::Backend`] with
//! the server's message envelope.

use chrono::NaiveDateTime;
use dioxus::logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Compile-time override for the backend location, defaulting to the local
/// development server.
const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A menu entry as returned by `GET /dishes`, with the rating already
/// aggregated server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u32,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub user: UserSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDish {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u32,
    pub dish: CartDish,
    pub quantity: u32,
    #[serde(default)]
    pub specifications: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish: OrderDish,
    pub quantity: u32,
    /// Unit price at the time the order was placed.
    pub price: f64,
    #[serde(default)]
    pub specifications: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
    pub items: Vec<OrderLine>,
}

/// An order as seen from the admin dashboard, with the customer attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: u32,
    pub user: UserSummary,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDish {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload for creating or updating a dish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCreated {
    pub message: String,
    pub order_id: u32,
}

async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response
            .json::<ApiMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());
        warn!(status = status.as_u16(), "backend request failed: {message}");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/register"))
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/login"))
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn fetch_dishes() -> Result<Vec<Dish>, ApiError> {
    let response = reqwest::get(endpoint("/dishes")).await?;
    expect_json(response).await
}

pub async fn fetch_dish(dish_id: &str) -> Result<DishDetail, ApiError> {
    let response = reqwest::get(endpoint(&format!("/dishes/{dish_id}"))).await?;
    expect_json(response).await
}

pub async fn fetch_reviews(dish_id: &str) -> Result<Vec<Review>, ApiError> {
    let response = reqwest::get(endpoint(&format!("/dishes/{dish_id}/reviews"))).await?;
    expect_json(response).await
}

pub async fn submit_review(
    token: &str,
    dish_id: &str,
    rating: u8,
    comment: &str,
) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint(&format!("/dishes/{dish_id}/reviews")))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "rating": rating,
            "comment": comment,
        }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn fetch_cart(token: &str) -> Result<Vec<CartItem>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/cart"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn add_to_cart(token: &str, dish_id: u32, quantity: u32) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/cart"))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "dish_id": dish_id,
            "quantity": quantity,
        }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn update_cart_item(
    token: &str,
    item_id: u32,
    quantity: u32,
) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/cart/{item_id}")))
        .bearer_auth(token)
        .json(&serde_json::json!({ "quantity": quantity }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn remove_cart_item(token: &str, item_id: u32) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/cart/{item_id}")))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn place_order(token: &str) -> Result<OrderCreated, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/orders"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn fetch_orders(token: &str) -> Result<Vec<Order>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/orders"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_fetch_dishes(token: &str) -> Result<Vec<AdminDish>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/admin/dishes"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_create_dish(token: &str, dish: &DishPayload) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/admin/dishes"))
        .bearer_auth(token)
        .json(dish)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_update_dish(
    token: &str,
    dish_id: u32,
    dish: &DishPayload,
) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/admin/dishes/{dish_id}")))
        .bearer_auth(token)
        .json(dish)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_delete_dish(token: &str, dish_id: u32) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/admin/dishes/{dish_id}")))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_fetch_orders(token: &str) -> Result<Vec<AdminOrder>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/admin/orders"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_set_order_status(
    token: &str,
    order_id: u32,
    status: OrderStatus,
) -> Result<ApiMessage, ApiError> {
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/admin/orders/{order_id}/status")))
        .bearer_auth(token)
        .json(&serde_json::json!({ "status": status }))
        .send()
        .await?;
    expect_json(response).await
}

pub async fn admin_fetch_categories(token: &str) -> Result<Vec<Category>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint("/admin/categories"))
        .bearer_auth(token)
        .send()
        .await?;
    expect_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_list_deserializes() {
        let body = r#"[{
            "id": 1,
            "name": "Mapo Tofu",
            "description": "Silky tofu in chili bean sauce",
            "price": 18.8,
            "image_url": "https://example.com/mapo.jpg",
            "rating": 4.5,
            "reviewCount": 2,
            "category": { "id": 1, "name": "Sichuan" }
        }]"#;
        let dishes: Vec<Dish> = serde_json::from_str(body).unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].review_count, 2);
        assert_eq!(dishes[0].category.as_ref().unwrap().name, "Sichuan");
    }

    #[test]
    fn dish_without_reviews_uses_the_default_rating() {
        let body = r#"{
            "id": 7,
            "name": "Char Siu",
            "description": null,
            "price": 38.8,
            "image_url": null,
            "rating": 5.0,
            "reviewCount": 0
        }"#;
        let dish: Dish = serde_json::from_str(body).unwrap();
        assert_eq!(dish.rating, 5.0);
        assert!(dish.category.is_none());
    }

    #[test]
    fn reviews_carry_author_and_timestamp() {
        let body = r#"[{
            "id": 3,
            "rating": 4,
            "comment": "Just the right amount of heat",
            "created_at": "2023-05-10T00:00:00",
            "user": { "id": 2, "username": "lisi" }
        }]"#;
        let reviews: Vec<Review> = serde_json::from_str(body).unwrap();
        assert_eq!(reviews[0].user.username, "lisi");
        assert!(reviews[0].created_at.is_some());
    }

    #[test]
    fn order_status_strings_map_onto_the_enum() {
        let body = r#"[{
            "id": 12,
            "total_amount": 57.6,
            "status": "confirmed",
            "created_at": "2023-06-01T12:30:00",
            "items": [{
                "dish": { "id": 1, "name": "Mapo Tofu", "price": 18.8 },
                "quantity": 2,
                "price": 18.8,
                "specifications": ""
            }]
        }]"#;
        let orders: Vec<Order> = serde_json::from_str(body).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Confirmed);
        assert_eq!(orders[0].items[0].quantity, 2);
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
    }

    #[test]
    fn login_response_deserializes() {
        let body = r#"{
            "access_token": "jwt-token",
            "user": { "id": 1, "username": "admin", "email": "admin@example.com", "is_admin": true }
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(response.user.is_admin);
        assert_eq!(response.access_token, "jwt-token");
    }
}
