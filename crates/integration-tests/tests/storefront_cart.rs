//! Integration tests for the storefront cart flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storefront server running (cargo run -p souk-storefront)
//!
//! Run with: cargo test -p souk-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use souk_integration_tests::{session_client, storefront_base_url};

fn add_body(id: &str, name: &str, price: i64, quantity: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price.to_string(),
        "quantity": quantity,
    })
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_add_same_product_twice_aggregates() {
    let client = session_client();
    let base_url = storefront_base_url();

    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/cart/add"))
            .json(&add_body("b1", "Big Burger", 90, 1))
            .send()
            .await
            .expect("add to cart");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("get cart")
        .json()
        .await
        .expect("cart json");

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1, "one aggregated line, not two");
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(cart["item_count"], 2);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_update_quantity_to_zero_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();

    client
        .post(format!("{base_url}/cart/add"))
        .json(&add_body("f1", "Fries", 35, 1))
        .send()
        .await
        .expect("add to cart");

    let cart: Value = client
        .post(format!("{base_url}/cart/update"))
        .json(&json!({"id": "f1", "quantity": 0}))
        .send()
        .await
        .expect("update cart")
        .json()
        .await
        .expect("cart json");

    assert_eq!(cart["items"].as_array().expect("items array").len(), 0);
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_remove_unknown_id_is_silent_noop() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/remove"))
        .json(&json!({"id": "never-added"}))
        .send()
        .await
        .expect("remove from cart");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_count_badge_counts_units_not_lines() {
    let client = session_client();
    let base_url = storefront_base_url();

    client
        .post(format!("{base_url}/cart/add"))
        .json(&add_body("b1", "Big Burger", 90, 3))
        .send()
        .await
        .expect("add to cart");

    let count: Value = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("get count")
        .json()
        .await
        .expect("count json");

    assert_eq!(count["count"], 3);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_checkout_requires_customer_details() {
    let client = session_client();
    let base_url = storefront_base_url();

    client
        .post(format!("{base_url}/cart/add"))
        .json(&add_body("b1", "Big Burger", 90, 1))
        .send()
        .await
        .expect("add to cart");

    let resp = client
        .post(format!("{base_url}/cart/checkout"))
        .json(&json!({"name": "", "phone": "", "address": ""}))
        .send()
        .await
        .expect("checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_checkout_returns_handoff_link_and_clears_cart() {
    let client = session_client();
    let base_url = storefront_base_url();

    client
        .post(format!("{base_url}/cart/add"))
        .json(&add_body("b1", "Big Burger", 90, 2))
        .send()
        .await
        .expect("add to cart");

    let checkout: Value = client
        .post(format!("{base_url}/cart/checkout"))
        .json(&json!({
            "name": "Test Customer",
            "phone": "01000000000",
            "address": "Test Street 1",
        }))
        .send()
        .await
        .expect("checkout")
        .json()
        .await
        .expect("checkout json");

    let url = checkout["whatsapp_url"].as_str().expect("whatsapp url");
    assert!(url.starts_with("https://wa.me/"));

    let count: Value = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("get count")
        .json()
        .await
        .expect("count json");
    assert_eq!(count["count"], 0, "cart cleared after hand-off");
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_two_sessions_hold_independent_carts() {
    let base_url = storefront_base_url();
    let first = session_client();
    let second = session_client();

    first
        .post(format!("{base_url}/cart/add"))
        .json(&add_body("b1", "Big Burger", 90, 1))
        .send()
        .await
        .expect("add to cart");

    let count: Value = second
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("get count")
        .json()
        .await
        .expect("count json");

    assert_eq!(count["count"], 0, "second session sees an empty cart");
}
