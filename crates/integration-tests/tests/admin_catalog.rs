//! Integration tests for admin catalog management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p souk-admin)
//! - An admin account created via
//!   `souk-cli admin create -e admin@souk.test -n Admin -p <password>`
//!   with `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD` exported to match
//!
//! Run with: cargo test -p souk-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use souk_integration_tests::{admin_base_url, session_client};

fn test_credentials() -> (String, String) {
    (
        std::env::var("ADMIN_TEST_EMAIL").unwrap_or_else(|_| "admin@souk.test".to_string()),
        std::env::var("ADMIN_TEST_PASSWORD").unwrap_or_else(|_| "integration-test".to_string()),
    )
}

/// Log in and return the authenticated client.
async fn authenticated_client() -> Client {
    let client = session_client();
    let base_url = admin_base_url();
    let (email, password) = test_credentials();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::OK, "login failed");

    client
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_unauthenticated_requests_are_rejected() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/categories"))
        .send()
        .await
        .expect("list categories");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_login_logout_roundtrip() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    let me: Value = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("me")
        .json()
        .await
        .expect("me json");
    assert!(me["email"].is_string());

    client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("logout");

    let resp = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("me after logout");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_category_crud_roundtrip() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    // Create
    let created: Value = client
        .post(format!("{base_url}/categories"))
        .json(&json!({
            "name": "فنادق",
            "icon": "/uploads/icons/hotels.png",
            "link": "/hotels",
            "color": "teal",
        }))
        .send()
        .await
        .expect("create category")
        .json()
        .await
        .expect("category json");
    let id = created["id"].as_str().expect("category id").to_owned();

    // Update
    let updated: Value = client
        .put(format!("{base_url}/categories/{id}"))
        .json(&json!({
            "name": "فنادق ومنتجعات",
            "icon": "/uploads/icons/hotels.png",
            "link": "/hotels",
            "color": "teal",
        }))
        .send()
        .await
        .expect("update category")
        .json()
        .await
        .expect("category json");
    assert_eq!(updated["name"], "فنادق ومنتجعات");

    // Delete
    let resp = client
        .delete(format!("{base_url}/categories/{id}"))
        .send()
        .await
        .expect("delete category");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Deleting again reports not found
    let resp = client
        .delete(format!("{base_url}/categories/{id}"))
        .send()
        .await
        .expect("delete category again");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_create_rejects_missing_required_fields() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/categories"))
        .json(&json!({"name": "", "icon": "", "link": "", "color": ""}))
        .send()
        .await
        .expect("create category");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_dashboard_counts_present() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    let counts: Value = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("dashboard")
        .json()
        .await
        .expect("dashboard json");

    for key in [
        "categories",
        "restaurants",
        "products",
        "doctors",
        "craftsmen",
        "promos",
    ] {
        assert!(counts[key].is_number(), "missing count for {key}");
    }
}
