//! Integration tests for Souk Express.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations + seed
//! cargo run -p souk-cli -- migrate all
//! cargo run -p souk-cli -- seed
//!
//! # Start both servers, then:
//! cargo test -p souk-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they need live servers; base
//! URLs and admin credentials come from the environment.

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// A client with a cookie store, so the session (and therefore the cart or
/// the admin login) survives across requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed; tests have no way to recover.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
