//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /                       - Home payload (tiles, promos, featured)
//!
//! # Restaurants
//! GET  /restaurants            - Listing (?q=&category=)
//! GET  /restaurants/{id}       - Detail + menu sections
//!
//! # Directories
//! GET  /doctors                - Listing (?q=&specialty=)
//! GET  /handymen               - Listing (?q=&profession=)
//! POST /handymen/{id}/contact  - Contact hand-off link
//!
//! # Pharmacies & supermarkets
//! GET  /pharmacies             - Bundled directory
//! POST /pharmacies/prescription - Prescription hand-off link
//! POST /supermarkets/order     - Grocery-list hand-off
//!
//! # Jobs & merchants
//! GET  /jobs                   - Bundled job board
//! POST /store-requests         - "Add your store" hand-off
//!
//! # Cart (session-scoped)
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Add item (aggregates by product id)
//! POST /cart/update            - Update quantity (0 removes)
//! POST /cart/remove            - Remove item
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Badge count
//! POST /cart/checkout          - Order hand-off (clears the cart)
//! ```

pub mod cart;
pub mod doctors;
pub mod handymen;
pub mod home;
pub mod jobs;
pub mod pharmacies;
pub mod restaurants;
pub mod store_requests;
pub mod supermarkets;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the restaurant routes router.
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurants::index))
        .route("/{id}", get(restaurants::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home payload
        .route("/", get(home::home))
        // Restaurants
        .nest("/restaurants", restaurant_routes())
        // Directories
        .route("/doctors", get(doctors::index))
        .route("/handymen", get(handymen::index))
        .route("/handymen/{id}/contact", post(handymen::contact))
        // Pharmacies
        .route("/pharmacies", get(pharmacies::index))
        .route("/pharmacies/prescription", post(pharmacies::prescription))
        // Supermarkets
        .route("/supermarkets/order", post(supermarkets::order))
        // Jobs
        .route("/jobs", get(jobs::index))
        // Merchant applications
        .route("/store-requests", post(store_requests::create))
        // Cart
        .nest("/cart", cart_routes())
}
