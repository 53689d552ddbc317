//! Cart route handlers.
//!
//! The cart lives in the shopper's session as a serialized
//! [`souk_core::cart::Cart`]. Every mutation rehydrates it into a
//! [`CartStore`], subscribes an activity observer (so cart changes show up
//! in the logs the way badge updates show up in the UI), applies exactly one
//! operation, and writes the snapshot back to the session.

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use souk_core::Price;
use souk_core::cart::{Cart, CartLine, CartObserver, CartStore};

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::services::whatsapp::{self, CustomerInfo};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: Decimal,
    pub subtotal_display: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    price: line.price,
                    quantity: line.quantity,
                    line_total: line.price * Decimal::from(line.quantity),
                    image: line.image.clone(),
                    restaurant_name: line.restaurant_name.clone(),
                })
                .collect(),
            subtotal: cart.total_price(),
            subtotal_display: Price::egp(cart.total_price()).to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Count badge data. The client hides the badge when `count` is zero.
#[derive(Debug, Clone, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

// =============================================================================
// Requests
// =============================================================================

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub id: String,
    pub quantity: u32,
}

/// Remove line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub id: String,
}

/// Checkout response: the hand-off link the client opens.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub whatsapp_url: String,
}

// =============================================================================
// Session plumbing
// =============================================================================

/// Logs every cart mutation, the server-side analogue of the badge redraw.
struct CartActivityObserver;

impl CartObserver for CartActivityObserver {
    fn cart_changed(&self, cart: &Cart) {
        tracing::debug!(
            item_count = cart.item_count(),
            total = %cart.total_price(),
            "cart updated"
        );
    }
}

/// Load the session cart, or an empty one on first access.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Persist the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Run one store operation against the session cart and persist the result.
async fn with_cart_store(
    session: &Session,
    op: impl FnOnce(&CartStore),
) -> Result<Cart> {
    let store = CartStore::with_cart(load_cart(session).await?);
    let observer: Arc<dyn CartObserver> = Arc::new(CartActivityObserver);
    store.subscribe(&observer);

    op(&store);

    let snapshot = store.snapshot();
    save_cart(session, &snapshot).await?;
    Ok(snapshot)
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart contents.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add an item to the cart.
///
/// Adding a product already in the cart increments its quantity rather than
/// creating a second line.
#[instrument(skip(session, request), fields(product_id = %request.id))]
pub async fn add(
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartCountView>> {
    let line = CartLine {
        id: request.id,
        name: request.name,
        price: request.price,
        quantity: request.quantity.unwrap_or(1),
        image: request.image,
        restaurant_id: request.restaurant_id,
        restaurant_name: request.restaurant_name,
    };

    let cart = with_cart_store(&session, |store| store.add_item(line)).await?;
    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}

/// Update a line's quantity; zero removes the line.
#[instrument(skip(session, request), fields(product_id = %request.id))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let cart = with_cart_store(&session, |store| {
        store.update_quantity(&request.id, request.quantity);
    })
    .await?;
    Ok(Json(CartView::from(&cart)))
}

/// Remove a line from the cart. A no-op for unknown ids.
#[instrument(skip(session, request), fields(product_id = %request.id))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let cart = with_cart_store(&session, |store| store.remove_item(&request.id)).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    let cart = with_cart_store(&session, CartStore::clear).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Cart count badge value.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}

/// Checkout: format the order summary, clear the cart, return the hand-off
/// link.
#[instrument(skip(state, session, customer))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(customer): Json<CustomerInfo>,
) -> Result<impl IntoResponse> {
    if !customer.is_complete() {
        return Err(AppError::BadRequest(
            "name, phone, and address are required".to_string(),
        ));
    }

    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let message = whatsapp::order_message(&cart, &customer);
    let url = whatsapp::wa_link(&state.config().whatsapp_number, &message);

    // The order left the system; the cart's job is done.
    with_cart_store(&session, CartStore::clear).await?;

    tracing::info!(items = cart.len(), total = %cart.total_price(), "order handed off");

    Ok(Json(CheckoutView { whatsapp_url: url }))
}
