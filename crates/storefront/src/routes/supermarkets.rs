//! Supermarket route handlers.
//!
//! The supermarket vertical takes a free-text grocery list and hands it off
//! with the customer's details; there is no item catalog behind it.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::whatsapp::{self, CustomerInfo};
use crate::state::AppState;

/// Grocery order request body.
#[derive(Debug, Deserialize)]
pub struct GroceryOrderRequest {
    #[serde(flatten)]
    pub customer: CustomerInfo,
    pub grocery_list: String,
}

/// Grocery order hand-off payload.
#[derive(Debug, Serialize)]
pub struct GroceryOrderView {
    pub whatsapp_url: String,
}

/// Hand off a grocery order.
#[instrument(skip(state, request))]
pub async fn order(
    State(state): State<AppState>,
    Json(request): Json<GroceryOrderRequest>,
) -> Result<Json<GroceryOrderView>> {
    if request.grocery_list.is_empty() {
        return Err(AppError::BadRequest("grocery list is required".to_string()));
    }
    if !request.customer.is_complete() {
        return Err(AppError::BadRequest(
            "name, phone, and address are required".to_string(),
        ));
    }

    let message = whatsapp::grocery_message(&request.customer, &request.grocery_list);
    let url = whatsapp::wa_link(&state.config().whatsapp_number, &message);

    Ok(Json(GroceryOrderView { whatsapp_url: url }))
}
