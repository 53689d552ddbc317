//! "Add your store" route handler.
//!
//! Merchant applications are not stored; they go straight to the hand-off
//! channel as formatted text.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::whatsapp::{self, StoreRequest};
use crate::state::AppState;

/// Store application hand-off payload.
#[derive(Debug, Serialize)]
pub struct StoreRequestView {
    pub whatsapp_url: String,
}

/// Hand off a merchant application.
#[instrument(skip(state, request), fields(store = %request.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<StoreRequest>,
) -> Result<Json<StoreRequestView>> {
    if !request.is_complete() {
        return Err(AppError::BadRequest(
            "store name, category, owner name, and phone are required".to_string(),
        ));
    }

    let message = whatsapp::store_request_message(&request);
    let url = whatsapp::wa_link(&state.config().whatsapp_number, &message);

    Ok(Json(StoreRequestView { whatsapp_url: url }))
}
