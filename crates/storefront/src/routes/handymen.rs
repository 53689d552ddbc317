//! Craftsman (handyman) directory route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use tracing::instrument;

use souk_core::CraftsmanId;

use crate::db::DirectoryRepository;
use crate::error::{AppError, Result};
use crate::models::directory::Craftsman;
use crate::models::filter::ListFilter;
use crate::services::whatsapp;
use crate::state::AppState;

/// Contact hand-off payload.
#[derive(Debug, Serialize)]
pub struct ContactView {
    pub whatsapp_url: String,
}

/// Craftsman listing, filtered by `q` (name substring) and `profession`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<Craftsman>>> {
    let craftsmen = DirectoryRepository::new(state.pool())
        .list_craftsmen()
        .await?;

    let filtered = craftsmen
        .into_iter()
        .filter(|c| filter.matches(&c.name, [c.profession.as_str()]))
        .collect();

    Ok(Json(filtered))
}

/// Hand-off link for contacting a craftsman.
#[instrument(skip(state))]
pub async fn contact(
    State(state): State<AppState>,
    Path(id): Path<CraftsmanId>,
) -> Result<Json<ContactView>> {
    let craftsman = DirectoryRepository::new(state.pool())
        .get_craftsman(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("craftsman {id}")))?;

    let message = whatsapp::craftsman_contact_message(&craftsman.name, &craftsman.profession);
    let url = whatsapp::wa_link(&state.config().whatsapp_number, &message);

    Ok(Json(ContactView { whatsapp_url: url }))
}
