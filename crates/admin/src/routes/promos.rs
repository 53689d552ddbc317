//! Promo slide CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use souk_core::PromoId;

use crate::db::CatalogAdminRepository;
use crate::db::catalog::{Promo, PromoInput};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// List promo slides, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<Promo>>> {
    let rows = CatalogAdminRepository::new(state.pool())
        .list_promos()
        .await?;
    Ok(Json(rows))
}

/// Create a promo slide.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<PromoInput>,
) -> Result<(StatusCode, Json<Promo>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "title and image are required".to_string(),
        ));
    }

    let row = CatalogAdminRepository::new(state.pool())
        .create_promo(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a promo slide (including the active toggle).
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<PromoId>,
    Json(input): Json<PromoInput>,
) -> Result<Json<Promo>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "title and image are required".to_string(),
        ));
    }

    let row = CatalogAdminRepository::new(state.pool())
        .update_promo(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a promo slide.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<PromoId>,
) -> Result<StatusCode> {
    CatalogAdminRepository::new(state.pool())
        .delete_promo(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
