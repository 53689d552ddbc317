//! Craftsman directory CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use souk_core::CraftsmanId;

use crate::db::DirectoryAdminRepository;
use crate::db::directory::{Craftsman, CraftsmanInput};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// List craftsmen.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<Craftsman>>> {
    let rows = DirectoryAdminRepository::new(state.pool())
        .list_craftsmen()
        .await?;
    Ok(Json(rows))
}

/// Create a craftsman.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<CraftsmanInput>,
) -> Result<(StatusCode, Json<Craftsman>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, profession, image, and a non-negative hourly rate are required".to_string(),
        ));
    }

    let row = DirectoryAdminRepository::new(state.pool())
        .create_craftsman(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a craftsman.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<CraftsmanId>,
    Json(input): Json<CraftsmanInput>,
) -> Result<Json<Craftsman>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, profession, image, and a non-negative hourly rate are required".to_string(),
        ));
    }

    let row = DirectoryAdminRepository::new(state.pool())
        .update_craftsman(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a craftsman.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<CraftsmanId>,
) -> Result<StatusCode> {
    DirectoryAdminRepository::new(state.pool())
        .delete_craftsman(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
