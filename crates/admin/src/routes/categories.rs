//! Category tile CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use souk_core::CategoryId;

use crate::db::catalog::{Category, CategoryInput};
use crate::db::CatalogAdminRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// List category tiles.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<Category>>> {
    let rows = CatalogAdminRepository::new(state.pool())
        .list_categories()
        .await?;
    Ok(Json(rows))
}

/// Create a category tile.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, icon, and link are required".to_string(),
        ));
    }

    let row = CatalogAdminRepository::new(state.pool())
        .create_category(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a category tile.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<CategoryId>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, icon, and link are required".to_string(),
        ));
    }

    let row = CatalogAdminRepository::new(state.pool())
        .update_category(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a category tile.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    CatalogAdminRepository::new(state.pool())
        .delete_category(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
