//! Product (menu item) CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use souk_core::ProductId;

use crate::db::StoreAdminRepository;
use crate::db::stores::{Product, ProductInput, ProductWithRestaurant};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// List products with their restaurant names.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<ProductWithRestaurant>>> {
    let rows = StoreAdminRepository::new(state.pool())
        .list_products()
        .await?;
    Ok(Json(rows))
}

/// Create a product.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, image, restaurant, and a non-negative price are required".to_string(),
        ));
    }

    let row = StoreAdminRepository::new(state.pool())
        .create_product(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a product.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, image, restaurant, and a non-negative price are required".to_string(),
        ));
    }

    let row = StoreAdminRepository::new(state.pool())
        .update_product(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a product.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    StoreAdminRepository::new(state.pool())
        .delete_product(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
