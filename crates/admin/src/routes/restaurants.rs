//! Restaurant CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use souk_core::RestaurantId;

use crate::db::StoreAdminRepository;
use crate::db::stores::{Restaurant, RestaurantInput};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// A restaurant with its cuisine tags, as listed in the admin table.
#[derive(Debug, Serialize)]
pub struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub categories: Vec<String>,
}

/// List restaurants with their cuisine tags.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<RestaurantView>>> {
    let repo = StoreAdminRepository::new(state.pool());
    let restaurants = repo.list_restaurants().await?;

    let mut views = Vec::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let categories = repo.cuisine_tags(restaurant.id).await?;
        views.push(RestaurantView {
            restaurant,
            categories,
        });
    }

    Ok(Json(views))
}

/// Create a restaurant with its cuisine tags.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<RestaurantInput>,
) -> Result<(StatusCode, Json<Restaurant>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name and image are required".to_string(),
        ));
    }

    let row = StoreAdminRepository::new(state.pool())
        .create_restaurant(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a restaurant and replace its cuisine tags.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<RestaurantId>,
    Json(input): Json<RestaurantInput>,
) -> Result<Json<Restaurant>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name and image are required".to_string(),
        ));
    }

    let row = StoreAdminRepository::new(state.pool())
        .update_restaurant(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a restaurant (tags and menu items cascade).
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<RestaurantId>,
) -> Result<StatusCode> {
    StoreAdminRepository::new(state.pool())
        .delete_restaurant(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
