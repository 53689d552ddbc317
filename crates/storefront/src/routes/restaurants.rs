//! Restaurant route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use tracing::instrument;

use souk_core::RestaurantId;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::catalog::{MenuSection, RestaurantWithTags, group_menu};
use crate::models::filter::ListFilter;
use crate::state::AppState;

/// Section name for menu items without a category.
const DEFAULT_MENU_SECTION: &str = "المنيو";

/// Restaurant detail payload: the restaurant plus its menu sections.
#[derive(Debug, Serialize)]
pub struct RestaurantDetailView {
    #[serde(flatten)]
    pub restaurant: RestaurantWithTags,
    pub menu: Vec<MenuSection>,
}

/// Restaurant listing, filtered by `q` (name substring) and `category`
/// (cuisine tag).
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<RestaurantWithTags>>> {
    let restaurants = CatalogRepository::new(state.pool()).list_restaurants().await?;

    let filtered = restaurants
        .into_iter()
        .filter(|r| {
            filter.matches(
                &r.restaurant.name,
                r.categories.iter().map(String::as_str),
            )
        })
        .collect();

    Ok(Json(filtered))
}

/// Restaurant detail with its menu grouped into sections.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<RestaurantId>,
) -> Result<Json<RestaurantDetailView>> {
    let repo = CatalogRepository::new(state.pool());

    let restaurant = repo
        .get_restaurant(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("restaurant {id}")))?;

    let products = repo.products_for_restaurant(id).await?;
    let menu = group_menu(products, DEFAULT_MENU_SECTION);

    Ok(Json(RestaurantDetailView { restaurant, menu }))
}
