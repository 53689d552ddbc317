//! Home page route handler.
//!
//! Serves the landing payload in one round trip: category tiles, active
//! promo slides, and the top-rated restaurants. All three reads go through
//! the 5-minute catalog cache.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::catalog::{Category, Promo, RestaurantWithTags};
use crate::state::{AppState, CacheKey, CacheValue};

/// Number of restaurants featured on the home screen.
const FEATURED_RESTAURANTS: i64 = 3;

/// Home payload.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub categories: Vec<Category>,
    pub promos: Vec<Promo>,
    pub featured_restaurants: Vec<RestaurantWithTags>,
}

/// Landing payload for the home screen.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomeView>> {
    let categories = cached_categories(&state).await?;
    let promos = cached_promos(&state).await?;
    let featured_restaurants = cached_top_restaurants(&state).await?;

    Ok(Json(HomeView {
        categories,
        promos,
        featured_restaurants,
    }))
}

async fn cached_categories(state: &AppState) -> Result<Vec<Category>> {
    if let Some(CacheValue::Categories(rows)) =
        state.catalog_cache().get(&CacheKey::Categories).await
    {
        return Ok(rows);
    }

    let rows = CatalogRepository::new(state.pool()).list_categories().await?;
    state
        .catalog_cache()
        .insert(CacheKey::Categories, CacheValue::Categories(rows.clone()))
        .await;
    Ok(rows)
}

async fn cached_promos(state: &AppState) -> Result<Vec<Promo>> {
    if let Some(CacheValue::Promos(rows)) =
        state.catalog_cache().get(&CacheKey::ActivePromos).await
    {
        return Ok(rows);
    }

    let rows = CatalogRepository::new(state.pool())
        .list_active_promos()
        .await?;
    state
        .catalog_cache()
        .insert(CacheKey::ActivePromos, CacheValue::Promos(rows.clone()))
        .await;
    Ok(rows)
}

async fn cached_top_restaurants(state: &AppState) -> Result<Vec<RestaurantWithTags>> {
    if let Some(CacheValue::Restaurants(rows)) =
        state.catalog_cache().get(&CacheKey::TopRestaurants).await
    {
        return Ok(rows);
    }

    let rows = CatalogRepository::new(state.pool())
        .top_restaurants(FEATURED_RESTAURANTS)
        .await?;
    state
        .catalog_cache()
        .insert(
            CacheKey::TopRestaurants,
            CacheValue::Restaurants(rows.clone()),
        )
        .await;
    Ok(rows)
}
