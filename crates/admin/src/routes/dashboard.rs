//! Dashboard route handler.
//!
//! The dashboard is a row count per managed entity, like the original
//! back-office landing screen.

use axum::{Json, extract::State};
use serde::Serialize;
use sqlx::FromRow;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Row counts per managed entity type.
#[derive(Debug, Serialize, FromRow)]
pub struct DashboardCounts {
    pub categories: i64,
    pub restaurants: i64,
    pub products: i64,
    pub doctors: i64,
    pub craftsmen: i64,
    pub promos: i64,
}

/// Entity counts for the dashboard.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<DashboardCounts>> {
    let counts = sqlx::query_as::<_, DashboardCounts>(
        r"
        SELECT
            (SELECT count(*) FROM catalog.category)   AS categories,
            (SELECT count(*) FROM catalog.restaurant) AS restaurants,
            (SELECT count(*) FROM catalog.product)    AS products,
            (SELECT count(*) FROM catalog.doctor)     AS doctors,
            (SELECT count(*) FROM catalog.craftsman)  AS craftsmen,
            (SELECT count(*) FROM catalog.promo)      AS promos
        ",
    )
    .fetch_one(state.pool())
    .await
    .map_err(crate::db::RepositoryError::from)?;

    Ok(Json(counts))
}
