//! Doctor directory route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::db::DirectoryRepository;
use crate::error::Result;
use crate::models::directory::Doctor;
use crate::models::filter::ListFilter;
use crate::state::AppState;

/// Doctor listing, filtered by `q` (name substring) and `specialty`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<Doctor>>> {
    let doctors = DirectoryRepository::new(state.pool()).list_doctors().await?;

    let filtered = doctors
        .into_iter()
        .filter(|d| filter.matches(&d.name, [d.specialty.as_str()]))
        .collect();

    Ok(Json(filtered))
}
