//! Doctor directory CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use souk_core::DoctorId;

use crate::db::DirectoryAdminRepository;
use crate::db::directory::{Doctor, DoctorInput};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireAdminWrite};
use crate::state::AppState;

/// List doctors.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
) -> Result<Json<Vec<Doctor>>> {
    let rows = DirectoryAdminRepository::new(state.pool())
        .list_doctors()
        .await?;
    Ok(Json(rows))
}

/// Create a doctor.
#[instrument(skip(state, _admin, input))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Json(input): Json<DoctorInput>,
) -> Result<(StatusCode, Json<Doctor>)> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, specialty, image, and a non-negative price are required".to_string(),
        ));
    }

    let row = DirectoryAdminRepository::new(state.pool())
        .create_doctor(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a doctor.
#[instrument(skip(state, _admin, input))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<DoctorId>,
    Json(input): Json<DoctorInput>,
) -> Result<Json<Doctor>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest(
            "name, specialty, image, and a non-negative price are required".to_string(),
        ));
    }

    let row = DirectoryAdminRepository::new(state.pool())
        .update_doctor(id, &input)
        .await?;
    Ok(Json(row))
}

/// Delete a doctor.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Path(id): Path<DoctorId>,
) -> Result<StatusCode> {
    DirectoryAdminRepository::new(state.pool())
        .delete_doctor(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
