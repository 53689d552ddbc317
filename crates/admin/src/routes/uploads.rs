//! Image upload passthrough.
//!
//! The admin panel accepts a multipart image, writes it under a UUID
//! filename in the uploads directory, and returns the public URL the
//! storefront serves it from. Nothing else happens to the file - no
//! resizing, no scanning, no metadata.

use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminWrite;
use crate::state::AppState;

/// Upload query parameters.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Subdirectory to file the image under, e.g. `products` or `promos`.
    #[serde(default = "default_folder")]
    pub folder: String,
}

fn default_folder() -> String {
    "products".to_string()
}

/// Upload result payload.
#[derive(Debug, Serialize)]
pub struct UploadView {
    pub url: String,
}

/// File extensions accepted for upload, keyed by content type.
const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

/// Accept a multipart image upload and return its public URL.
#[instrument(skip(state, _admin, multipart))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminWrite,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadView>> {
    // Folder names come from our own admin UI, but never trust path input.
    if query.folder.contains(['/', '\\', '.']) {
        return Err(AppError::BadRequest("invalid folder name".to_string()));
    }

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::BadRequest("missing file field".to_string()))?;

    let content_type = field.content_type().map(str::to_owned).unwrap_or_default();
    let extension = ACCEPTED_TYPES
        .iter()
        .find(|(ty, _)| *ty == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            AppError::BadRequest(format!("unsupported content type: {content_type}"))
        })?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("empty upload".to_string()));
    }

    let filename = format!("{}.{extension}", Uuid::new_v4());
    let dir = state.config().uploads_dir.join(&query.folder);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::Internal(format!("failed to create uploads dir: {e}")))?;
    tokio::fs::write(dir.join(&filename), &bytes)
        .await
        .map_err(|e| AppError::Internal(format!("failed to write upload: {e}")))?;

    let url = format!(
        "{}/uploads/{}/{filename}",
        state.config().public_base_url.trim_end_matches('/'),
        query.folder
    );

    tracing::info!(size = bytes.len(), %url, "image uploaded");
    Ok(Json(UploadView { url }))
}
