//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::{CurrentAdmin, session_keys};
use crate::services::AdminAuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login with email and password.
///
/// On success the admin identity is stored in the server-side session; the
/// cookie is the only token the client holds.
#[instrument(skip(state, session, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CurrentAdmin>> {
    let user = AdminAuthService::new(state.pool())
        .login_with_password(&request.email, &request.password)
        .await?;

    let current = CurrentAdmin {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    };

    // Rotate the session id on privilege change (login) to prevent fixation.
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_ADMIN, &current)
        .await?;

    tracing::info!(admin = %current.email, "admin logged in");
    Ok(Json(current))
}

/// Logout: destroy the session entirely.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}

/// The currently logged-in admin.
#[instrument(skip(admin))]
pub async fn me(RequireAdminAuth(admin): RequireAdminAuth) -> Json<CurrentAdmin> {
    Json(admin)
}
