//! Authentication middleware and extractors for admin.
//!
//! Provides extractors for requiring admin authentication in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires admin authentication.
///
/// The admin surface is a JSON API, so an unauthenticated request gets a
/// plain 401 rather than a login redirect.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when admin authentication is required but missing.
pub struct AdminAuthRejection;

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection)?;

        // Get the current admin from the session
        let admin: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or(AdminAuthRejection)?;

        Ok(Self(admin))
    }
}

/// Extractor that requires an admin allowed to modify the catalog.
///
/// Viewers authenticate like everyone else but get 403 on write endpoints.
pub struct RequireAdminWrite(pub CurrentAdmin);

/// Error returned when write access is required.
pub enum AdminWriteRejection {
    /// Not logged in at all.
    Unauthorized,
    /// Logged in, but the role is read-only.
    Forbidden,
}

impl IntoResponse for AdminWriteRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "write access required").into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminWrite
where
    S: Send + Sync,
{
    type Rejection = AdminWriteRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAdminAuth(admin) = RequireAdminAuth::from_request_parts(parts, state)
            .await
            .map_err(|AdminAuthRejection| AdminWriteRejection::Unauthorized)?;

        if !admin.role.can_write() {
            return Err(AdminWriteRejection::Forbidden);
        }

        Ok(Self(admin))
    }
}
