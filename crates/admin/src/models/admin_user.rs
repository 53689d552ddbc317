//! Admin user types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use souk_core::{AdminRole, AdminUserId, Email};

/// A back-office user.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
