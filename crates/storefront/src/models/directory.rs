//! Directory row types: doctors and craftsmen.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use souk_core::{CraftsmanId, DoctorId};

/// A doctor directory row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub education: Option<String>,
    pub image: String,
    /// Consultation fee.
    pub price: Decimal,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// A craftsman (handyman) directory row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Craftsman {
    pub id: CraftsmanId,
    pub name: String,
    pub profession: String,
    pub description: Option<String>,
    pub area: Option<String>,
    pub phone: Option<String>,
    pub image: String,
    pub hourly_rate: Decimal,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    pub created_at: DateTime<Utc>,
}
