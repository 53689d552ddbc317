//! Write-side repository for the doctor and craftsman directories.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use souk_core::{CraftsmanId, DoctorId};

use super::RepositoryError;

/// A doctor row as managed by the admin panel.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub education: Option<String>,
    pub image: String,
    pub price: Decimal,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating or updating a doctor.
#[derive(Debug, Deserialize)]
pub struct DoctorInput {
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub education: Option<String>,
    pub image: String,
    pub price: Decimal,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub reviews: Option<i32>,
}

impl DoctorInput {
    /// Required-field check, matching the admin form validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.specialty.is_empty()
            && !self.image.is_empty()
            && self.price >= Decimal::ZERO
    }
}

/// A craftsman row as managed by the admin panel.
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

/// Parameters for creating or updating a craftsman.
#[derive(Debug, Deserialize)]
pub struct CraftsmanInput {
    pub name: String,
    pub profession: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub image: String,
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub reviews: Option<i32>,
}

impl CraftsmanInput {
    /// Required-field check, matching the admin form validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.profession.is_empty()
            && !self.image.is_empty()
            && self.hourly_rate >= Decimal::ZERO
    }
}

/// Repository for directory writes.
pub struct DirectoryAdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DirectoryAdminRepository<'a> {
    /// Create a new repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Doctors
    // =========================================================================

    /// All doctors, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, RepositoryError> {
        let rows = sqlx::query_as::<_, Doctor>(
            r"
            SELECT id, name, specialty, education, image, price,
                   rating, reviews, created_at
            FROM catalog.doctor
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a doctor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_doctor(&self, input: &DoctorInput) -> Result<Doctor, RepositoryError> {
        let row = sqlx::query_as::<_, Doctor>(
            r"
            INSERT INTO catalog.doctor
                (name, specialty, education, image, price, rating, reviews)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, specialty, education, image, price,
                      rating, reviews, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.specialty)
        .bind(&input.education)
        .bind(&input.image)
        .bind(input.price)
        .bind(input.rating)
        .bind(input.reviews)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update a doctor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_doctor(
        &self,
        id: DoctorId,
        input: &DoctorInput,
    ) -> Result<Doctor, RepositoryError> {
        let row = sqlx::query_as::<_, Doctor>(
            r"
            UPDATE catalog.doctor
            SET name = $2, specialty = $3, education = $4, image = $5,
                price = $6, rating = $7, reviews = $8
            WHERE id = $1
            RETURNING id, name, specialty, education, image, price,
                      rating, reviews, created_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.specialty)
        .bind(&input.education)
        .bind(&input.image)
        .bind(input.price)
        .bind(input.rating)
        .bind(input.reviews)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a doctor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_doctor(&self, id: DoctorId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.doctor WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    // =========================================================================
    // Craftsmen
    // =========================================================================

    /// All craftsmen, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_craftsmen(&self) -> Result<Vec<Craftsman>, RepositoryError> {
        let rows = sqlx::query_as::<_, Craftsman>(
            r"
            SELECT id, name, profession, description, area, phone, image,
                   hourly_rate, rating, reviews, created_at
            FROM catalog.craftsman
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a craftsman.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_craftsman(
        &self,
        input: &CraftsmanInput,
    ) -> Result<Craftsman, RepositoryError> {
        let row = sqlx::query_as::<_, Craftsman>(
            r"
            INSERT INTO catalog.craftsman
                (name, profession, description, area, phone, image,
                 hourly_rate, rating, reviews)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, profession, description, area, phone, image,
                      hourly_rate, rating, reviews, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.profession)
        .bind(&input.description)
        .bind(&input.area)
        .bind(&input.phone)
        .bind(&input.image)
        .bind(input.hourly_rate)
        .bind(input.rating)
        .bind(input.reviews)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update a craftsman.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_craftsman(
        &self,
        id: CraftsmanId,
        input: &CraftsmanInput,
    ) -> Result<Craftsman, RepositoryError> {
        let row = sqlx::query_as::<_, Craftsman>(
            r"
            UPDATE catalog.craftsman
            SET name = $2, profession = $3, description = $4, area = $5,
                phone = $6, image = $7, hourly_rate = $8, rating = $9,
                reviews = $10
            WHERE id = $1
            RETURNING id, name, profession, description, area, phone, image,
                      hourly_rate, rating, reviews, created_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.profession)
        .bind(&input.description)
        .bind(&input.area)
        .bind(&input.phone)
        .bind(&input.image)
        .bind(input.hourly_rate)
        .bind(input.rating)
        .bind(input.reviews)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a craftsman.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_craftsman(&self, id: CraftsmanId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.craftsman WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
