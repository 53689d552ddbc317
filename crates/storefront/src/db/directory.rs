//! Read-side repository for the doctor and craftsman directories.

use sqlx::PgPool;

use souk_core::CraftsmanId;

use super::RepositoryError;
use crate::models::directory::{Craftsman, Doctor};

/// Repository for directory reads.
pub struct DirectoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DirectoryRepository<'a> {
    /// Create a new directory repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

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

    /// One craftsman by id (for the contact hand-off).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_craftsman(
        &self,
        id: CraftsmanId,
    ) -> Result<Option<Craftsman>, RepositoryError> {
        let row = sqlx::query_as::<_, Craftsman>(
            r"
            SELECT id, name, profession, description, area, phone, image,
                   hourly_rate, rating, reviews, created_at
            FROM catalog.craftsman
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
