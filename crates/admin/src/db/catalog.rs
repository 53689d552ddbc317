//! Write-side repository for categories and promos.
//!
//! Row and parameter types live next to the queries, mirroring the admin
//! screens they serve: a category tile form and a promo slide form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use souk_core::{CategoryId, PromoId};

use super::RepositoryError;

/// A home-screen category tile row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub link: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating or updating a category tile.
#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub icon: String,
    pub link: String,
    pub color: String,
}

impl CategoryInput {
    /// Required-field check, matching the admin form validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.icon.is_empty() && !self.link.is_empty()
    }
}

/// A promotional slide row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Promo {
    pub id: PromoId,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating or updating a promo slide.
#[derive(Debug, Deserialize)]
pub struct PromoInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl PromoInput {
    /// Required-field check: a promo needs a title and an image.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.image.is_empty()
    }
}

/// Repository for category and promo writes.
pub struct CatalogAdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogAdminRepository<'a> {
    /// Create a new repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// All category tiles, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, icon, link, color, created_at
            FROM catalog.category
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a category tile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(
        &self,
        input: &CategoryInput,
    ) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, Category>(
            r"
            INSERT INTO catalog.category (name, icon, link, color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, icon, link, color, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.icon)
        .bind(&input.link)
        .bind(&input.color)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update a category tile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, Category>(
            r"
            UPDATE catalog.category
            SET name = $2, icon = $3, link = $4, color = $5
            WHERE id = $1
            RETURNING id, name, icon, link, color, created_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.icon)
        .bind(&input.link)
        .bind(&input.color)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a category tile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.category WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    // =========================================================================
    // Promos
    // =========================================================================

    /// All promo slides, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_promos(&self) -> Result<Vec<Promo>, RepositoryError> {
        let rows = sqlx::query_as::<_, Promo>(
            r"
            SELECT id, title, description, image, active, created_at
            FROM catalog.promo
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a promo slide.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_promo(&self, input: &PromoInput) -> Result<Promo, RepositoryError> {
        let row = sqlx::query_as::<_, Promo>(
            r"
            INSERT INTO catalog.promo (title, description, image, active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, image, active, created_at
            ",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.active)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update a promo slide.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_promo(
        &self,
        id: PromoId,
        input: &PromoInput,
    ) -> Result<Promo, RepositoryError> {
        let row = sqlx::query_as::<_, Promo>(
            r"
            UPDATE catalog.promo
            SET title = $2, description = $3, image = $4, active = $5
            WHERE id = $1
            RETURNING id, title, description, image, active, created_at
            ",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.active)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a promo slide.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_promo(&self, id: PromoId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.promo WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_input_required_fields() {
        let input = CategoryInput {
            name: "مطاعم".to_owned(),
            icon: "/uploads/icons/food.png".to_owned(),
            link: "/restaurants".to_owned(),
            color: "orange".to_owned(),
        };
        assert!(input.is_complete());

        let missing = CategoryInput {
            name: String::new(),
            ..input
        };
        assert!(!missing.is_complete());
    }

    #[test]
    fn test_promo_input_defaults_active() {
        let input: PromoInput = serde_json::from_str(
            r#"{"title": "خصم 30%", "image": "/uploads/promos/p1.jpg"}"#,
        )
        .expect("valid input");
        assert!(input.active);
        assert!(input.is_complete());
    }
}
