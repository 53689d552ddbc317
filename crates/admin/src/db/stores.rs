//! Write-side repository for restaurants, cuisine tags, and products.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use souk_core::{ProductId, RestaurantId};

use super::RepositoryError;

/// A restaurant row as managed by the admin panel.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    pub delivery_time: Option<String>,
    pub min_order: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating or updating a restaurant.
#[derive(Debug, Deserialize)]
pub struct RestaurantInput {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub reviews: Option<i32>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub min_order: Option<Decimal>,
    /// Cuisine tags; replaces the existing set on update.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl RestaurantInput {
    /// Required-field check, matching the admin form validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.image.is_empty()
    }
}

/// A menu item row as managed by the admin panel.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub restaurant_id: Option<RestaurantId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product joined with its restaurant's name, for the listing table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductWithRestaurant {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub product: Product,
    pub restaurant_name: Option<String>,
}

/// Parameters for creating or updating a product.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub restaurant_id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductInput {
    /// Required-field check: a product needs a name, an image, a restaurant,
    /// and a non-negative price.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.image.is_empty() && self.price >= Decimal::ZERO
    }
}

/// Repository for restaurant and product writes.
pub struct StoreAdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreAdminRepository<'a> {
    /// Create a new repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Restaurants
    // =========================================================================

    /// All restaurants, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let rows = sqlx::query_as::<_, Restaurant>(
            r"
            SELECT id, name, image, description, rating, reviews,
                   delivery_time, min_order, created_at
            FROM catalog.restaurant
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Cuisine tags for one restaurant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn cuisine_tags(&self, id: RestaurantId) -> Result<Vec<String>, RepositoryError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r"
            SELECT category_name
            FROM catalog.restaurant_category
            WHERE restaurant_id = $1
            ORDER BY category_name
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Insert a restaurant with its cuisine tags.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_restaurant(
        &self,
        input: &RestaurantInput,
    ) -> Result<Restaurant, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Restaurant>(
            r"
            INSERT INTO catalog.restaurant
                (name, image, description, rating, reviews, delivery_time, min_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, image, description, rating, reviews,
                      delivery_time, min_order, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.description)
        .bind(input.rating)
        .bind(input.reviews)
        .bind(&input.delivery_time)
        .bind(input.min_order)
        .fetch_one(&mut *tx)
        .await?;

        for tag in &input.categories {
            sqlx::query(
                r"
                INSERT INTO catalog.restaurant_category (restaurant_id, category_name)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(row.id)
            .bind(tag)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(row)
    }

    /// Update a restaurant and replace its cuisine tags.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        input: &RestaurantInput,
    ) -> Result<Restaurant, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Restaurant>(
            r"
            UPDATE catalog.restaurant
            SET name = $2, image = $3, description = $4, rating = $5,
                reviews = $6, delivery_time = $7, min_order = $8
            WHERE id = $1
            RETURNING id, name, image, description, rating, reviews,
                      delivery_time, min_order, created_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.description)
        .bind(input.rating)
        .bind(input.reviews)
        .bind(&input.delivery_time)
        .bind(input.min_order)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query("DELETE FROM catalog.restaurant_category WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tag in &input.categories {
            sqlx::query(
                r"
                INSERT INTO catalog.restaurant_category (restaurant_id, category_name)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(id)
            .bind(tag)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(row)
    }

    /// Delete a restaurant; its tags and products cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.restaurant WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products with their restaurant names, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<ProductWithRestaurant>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductWithRestaurant>(
            r"
            SELECT p.id, p.restaurant_id, p.name, p.description, p.price,
                   p.image, p.category, p.created_at,
                   r.name AS restaurant_name
            FROM catalog.product p
            LEFT JOIN catalog.restaurant r ON r.id = p.restaurant_id
            ORDER BY p.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO catalog.product
                (restaurant_id, name, description, price, image, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, restaurant_id, name, description, price, image,
                      category, created_at
            ",
        )
        .bind(input.restaurant_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image)
        .bind(&input.category)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r"
            UPDATE catalog.product
            SET restaurant_id = $2, name = $3, description = $4, price = $5,
                image = $6, category = $7
            WHERE id = $1
            RETURNING id, restaurant_id, name, description, price, image,
                      category, created_at
            ",
        )
        .bind(id)
        .bind(input.restaurant_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image)
        .bind(&input.category)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that id.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM catalog.product WHERE id = $1")
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
    fn test_restaurant_input_required_fields() {
        let input: RestaurantInput = serde_json::from_str(
            r#"{"name": "برجر كينج", "image": "/uploads/r1.jpg", "categories": ["برجر"]}"#,
        )
        .expect("valid input");
        assert!(input.is_complete());
        assert_eq!(input.categories, vec!["برجر"]);
    }

    #[test]
    fn test_product_input_rejects_negative_price() {
        let input: ProductInput = serde_json::from_str(&format!(
            r#"{{"restaurant_id": "{}", "name": "بيج كينج", "price": "-5", "image": "/uploads/p1.jpg"}}"#,
            uuid::Uuid::new_v4()
        ))
        .expect("valid input");
        assert!(!input.is_complete());
    }
}
