//! Read-side repository for the shared catalog tables.
//!
//! All queries use the runtime `query_as` API with bound parameters; rows
//! decode into the `FromRow` types in [`crate::models::catalog`].

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use souk_core::RestaurantId;

use super::RepositoryError;
use crate::models::catalog::{Category, Product, Promo, Restaurant, RestaurantWithTags};

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All home-screen category tiles, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, icon, link, color, created_at
            FROM catalog.category
            ORDER BY created_at
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Active promotional slides, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active_promos(&self) -> Result<Vec<Promo>, RepositoryError> {
        let rows = sqlx::query_as::<_, Promo>(
            r"
            SELECT id, title, description, image, active, created_at
            FROM catalog.promo
            WHERE active
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All restaurants with their cuisine tags, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantWithTags>, RepositoryError> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r"
            SELECT id, name, image, description, rating, reviews,
                   delivery_time, min_order, created_at
            FROM catalog.restaurant
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        self.attach_tags(restaurants).await
    }

    /// The highest-rated restaurants, for the home screen.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn top_restaurants(
        &self,
        limit: i64,
    ) -> Result<Vec<RestaurantWithTags>, RepositoryError> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r"
            SELECT id, name, image, description, rating, reviews,
                   delivery_time, min_order, created_at
            FROM catalog.restaurant
            ORDER BY rating DESC NULLS LAST, reviews DESC NULLS LAST
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        self.attach_tags(restaurants).await
    }

    /// One restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_restaurant(
        &self,
        id: RestaurantId,
    ) -> Result<Option<RestaurantWithTags>, RepositoryError> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            r"
            SELECT id, name, image, description, rating, reviews,
                   delivery_time, min_order, created_at
            FROM catalog.restaurant
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match restaurant {
            Some(restaurant) => {
                let mut with_tags = self.attach_tags(vec![restaurant]).await?;
                Ok(with_tags.pop())
            }
            None => Ok(None),
        }
    }

    /// A restaurant's menu items, ordered by name within category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn products_for_restaurant(
        &self,
        id: RestaurantId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r"
            SELECT id, restaurant_id, name, description, price, image,
                   category, created_at
            FROM catalog.product
            WHERE restaurant_id = $1
            ORDER BY category NULLS LAST, name
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Fetch cuisine tags for a batch of restaurants and zip them on.
    async fn attach_tags(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<RestaurantWithTags>, RepositoryError> {
        if restaurants.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = restaurants.iter().map(|r| r.id.as_uuid()).collect();

        let tags: Vec<(Uuid, String)> = sqlx::query_as(
            r"
            SELECT restaurant_id, category_name
            FROM catalog.restaurant_category
            WHERE restaurant_id = ANY($1)
            ORDER BY category_name
            ",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        Ok(restaurants
            .into_iter()
            .map(|restaurant| {
                let categories = tags
                    .iter()
                    .filter(|(rid, _)| *rid == restaurant.id.as_uuid())
                    .map(|(_, name)| name.clone())
                    .collect();
                RestaurantWithTags {
                    restaurant,
                    categories,
                }
            })
            .collect())
    }
}
