//! Database operations for the storefront.
//!
//! The storefront and admin share one `PostgreSQL` database; this binary only
//! reads from it.
//!
//! ## Tables (catalog schema)
//!
//! - `catalog.category` - Home-screen vertical tiles
//! - `catalog.restaurant` / `catalog.restaurant_category` - Restaurants and
//!   their cuisine tags
//! - `catalog.product` - Menu items, grouped into sections per restaurant
//! - `catalog.doctor` / `catalog.craftsman` - Directory listings
//! - `catalog.promo` - Home-screen promotional slides
//!
//! Plus `tower_sessions.session` for tower-sessions storage.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p souk-cli -- migrate storefront
//! ```

pub mod catalog;
pub mod directory;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use directory::DirectoryRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique name).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
