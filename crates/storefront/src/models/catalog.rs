//! Catalog row types read by the storefront.
//!
//! These mirror the shared database tables the admin panel writes. All of
//! them derive `sqlx::FromRow` so repositories can use the runtime
//! `query_as` API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use souk_core::{CategoryId, ProductId, PromoId, RestaurantId};

/// A home-screen vertical tile (restaurants, pharmacies, ...).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon image URL.
    pub icon: String,
    /// Client route the tile links to, e.g. `/restaurants`.
    pub link: String,
    /// Tile background color token.
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// A restaurant listing row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    /// Human-readable delivery window, e.g. "30-45 min".
    pub delivery_time: Option<String>,
    pub min_order: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// A restaurant together with its cuisine tags, as returned by list and
/// detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantWithTags {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub categories: Vec<String>,
}

/// A menu item row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub restaurant_id: Option<RestaurantId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: String,
    /// Menu section the item belongs to; uncategorized items fall into a
    /// default section on the detail payload.
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One section of a restaurant's menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<Product>,
}

/// A promotional slide for the home screen.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Promo {
    pub id: PromoId,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Group a restaurant's products into menu sections by their category.
///
/// Section order follows first appearance; uncategorized items land in a
/// trailing section named by `fallback`.
#[must_use]
pub fn group_menu(products: Vec<Product>, fallback: &str) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();
    let mut uncategorized: Vec<Product> = Vec::new();

    for product in products {
        match product.category.clone() {
            Some(name) if !name.is_empty() => {
                match sections.iter_mut().find(|s| s.name == name) {
                    Some(section) => section.items.push(product),
                    None => sections.push(MenuSection {
                        name,
                        items: vec![product],
                    }),
                }
            }
            _ => uncategorized.push(product),
        }
    }

    if !uncategorized.is_empty() {
        sections.push(MenuSection {
            name: fallback.to_owned(),
            items: uncategorized,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: Option<&str>) -> Product {
        Product {
            id: ProductId::generate(),
            restaurant_id: None,
            name: name.to_owned(),
            description: None,
            price: Decimal::from(50),
            image: String::new(),
            category: category.map(str::to_owned),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_menu_by_category() {
        let sections = group_menu(
            vec![
                product("big burger", Some("برجر")),
                product("fries", Some("جانبية")),
                product("cheese burger", Some("برجر")),
            ],
            "المنيو",
        );

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "برجر");
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[1].name, "جانبية");
    }

    #[test]
    fn test_group_menu_uncategorized_falls_back() {
        let sections = group_menu(
            vec![product("cola", None), product("burger", Some("برجر"))],
            "المنيو",
        );

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].name, "المنيو");
        assert_eq!(sections[1].items[0].name, "cola");
    }

    #[test]
    fn test_group_menu_empty() {
        assert!(group_menu(Vec::new(), "المنيو").is_empty());
    }
}
