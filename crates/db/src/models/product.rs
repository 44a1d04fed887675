//! Product entity models and the enriched listing aggregate.

use std::collections::HashMap;

use retrokit_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::category::Category;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub club: String,
    pub season: String,
    pub price: Decimal,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub category_id: DbId,
}

/// A row from the `product_images` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub product_id: DbId,
    pub url: String,
    pub alt: Option<String>,
    pub is_primary: bool,
}

/// A row from the `product_sizes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProductSize {
    pub id: DbId,
    pub product_id: DbId,
    pub size: String,
    pub stock: i32,
}

/// A product joined with its category columns, as returned by the listing
/// query. Split into `(Product, Category)` before use.
#[derive(Debug, Clone, FromRow)]
pub struct ProductCategoryRow {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub club: String,
    pub season: String,
    pub price: Decimal,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub category_id: DbId,
    pub category_name: String,
    pub category_slug: String,
}

impl ProductCategoryRow {
    pub fn into_parts(self) -> (Product, Category) {
        let category = Category {
            id: self.category_id,
            name: self.category_name,
            slug: self.category_slug,
        };
        let product = Product {
            id: self.id,
            slug: self.slug,
            name: self.name,
            club: self.club,
            season: self.season,
            price: self.price,
            is_available: self.is_available,
            created_at: self.created_at,
            category_id: self.category_id,
        };
        (product, category)
    }
}

/// An available product with everything the listing page needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub product: Product,
    pub category: Category,
    /// First primary-flagged image, if any.
    pub primary_image: Option<ProductImage>,
    /// All size rows, in store order (not display order).
    pub sizes: Vec<ProductSize>,
}

/// Filter for the product listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to products whose category has this slug.
    pub category_slug: Option<String>,
}

impl ProductFilter {
    /// Build a filter from the raw `category` query parameter.
    ///
    /// An empty value means "no filter".
    pub fn from_category_param(category: Option<&str>) -> Self {
        Self {
            category_slug: category
                .filter(|slug| !slug.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.category_slug.is_some()
    }
}

/// Attach images and sizes to already filtered and ordered products.
///
/// `images` must contain only primary-flagged rows; the first one seen for a
/// product wins. `sizes` keep their given order within each product.
pub fn assemble_listings(
    products: Vec<(Product, Category)>,
    images: Vec<ProductImage>,
    sizes: Vec<ProductSize>,
) -> Vec<ProductListing> {
    let mut images_by_product: HashMap<DbId, ProductImage> = HashMap::new();
    for image in images {
        images_by_product.entry(image.product_id).or_insert(image);
    }

    let mut sizes_by_product: HashMap<DbId, Vec<ProductSize>> = HashMap::new();
    for size in sizes {
        sizes_by_product.entry(size.product_id).or_default().push(size);
    }

    products
        .into_iter()
        .map(|(product, category)| ProductListing {
            primary_image: images_by_product.remove(&product.id),
            sizes: sizes_by_product.remove(&product.id).unwrap_or_default(),
            product,
            category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn product(id: DbId) -> (Product, Category) {
        (
            Product {
                id,
                slug: format!("kit-{id}"),
                name: format!("Kit {id}"),
                club: "Club".into(),
                season: "1990/91".into(),
                price: Decimal::new(450_000, 0),
                is_available: true,
                created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                category_id: 1,
            },
            Category {
                id: 1,
                name: "Retro".into(),
                slug: "retro".into(),
            },
        )
    }

    fn image(id: DbId, product_id: DbId) -> ProductImage {
        ProductImage {
            id,
            product_id,
            url: format!("https://cdn.example.com/{id}.jpg"),
            alt: None,
            is_primary: true,
        }
    }

    fn size(id: DbId, product_id: DbId, label: &str, stock: i32) -> ProductSize {
        ProductSize {
            id,
            product_id,
            size: label.into(),
            stock,
        }
    }

    // -- ProductFilter --

    #[test]
    fn empty_category_param_is_unfiltered() {
        assert!(!ProductFilter::from_category_param(None).is_filtered());
        assert!(!ProductFilter::from_category_param(Some("")).is_filtered());
    }

    #[test]
    fn category_param_is_kept_verbatim() {
        let filter = ProductFilter::from_category_param(Some("retro"));
        assert_eq!(filter.category_slug.as_deref(), Some("retro"));
    }

    // -- assemble_listings --

    #[test]
    fn keeps_product_order() {
        let listings = assemble_listings(vec![product(3), product(1), product(2)], vec![], vec![]);
        let ids: Vec<DbId> = listings.iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn first_primary_image_wins() {
        let listings = assemble_listings(vec![product(1)], vec![image(7, 1), image(9, 1)], vec![]);
        assert_eq!(listings[0].primary_image.as_ref().map(|i| i.id), Some(7));
    }

    #[test]
    fn sizes_are_grouped_per_product() {
        let listings = assemble_listings(
            vec![product(1), product(2)],
            vec![],
            vec![size(1, 1, "M", 5), size(2, 2, "L", 1), size(3, 1, "S", 0)],
        );
        let first: Vec<&str> = listings[0].sizes.iter().map(|s| s.size.as_str()).collect();
        assert_eq!(first, vec!["M", "S"]);
        assert_eq!(listings[1].sizes.len(), 1);
    }

    #[test]
    fn product_without_children_gets_empty_relations() {
        let listings = assemble_listings(vec![product(1)], vec![image(1, 99)], vec![]);
        assert!(listings[0].primary_image.is_none());
        assert!(listings[0].sizes.is_empty());
    }
}
