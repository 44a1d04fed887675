//! Repository for `products` and their child `product_images` /
//! `product_sizes` rows.

use retrokit_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{
    assemble_listings, ProductCategoryRow, ProductFilter, ProductImage, ProductListing,
    ProductSize,
};

/// Provides read access to the product listing.
pub struct ProductRepo;

impl ProductRepo {
    /// List available products matching `filter`, newest first.
    ///
    /// Each product carries its category, its first primary image (lowest
    /// id) and all of its size rows. An unknown category slug yields an
    /// empty list.
    pub async fn list_available(
        pool: &PgPool,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT p.id, p.slug, p.name, p.club, p.season, p.price, p.is_available, \
                    p.created_at, p.category_id, \
                    c.name AS category_name, c.slug AS category_slug \
             FROM products p \
             JOIN categories c ON c.id = p.category_id \
             WHERE p.is_available = true \
               AND ($1::TEXT IS NULL OR c.slug = $1) \
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(filter.category_slug.as_deref())
        .fetch_all(pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = rows.iter().map(|row| row.id).collect();
        let images = Self::primary_images(pool, &ids).await?;
        let sizes = Self::sizes(pool, &ids).await?;

        tracing::debug!(
            products = rows.len(),
            images = images.len(),
            sizes = sizes.len(),
            category = ?filter.category_slug,
            "Loaded product listing"
        );

        let products = rows.into_iter().map(ProductCategoryRow::into_parts).collect();
        Ok(assemble_listings(products, images, sizes))
    }

    /// First primary-flagged image per product (lowest id wins).
    pub async fn primary_images(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<ProductImage>, sqlx::Error> {
        sqlx::query_as::<_, ProductImage>(
            "SELECT DISTINCT ON (product_id) id, product_id, url, alt, is_primary \
             FROM product_images \
             WHERE product_id = ANY($1) AND is_primary = true \
             ORDER BY product_id, id",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await
    }

    /// All size rows for the given products, in insertion order.
    pub async fn sizes(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<ProductSize>, sqlx::Error> {
        sqlx::query_as::<_, ProductSize>(
            "SELECT id, product_id, size, stock \
             FROM product_sizes \
             WHERE product_id = ANY($1) \
             ORDER BY product_id, id",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await
    }
}
