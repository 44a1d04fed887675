//! The catalog store seam.
//!
//! HTTP handlers depend on [`CatalogStore`] rather than on a pool, so the
//! Postgres implementation can be swapped for [`MemoryCatalogStore`] in
//! tests and local demos.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::product::{ProductFilter, ProductListing};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Read-only access to the catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every category, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Available products matching `filter`, newest first, with category,
    /// primary image and sizes attached.
    async fn list_products(&self, filter: &ProductFilter)
        -> Result<Vec<ProductListing>, StoreError>;

    /// Cheap liveness probe for the backing store.
    async fn health_check(&self) -> Result<(), StoreError>;
}
