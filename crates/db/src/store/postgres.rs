use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::product::{ProductFilter, ProductListing};
use crate::repositories::{CategoryRepo, ProductRepo};
use crate::store::CatalogStore;
use crate::DbPool;

/// [`CatalogStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, StoreError> {
        Ok(ProductRepo::list_available(&self.pool, filter).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
