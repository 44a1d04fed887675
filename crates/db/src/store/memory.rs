use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use retrokit_core::types::DbId;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::product::{
    assemble_listings, Product, ProductFilter, ProductImage, ProductListing, ProductSize,
};
use crate::store::CatalogStore;

/// In-memory [`CatalogStore`] holding raw rows.
///
/// Applies the same filtering, ordering and primary-image selection as the
/// Postgres queries. Rows are fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
    images: Vec<ProductImage>,
    sizes: Vec<ProductSize>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_image(mut self, image: ProductImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_size(mut self, size: ProductSize) -> Self {
        self.sizes.push(size);
        self
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, StoreError> {
        let categories: HashMap<DbId, &Category> =
            self.categories.iter().map(|c| (c.id, c)).collect();

        // Inner join: a product whose category is missing is never listed.
        let mut products: Vec<(Product, Category)> = self
            .products
            .iter()
            .filter(|p| p.is_available)
            .filter_map(|p| {
                let category = categories.get(&p.category_id)?;
                match filter.category_slug.as_deref() {
                    Some(slug) if category.slug != slug => None,
                    _ => Some((p.clone(), (*category).clone())),
                }
            })
            .collect();
        products.sort_by_key(|(p, _)| Reverse((p.created_at, p.id)));

        let mut images: Vec<ProductImage> =
            self.images.iter().filter(|i| i.is_primary).cloned().collect();
        images.sort_by_key(|i| i.id);

        let mut sizes = self.sizes.clone();
        sizes.sort_by_key(|s| s.id);

        Ok(assemble_listings(products, images, sizes))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
