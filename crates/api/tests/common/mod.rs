#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use retrokit_db::models::category::Category;
use retrokit_db::models::product::{Product, ProductFilter, ProductListing, ProductSize};
use retrokit_db::{CatalogStore, MemoryCatalogStore, StoreError};
use rust_decimal::Decimal;
use tower::ServiceExt;

use retrokit_api::config::ServerConfig;
use retrokit_api::router::build_app_router;
use retrokit_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        database_max_connections: 1,
        seed_action_path: "/api/seed".to_string(),
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given catalog store.
pub fn build_test_app<S>(store: S) -> Router
where
    S: CatalogStore + 'static,
{
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn category(id: i64, name: &str, slug: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn product(id: i64, category_id: i64, name: &str, age_days: i64) -> Product {
    Product {
        id,
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        club: "Juventus".to_string(),
        season: "1984/85".to_string(),
        price: Decimal::new(450_000, 0),
        is_available: true,
        created_at: Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap() - Duration::days(age_days),
        category_id,
    }
}

pub fn size(id: i64, product_id: i64, label: &str, stock: i32) -> ProductSize {
    ProductSize {
        id,
        product_id,
        size: label.to_string(),
        stock,
    }
}

/// One category ("Retro") and one available product ("Classic Home Kit")
/// with sizes S (out of stock) and M (5 left).
pub fn retro_catalog() -> MemoryCatalogStore {
    MemoryCatalogStore::new()
        .with_category(category(1, "Retro", "retro"))
        .with_product(product(1, 1, "Classic Home Kit", 0))
        .with_size(size(1, 1, "S", 0))
        .with_size(size(2, 1, "M", 5))
}

/// Store whose every query fails, as a dead database would.
pub struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list_products(
        &self,
        _filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}
