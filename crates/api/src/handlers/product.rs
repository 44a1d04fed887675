//! Handler for the product listing page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use retrokit_db::models::product::ProductFilter;

use crate::error::{AppError, PageResult};
use crate::query::ListingParams;
use crate::state::AppState;
use crate::views::product_listing::ProductListingPage;

/// GET /products?category=<slug>
///
/// Render available products, newest first, optionally restricted to one
/// category. Categories (for the filter bar) and products are fetched
/// concurrently; neither depends on the other. A malformed query string
/// (e.g. a repeated `category`) renders a 400 page.
pub async fn listing_page(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> PageResult<Html<String>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let filter = ProductFilter::from_category_param(params.category.as_deref());

    let (categories, listings) = tokio::try_join!(
        state.store.list_categories(),
        state.store.list_products(&filter),
    )?;

    tracing::debug!(
        category = ?filter.category_slug,
        categories = categories.len(),
        products = listings.len(),
        "Rendering product listing"
    );

    let page = ProductListingPage::new(
        &filter,
        &categories,
        &listings,
        &state.config.seed_action_path,
    );
    Ok(Html(page.render()))
}
