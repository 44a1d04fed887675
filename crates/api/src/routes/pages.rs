//! Route definitions for server-rendered storefront pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET  /products[?category=<slug>]   -> product listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/products", get(product::listing_page))
}
