pub mod category;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories          list all categories, ordered by name (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/categories", category::router())
}
