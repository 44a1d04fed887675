//! Route definitions for catalog categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/api/categories`.
///
/// ```text
/// GET  /       -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(category::list))
}
