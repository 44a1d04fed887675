//! Handlers for the `/api/categories` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use retrokit_db::models::category::Category;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// `{ "categories": [...] }` response body.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// GET /api/categories
///
/// List every category, ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}
