//! Query parameter types for page and API handlers.

use serde::Deserialize;

/// Query parameters for the product listing page (`?category=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Category slug to filter by. Empty means no filter.
    pub category: Option<String>,
}
