/// Failure returned by every [`CatalogStore`](crate::CatalogStore) query.
///
/// Both the JSON API and the HTML pages consume this one type and decide
/// their own presentation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying sqlx query failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The store could not serve the request for a non-database reason.
    #[error("Catalog store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Stable machine-readable failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Database(_) => "DATABASE_ERROR",
            StoreError::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}
