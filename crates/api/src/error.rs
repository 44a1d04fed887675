use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use retrokit_db::StoreError;
use serde_json::json;

use crate::views::layout;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for catalog failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses;
/// HTML routes wrap it in [`PageError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A catalog store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, stable error code, and caller-facing message.
    ///
    /// Store failures are logged here, so every presentation (JSON or HTML)
    /// reports them exactly once.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Store(err) => {
                tracing::error!(error = %err, kind = err.code(), "Catalog store query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Error returned by handlers that render HTML pages.
///
/// Same classification (and logging) as [`AppError`], presented as an error
/// page. The underlying message stays in the logs.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] pub AppError);

impl From<StoreError> for PageError {
    fn from(err: StoreError) -> Self {
        PageError(AppError::Store(err))
    }
}

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _, _) = self.0.classify();
        (status, Html(layout::render_error_page(status))).into_response()
    }
}
