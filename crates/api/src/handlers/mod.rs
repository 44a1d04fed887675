//! Request handlers.
//!
//! Handlers delegate to the injected [`CatalogStore`](retrokit_db::CatalogStore)
//! and map failures via [`AppError`](crate::error::AppError) (JSON) or
//! [`PageError`](crate::error::PageError) (HTML).

pub mod category;
pub mod product;
