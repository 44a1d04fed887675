//! Catalog row structs and the listing aggregate.
//!
//! Row structs derive `FromRow` + `Serialize` and match their tables column
//! for column. This crate never writes catalog rows, so there are no create
//! or update DTOs.

pub mod category;
pub mod product;
