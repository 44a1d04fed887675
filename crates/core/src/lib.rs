//! Domain rules for the retro jersey storefront.
//!
//! Everything here is pure: no I/O, no database types. The `db` crate owns
//! rows and queries; the `api` crate turns rows into pages using the helpers
//! in this crate.

pub mod pricing;
pub mod sizes;
pub mod stock;
pub mod types;
