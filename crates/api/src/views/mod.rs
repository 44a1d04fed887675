//! Server-side HTML rendering.
//!
//! Views build plain view models from store rows, then render them to
//! strings. Every interpolated value goes through [`html::escape`].

pub mod html;
pub mod layout;
pub mod product_listing;
