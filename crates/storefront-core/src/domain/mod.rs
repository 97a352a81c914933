//! # Storefront Domain
//!
//! Domain entities of the purchase-tracking application.

pub mod entities;

pub use entities::*;
