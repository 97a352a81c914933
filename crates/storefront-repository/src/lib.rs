//! # Storefront Repository
//!
//! Repository implementations for Storefront.
//!
//! The mapping layer only needs a [`Resolver`](storefront_core::Resolver);
//! [`InMemoryStore`] provides one on top of a set of in-memory repositories.

mod memory;
mod queries;
mod store;

pub use memory::*;
pub use queries::*;
pub use store::*;

pub use storefront_core::Repository;
