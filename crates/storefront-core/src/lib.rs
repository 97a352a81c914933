//! # Storefront Core
//!
//! Core types, traits, and error definitions for Storefront.
//! This crate provides the identity model, the domain entities of the
//! purchase-tracking domain and the mapping/resolution seams used by the
//! repository and service layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
