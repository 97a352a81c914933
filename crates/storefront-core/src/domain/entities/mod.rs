//! Domain entities.
//!
//! Fields are private: every read and write goes through an accessor, so
//! fields that must not change after creation simply have no setter.

mod city;
mod customer;
mod district;
mod product;
mod purchase;

pub use city::*;
pub use customer::*;
pub use district::*;
pub use product::*;
pub use purchase::*;
