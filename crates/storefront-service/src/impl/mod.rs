//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `crud_service.rs`).

pub mod crud_service_impl;

pub use crud_service_impl::CrudServiceImpl;
