//! # Storefront Service
//!
//! Application layer for Storefront: DTOs, entity/DTO mappers, business
//! rules and the generic CRUD services that tie them to a repository.

pub mod crud_service;
pub mod dto;
pub mod mappers;
pub mod r#impl;
pub mod rules;
pub mod services;

pub use crud_service::*;
pub use dto::*;
pub use mappers::*;
pub use r#impl::CrudServiceImpl;
pub use rules::*;
pub use services::*;
