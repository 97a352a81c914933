//! Unified error types for all layers of the application.

use crate::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Failures of an entity/DTO conversion.
///
/// A conversion either produces a complete result or one of these errors;
/// nothing is ever partially applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A required relation is absent on the entity being projected.
    #[error("{entity} has no {relation}, which is required")]
    MissingRequiredRelation {
        entity: EntityKind,
        relation: &'static str,
    },

    /// A relation is present but was never persisted, so it has no identifier.
    #[error("{entity}.{relation} references an entity that has not been persisted")]
    UnpersistedReference {
        entity: EntityKind,
        relation: &'static str,
    },

    /// A relation identifier could not be resolved to an entity.
    #[error("{kind} with id {id} could not be resolved")]
    UnresolvedReference { kind: EntityKind, id: EntityId },
}

/// Unified error type for all layers of Storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., identifier mismatch)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Entity/DTO conversion failure
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    // ============ Infrastructure Errors ============
    /// Persistence error
    #[error("Repository error: {0}")]
    Repository(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StorefrontError {
    /// Returns the HTTP status code a transport layer should use for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BusinessRule(_) => 400,
            Self::Conflict(_) => 409,
            Self::Mapping(MappingError::UnresolvedReference { .. }) => 404,
            Self::Mapping(_) => 422,
            Self::Repository(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Mapping(MappingError::MissingRequiredRelation { .. }) => "MISSING_REQUIRED_RELATION",
            Self::Mapping(MappingError::UnpersistedReference { .. }) => "UNPERSISTED_REFERENCE",
            Self::Mapping(MappingError::UnresolvedReference { .. }) => "UNRESOLVED_REFERENCE",
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a business rule violation.
    #[must_use]
    pub fn business_rule<T: Into<String>>(message: T) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the mapping error, if this is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&MappingError> {
        match self {
            Self::Mapping(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for a transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `StorefrontError`.
    #[must_use]
    pub fn from_error(error: &StorefrontError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&StorefrontError> for ErrorResponse {
    fn from(error: &StorefrontError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(StorefrontError::not_found("Product", 1).status_code(), 404);
        assert_eq!(StorefrontError::validation("blank name").status_code(), 400);
        assert_eq!(StorefrontError::business_rule("out of stock").status_code(), 400);
        assert_eq!(StorefrontError::conflict("id mismatch").status_code(), 409);
        assert_eq!(StorefrontError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_mapping_error_status_codes() {
        let missing: StorefrontError = MappingError::MissingRequiredRelation {
            entity: EntityKind::Purchase,
            relation: "customer",
        }
        .into();
        assert_eq!(missing.status_code(), 422);
        assert_eq!(missing.error_code(), "MISSING_REQUIRED_RELATION");

        let unresolved: StorefrontError = MappingError::UnresolvedReference {
            kind: EntityKind::Product,
            id: EntityId(9),
        }
        .into();
        assert_eq!(unresolved.status_code(), 404);
        assert_eq!(unresolved.error_code(), "UNRESOLVED_REFERENCE");
    }

    #[test]
    fn test_mapping_error_messages() {
        let err = MappingError::MissingRequiredRelation {
            entity: EntityKind::Purchase,
            relation: "customer",
        };
        assert_eq!(err.to_string(), "Purchase has no customer, which is required");

        let err = MappingError::UnresolvedReference {
            kind: EntityKind::City,
            id: EntityId(3),
        };
        assert_eq!(err.to_string(), "City with id 3 could not be resolved");
    }

    #[test]
    fn test_as_mapping() {
        let err: StorefrontError = MappingError::UnpersistedReference {
            entity: EntityKind::Customer,
            relation: "city",
        }
        .into();
        assert!(err.as_mapping().is_some());
        assert!(StorefrontError::validation("x").as_mapping().is_none());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = StorefrontError::not_found("City", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = StorefrontError::validation("bad input");
        let details = vec![FieldError {
            field: "name".to_string(),
            message: "must not be blank".to_string(),
            code: "not_blank".to_string(),
        }];
        let response = ErrorResponse::from(&err).with_details(details);
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
