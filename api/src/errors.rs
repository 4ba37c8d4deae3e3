//! Error types and utilities for the Hyrule catalog API
//!
//! This module provides:
//! - Server-level errors (ApiError enum) for infrastructure failures
//! - GraphQL error codes and message templates for API responses
//! - The catalog error taxonomy (CatalogError) surfaced through GraphQL extensions

use async_graphql::ErrorExtensions;
use hyrule_db_api::errors::DbError;
use thiserror::Error;
use validator::ValidationErrors;

// ============================================================================
// Server-Level Errors
// ============================================================================

/// API-related errors for server infrastructure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    BindError(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] hyrule_db::DbSqlError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("failed to validate config: {0}")]
    Validation(ValidationErrors),
}

// ============================================================================
// GraphQL Error Codes
// ============================================================================

/// Error codes placed under `extensions.code` of every GraphQL error
pub mod codes {
    /// Input rejected at the API boundary, the store was never called
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

    /// Referenced record does not exist
    pub const NOT_FOUND: &str = "NOT_FOUND";

    /// Store failure, details are only logged server side
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

// ============================================================================
// GraphQL Error Message Templates
// ============================================================================

pub mod messages {
    /// Invalid input fields message
    pub fn invalid_fields(fields: &[String]) -> String {
        format!("Invalid input: {} must not be blank", fields.join(", "))
    }

    /// Absent id message
    pub fn absent_id(argument: &str) -> String {
        format!("Invalid input: '{}' is required and must not be 0", argument)
    }

    /// Resource not found error message
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> String {
        format!("{} not found: {}", entity, id)
    }

    /// Opaque message returned for store failures
    pub fn internal_error() -> String {
        "Internal server error".to_string()
    }
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Error taxonomy of the catalog operations.
///
/// Resolvers convert it into an [`async_graphql::Error`] through
/// [`ErrorExtensions::extend`], which attaches the matching code from [`codes`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("{}", messages::not_found(.entity, .id))]
    NotFound { entity: &'static str, id: i32 },

    #[error("{}", messages::internal_error())]
    Internal,
}

impl CatalogError {
    /// Builds a validation error listing every offending field in a stable order.
    pub fn invalid_fields(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|f| f.to_string()).collect();
        fields.sort();

        Self::Validation {
            message: messages::invalid_fields(&fields),
            fields,
        }
    }

    pub fn absent_id(argument: &str) -> Self {
        Self::Validation {
            message: messages::absent_id(argument),
            fields: vec![argument.to_string()],
        }
    }

    /// Maps a store failure onto the taxonomy, logging what the client will not see.
    pub fn from_store(operation: &str, error: DbError) -> Self {
        match error {
            DbError::NotFound { entity, id } => Self::NotFound { entity, id },
            DbError::Backend(detail) => {
                tracing::error!(operation, %detail, "store operation failed");
                Self::Internal
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => codes::VALIDATION_ERROR,
            Self::NotFound { .. } => codes::NOT_FOUND,
            Self::Internal => codes::INTERNAL_ERROR,
        }
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code());
            match self {
                Self::Validation { fields, .. } => ext.set("fields", fields.clone()),
                Self::NotFound { entity, id } => {
                    ext.set("entity", *entity);
                    ext.set("id", *id);
                }
                Self::Internal => {}
            }
        })
    }
}
