//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function  →  Result<T, ApiError>                               │
//! │         │                                                               │
//! │         ├── DbError          ──► DATABASE_ERROR (details logged)        │
//! │         ├── ValidationError  ──► VALIDATION_ERROR                       │
//! │         ├── CoreError        ──► CART_ERROR / VALIDATION_ERROR /        │
//! │         │                        INVALID_ACTION                         │
//! │         └── ConfigError      ──► CONFIG_ERROR                           │
//! │                                                                         │
//! │  The front-end receives { "code": "...", "message": "..." }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never produce errors; everything here comes from validation,
//! decoding, configuration or the database.

use serde::Serialize;

use crate::config::ConfigError;
use aurum_core::{CoreError, ValidationError};
use aurum_db::DbError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Cart item not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Action JSON could not be decoded
    InvalidAction,

    /// Database operation failed
    DatabaseError,

    /// Cart limit reached
    CartError,

    /// Bad environment configuration
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CartTooLarge { .. } => ApiError::cart(err.to_string()),
            CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::InvalidAction(e) => {
                ApiError::new(ErrorCode::InvalidAction, format!("Invalid action: {}", e))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Response serialization failures are our bug, not the caller's.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Serialization failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::not_found("Cart item", "42")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Cart item not found: 42");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::CartTooLarge { max: 50 });
        assert_eq!(err.code, ErrorCode::CartError);

        let err = ApiError::from(CoreError::QuantityTooLarge {
            requested: 120,
            max: 99,
        });
        assert_eq!(err.code, ErrorCode::ValidationError);

        let decode = serde_json::from_str::<aurum_core::Action>("{}").unwrap_err();
        let err = ApiError::from(CoreError::from(decode));
        assert_eq!(err.code, ErrorCode::InvalidAction);
    }

    #[test]
    fn test_db_error_hides_details() {
        let err = ApiError::from(DbError::QueryFailed("no such table: cart_items".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("quantity is required");
        assert_eq!(err.to_string(), "[ValidationError] quantity is required");
    }
}
