//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Region not found
    #[error("Region not found")]
    RegionNotFound,

    /// Walk not found
    #[error("Walk not found")]
    WalkNotFound,

    /// Walk difficulty not found
    #[error("Walk difficulty not found")]
    DifficultyNotFound,

    /// One or more request fields failed validation
    #[error("Validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// Region is still referenced by walks
    #[error("Region is referenced by existing walks")]
    RegionInUse,

    /// Difficulty is still referenced by walks
    #[error("Walk difficulty is referenced by existing walks")]
    DifficultyInUse,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Build a validation error from a single message
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation {
            errors: vec![message.into()],
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::RegionNotFound
            | CatalogError::WalkNotFound
            | CatalogError::DifficultyNotFound => StatusCode::NOT_FOUND,
            CatalogError::Validation { .. } => StatusCode::BAD_REQUEST,
            CatalogError::RegionInUse | CatalogError::DifficultyInUse => StatusCode::CONFLICT,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::RegionNotFound
            | CatalogError::WalkNotFound
            | CatalogError::DifficultyNotFound => ErrorKind::NotFound,
            CatalogError::Validation { .. } => ErrorKind::BadRequest,
            CatalogError::RegionInUse | CatalogError::DifficultyInUse => ErrorKind::Conflict,
            CatalogError::Database(_) | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::RegionInUse | CatalogError::DifficultyInUse => {
                tracing::warn!(error = %self, "Delete rejected, rows still referenced");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::RegionNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::WalkNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::DifficultyNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::validation("code: must not be blank").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::RegionInUse.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_joins_errors() {
        let err = CatalogError::Validation {
            errors: vec!["code: must not be blank".into(), "area: must be positive".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("code: must not be blank"));
        assert!(msg.contains("area: must be positive"));
    }

    #[test]
    fn test_kind_matches_status() {
        assert_eq!(CatalogError::RegionNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            CatalogError::validation("x").kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(CatalogError::DifficultyInUse.kind(), ErrorKind::Conflict);
    }
}
