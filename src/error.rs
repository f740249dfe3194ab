//! Application error type and its HTTP representation.
//!
//! Every error is rendered as:
//!
//! ```json
//! { "error": { "kind": "invalid_input", "message": "int1 must be different than 0" } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::ValidationError;

/// Numeric query parameters that can fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseField {
    Int1,
    Int2,
    Limit,
}

impl ParseField {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseField::Int1 => "int1",
            ParseField::Int2 => "int2",
            ParseField::Limit => "limit",
        }
    }

    fn kind(self) -> &'static str {
        match self {
            ParseField::Int1 => "failed_to_parse_int1",
            ParseField::Int2 => "failed_to_parse_int2",
            ParseField::Limit => "failed_to_parse_limit",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable kind plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A numeric query parameter is missing or not an integer.
    #[error("failed to parse {}", .field.as_str())]
    Parse { field: ParseField },

    /// Well-typed input that violates an invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn parse(field: ParseField) -> Self {
        Self::Parse { field }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Parse { field } => field.kind(),
            AppError::Validation(_) => "invalid_input",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Parse { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Driver details stay in the logs; clients only see a generic message.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}
