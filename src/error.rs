//! Marketplace error types
//!
//! One error enum for the whole request path. Services return it,
//! repositories produce its `Storage` variant, and handlers hand it
//! straight to axum through `IntoResponse`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::{ApiResponse, error_codes};

#[derive(Error, Debug)]
pub enum MarketError {
    // === Missing records ===
    #[error("Consumer not found with ID: {0}")]
    ConsumerNotFound(i64),

    #[error("Dataset not found with ID: {0}")]
    DatasetNotFound(i64),

    #[error("Payment not found with ID: {0}")]
    PaymentNotFound(i64),

    // === Caller errors ===
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown user status: {0}")]
    UnknownStatus(String),

    // === System errors ===
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;

impl MarketError {
    /// Numeric code carried in the response envelope
    pub fn code(&self) -> i32 {
        match self {
            MarketError::ConsumerNotFound(_) => error_codes::CONSUMER_NOT_FOUND,
            MarketError::DatasetNotFound(_) => error_codes::DATASET_NOT_FOUND,
            MarketError::PaymentNotFound(_) => error_codes::PAYMENT_NOT_FOUND,
            MarketError::InvalidCredentials => error_codes::AUTH_FAILED,
            MarketError::UnknownRole(_) => error_codes::UNKNOWN_ROLE,
            MarketError::UnknownStatus(_) => error_codes::UNKNOWN_STATUS,
            MarketError::PasswordHash(_) | MarketError::Storage(_) => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarketError::ConsumerNotFound(_) => "CONSUMER_NOT_FOUND",
            MarketError::DatasetNotFound(_) => "DATASET_NOT_FOUND",
            MarketError::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            MarketError::InvalidCredentials => "INVALID_CREDENTIALS",
            MarketError::UnknownRole(_) => "UNKNOWN_ROLE",
            MarketError::UnknownStatus(_) => "UNKNOWN_STATUS",
            MarketError::PasswordHash(_) => "PASSWORD_HASH",
            MarketError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            MarketError::ConsumerNotFound(_)
            | MarketError::DatasetNotFound(_)
            | MarketError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
            MarketError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            MarketError::UnknownRole(_) | MarketError::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            MarketError::PasswordHash(_) | MarketError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn is_internal(&self) -> bool {
        matches!(self, MarketError::PasswordHash(_) | MarketError::Storage(_))
    }
}

impl From<sqlx::Error> for MarketError {
    fn from(e: sqlx::Error) -> Self {
        MarketError::Storage(e.to_string())
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        // Internal details stay in the log
        let msg = if self.is_internal() {
            tracing::error!(error = %self, kind = self.name(), "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (
            self.http_status(),
            Json(ApiResponse::<()>::error(self.code(), msg)),
        )
            .into_response()
    }
}
