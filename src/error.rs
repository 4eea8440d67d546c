//! Error handling module
//!
//! Provides unified error types and handling for the entire application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned to clients for every infrastructure failure
pub const SERVER_ERROR_MESSAGE: &str = "Falha ao buscar dados.";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Middleware error: {0}")]
    Middleware(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Config(_)
            | AppError::Middleware(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::InvalidParameter(_) => "invalid_parameter",
            AppError::NotFound(_) => "not_found",
            _ => "server_error",
        }
    }
}

/// Error details inside the envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Error response structure: `{ "error": { "code", "message" } }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::MissingParameter(msg)
            | AppError::InvalidParameter(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::Pool(e) => {
                error!("Pool error: {:?}", e);
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::Timeout => {
                error!("Request exceeded the configured timeout");
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::Middleware(msg) => {
                error!("Middleware error: {}", msg);
                SERVER_ERROR_MESSAGE.to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Helper function to create a missing parameter error naming the expected query
pub fn missing_parameter(usage: impl Into<String>) -> AppError {
    AppError::MissingParameter(usage.into())
}

/// Helper function to create a not found error
pub fn not_found_error(msg: impl Into<String>) -> AppError {
    AppError::NotFound(msg.into())
}
