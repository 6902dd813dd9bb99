//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Rollcall
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with Rollcall's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use rollcall_core::errors::RollcallError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `RollcallError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub RollcallError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body. Both
/// missing-record variants map to 404 so callers can tell "record absent"
/// apart from a storage failure.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            RollcallError::NotFound(_) => StatusCode::NOT_FOUND,
            RollcallError::EntryNotFound(_) => StatusCode::NOT_FOUND,
            RollcallError::Validation(_) => StatusCode::BAD_REQUEST,
            RollcallError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RollcallError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from RollcallError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, RollcallError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<RollcallError> for AppError {
    fn from(err: RollcallError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `RollcallError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RollcallError::Database(err))
    }
}

/// Maps a RollcallError to an HTTP response
pub fn map_error(err: RollcallError) -> Response {
    AppError(err).into_response()
}
