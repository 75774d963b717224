//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::MAX_VALUE_SIZE;

// == Cache Error Enum ==
/// Every way a cache request can be turned away.
///
/// None of these reach the store: they are raised and answered inside the
/// request handler.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Write body is not a decodable cache item
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Value is larger than `MAX_VALUE_SIZE`
    #[error("Value too long: {0} bytes exceeds {max}", max = MAX_VALUE_SIZE)]
    ValueTooLong(usize),

    /// Request method other than GET or POST
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            CacheError::MalformedBody(_) => StatusCode::BAD_REQUEST.into_response(),
            CacheError::ValueTooLong(_) => {
                (StatusCode::BAD_REQUEST, "Value too long").into_response()
            }
            CacheError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
