//! API Handlers
//!
//! HTTP request handling for the `/cache` endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::CacheItem;

/// Application state shared across all handlers.
///
/// Holds the one cache store for the whole process; handlers reach it
/// through a cheap `Arc` clone.
#[derive(Clone, Default)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<CacheStore>,
}

impl AppState {
    /// Creates a new AppState around the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}

/// Handler for every method on /cache
///
/// GET reads, POST writes, anything else is answered with 405.
pub async fn cache_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response> {
    match method {
        Method::GET => {
            let value = get_value(&state, &lookup_key(&uri))?;
            Ok(value.into_response())
        }
        Method::POST => {
            set_value(&state, &body)?;
            Ok(StatusCode::OK.into_response())
        }
        other => {
            debug!("Rejected {} request", other);
            Err(CacheError::MethodNotAllowed(other))
        }
    }
}

/// Looks up `key` in the store.
pub fn get_value(state: &AppState, key: &str) -> Result<String> {
    match state.cache.get(key) {
        Some(value) => {
            debug!("Cache hit for key {:?}", key);
            Ok(value)
        }
        None => {
            let err = CacheError::NotFound(key.to_string());
            debug!("Cache miss: {}", err);
            Err(err)
        }
    }
}

/// Decodes, validates and stores a cache item from a raw request body.
///
/// Nothing is written unless the body decodes and the value fits.
pub fn set_value(state: &AppState, body: &[u8]) -> Result<()> {
    let item = CacheItem::from_json(body).inspect_err(|e| debug!("Rejected write: {}", e))?;
    item.validate()
        .inspect_err(|e| debug!("Rejected write for key {:?}: {}", item.key, e))?;

    debug!("Storing {} bytes under key {:?}", item.value.len(), item.key);
    state.cache.set(item.key, item.value);
    Ok(())
}

/// First `key` query parameter, or the empty string when absent.
fn lookup_key(uri: &Uri) -> String {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(params)| params.into_iter().find(|(name, _)| name == "key"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}
