//! Light Cache - A minimal in-memory key-value cache server
//!
//! Stores short string values by key behind a single `/cache` HTTP endpoint.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::CacheStore;
pub use config::Config;
