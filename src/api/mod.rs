//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `GET /cache?key=<key>` - Retrieve a value by key
//! - `POST /cache` - Store a `{"key", "value"}` pair

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
