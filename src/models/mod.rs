//! Request models for the cache server API
//!
//! Defines the wire shapes decoded from HTTP request bodies.

pub mod requests;

pub use requests::CacheItem;
