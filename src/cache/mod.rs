//! Cache Module
//!
//! Provides the shared in-memory key-value store.

mod store;


// Re-export public types
pub use store::CacheStore;

// == Public Constants ==
/// Maximum accepted value size in bytes
pub const MAX_VALUE_SIZE: usize = 512;
