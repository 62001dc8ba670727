//! Error types for the cache layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("key not found: {key}")]
    NotFound { key: String },

    #[error("nil reply for key: {key}")]
    Nil { key: String },

    #[error("redis command failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("connection pool: {0}")]
    Pool(#[from] r2d2::Error),
}
