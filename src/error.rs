//! Error types for the cache
//!
//! Cache operations themselves never fail; errors only arise while loading
//! options.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// An option value could not be parsed
    #[error("Invalid value for {name}: {value:?}")]
    InvalidOption { name: String, value: String },

    /// An options document could not be deserialized
    #[error("Malformed cache options: {0}")]
    MalformedOptions(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
