//! Listing error types.

use thiserror::Error;

/// Errors that can occur while loading listing configuration or catalog data.
///
/// Filtering, sorting, formatting, and wishlist operations are infallible;
/// only the loaders return this type.
#[derive(Error, Debug)]
pub enum ListingError {
    /// Config or catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML config could not be parsed.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config or catalog could not be parsed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;
