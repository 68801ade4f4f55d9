//! Error types for font fetching.

use std::{io, path::PathBuf, result};

/// Errors that can occur while fetching a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("stylesheet for '{font}' contains no font url")]
    NoAssetUrl { font: String },

    #[error("fonts '{first}' and '{second}' would share the cache file {}", path.display())]
    CacheCollision { first: String, second: String, path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
