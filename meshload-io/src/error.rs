//! Error types for mesh loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a mesh
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unsupported mesh format: {extension:?}, only OBJ is supported")]
    UnsupportedFormat { extension: Option<String> },

    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("decoded {count} mesh bodies, expected exactly one")]
    Ambiguous { count: usize },
}

/// Result type alias for mesh loading operations
pub type Result<T> = std::result::Result<T, LoadError>;
