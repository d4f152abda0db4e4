use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StitchpackError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Truncated input: {field} needs {needed} bytes but only {available} remain")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("Unsupported pattern: {0}")]
    UnsupportedPattern(String),

    #[error("Container too large: {field} length {len} does not fit in 32 bits")]
    Oversized { field: &'static str, len: usize },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StitchpackError>;
