//! Error types for the parsed-dump library.

use std::path::PathBuf;

/// Top-level error enum for the parsed-dump library.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bincode::Error> for DumpError {
    fn from(err: bincode::Error) -> DumpError {
        DumpError::Deserialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for DumpError {
    fn from(err: serde_yaml::Error) -> DumpError {
        DumpError::Serialization(err.to_string())
    }
}

impl DumpError {
    /// Process exit status reported by the command-line entry point.
    pub fn exit_code(&self) -> u8 {
        match self {
            DumpError::NotFound(_)
            | DumpError::Deserialization(_)
            | DumpError::Serialization(_)
            | DumpError::Usage(_)
            | DumpError::Io(_) => 1,
        }
    }
}

pub type DumpResult<T> = Result<T, DumpError>;
