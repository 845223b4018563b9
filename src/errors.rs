// src/errors.rs
//! Error types shared by the reader and the browse engine.

use std::io;

use thiserror::Error;

/// Failure of a single directory read.
///
/// Stored by the engine as `last_error`; never fatal to a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("I/O error: {0}")]
    Other(String),
}

impl ReadError {
    /// Map an I/O error raised while reading `path`.
    pub fn from_io(path: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.to_string()),
            io::ErrorKind::NotADirectory => ReadError::NotADirectory(path.to_string()),
            _ => ReadError::Other(format!("{}: {}", path, err)),
        }
    }
}

/// Contract violations surfaced by engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Session is closed")]
    SessionClosed,

    #[error("A directory read is already in flight")]
    Busy,
}

pub type EngineResult<T> = Result<T, BrowseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kinds_are_mapped() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(
            ReadError::from_io("/x", &denied),
            ReadError::PermissionDenied("/x".into())
        );

        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(ReadError::from_io("/x", &missing), ReadError::NotFound("/x".into()));

        let other = io::Error::other("disk on fire");
        assert!(matches!(ReadError::from_io("/x", &other), ReadError::Other(_)));
    }
}
