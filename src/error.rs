//! Error types for twoslashify

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for twoslashify
#[derive(Debug, Error)]
pub enum TwoslashError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TwoslashError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TwoslashError::NotFound(_) => 2,
            TwoslashError::Config(_) | TwoslashError::TomlDeserialize(_) => 3,
            TwoslashError::Io(_) => 1,
        }
    }
}

/// Result type using TwoslashError
pub type Result<T> = std::result::Result<T, TwoslashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TwoslashError::NotFound(PathBuf::from("a.mdx")).exit_code(), 2);
        assert_eq!(TwoslashError::Config("bad".to_string()).exit_code(), 3);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(TwoslashError::Io(io).exit_code(), 1);
    }

    #[test]
    fn test_messages_surface_underlying_error() {
        let err = TwoslashError::NotFound(PathBuf::from("/tmp/missing.mdx"));
        assert_eq!(err.to_string(), "File not found: /tmp/missing.mdx");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(TwoslashError::Io(io).to_string(), "IO error: disk full");
    }
}
