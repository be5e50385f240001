use std::path::Path;

use thiserror::Error;

/// Top-level error type for espy startup and configuration handling.
#[derive(Error, Debug)]
pub enum EspyError {
    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document could not be parsed.
    #[error("{0}")]
    TomlParse(String),
}

/// Result alias used throughout the crate for top-level operations.
pub type Result<T> = std::result::Result<T, EspyError>;

impl EspyError {
    /// Wraps a TOML parse failure with the offending file path when known.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                EspyError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => EspyError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }
}
