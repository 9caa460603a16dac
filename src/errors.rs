//! Error types for the PageHaus crate
//!
//! This module contains all error types that can be returned by PageHaus operations.
//! Errors from the member crates are flattened so callers match on one taxonomy.

use dialect_system::DialectError;
use page_object::PaginationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageHausError {
    /// No dialect is registered for the engine id and no fallback is configured
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A statement lacks a usable pagination parameter carrier, or setup is incomplete
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Non-positive size or rows where a division is required
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unrecognized connection URL: {0}")]
    UnrecognizedUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<PaginationError> for PageHausError {
    fn from(error: PaginationError) -> Self {
        match error {
            PaginationError::ConfigurationError(msg) => Self::ConfigurationError(msg),
            PaginationError::InvalidParameter(msg) => Self::InvalidParameter(msg),
            PaginationError::Serialization(e) => Self::Serialization(e),
        }
    }
}

impl From<DialectError> for PageHausError {
    fn from(error: DialectError) -> Self {
        match error {
            DialectError::UnsupportedDialect(id) => Self::UnsupportedDialect(id),
            DialectError::UnrecognizedUrl(url) => Self::UnrecognizedUrl(url),
        }
    }
}
