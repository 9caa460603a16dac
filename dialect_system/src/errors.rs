//! Error types for dialect resolution
//!
//! This module defines the errors raised while registering
//! and resolving engine-specific dialects.

use thiserror::Error;

/// Dialect system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Unrecognized connection URL: {0}")]
    UnrecognizedUrl(String),
}
