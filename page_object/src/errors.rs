//! Error types for pagination parameter handling
//!
//! This module defines the errors raised while resolving pagination
//! descriptors and extracting page parameters from parameter objects.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    /// The statement's parameter shape carries no usable page/size or offset/rows pair
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A pagination value cannot be used, e.g. non-positive rows where division is required
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaginationError {
    pub fn configuration(statement_id: &str, reason: &str) -> Self {
        Self::ConfigurationError(format!("statement '{}': {}", statement_id, reason))
    }

    pub fn invalid_parameter(field: &str, reason: &str) -> Self {
        Self::InvalidParameter(format!("{}: {}", field, reason))
    }
}
