//! Convenience re-exports for common dialect-system usage

// Core dialect components
pub use crate::dialect::{Dialect, PaginatedSql};
pub use crate::errors::DialectError;
pub use crate::registry::{DialectRegistry, DialectRegistryBuilder};

// Built-in dialects
pub use crate::dialects::*;
