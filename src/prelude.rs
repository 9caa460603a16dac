//! Convenience re-exports for common PageHaus usage
//!
//! This prelude module re-exports the most commonly used items from the PageHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use pagehaus::prelude::*;
//!
//! // Now you have access to all the common PageHaus types and traits
//! ```

// Core PageHaus components
pub use crate::core::{PageHaus, PageHausBuilder};
pub use crate::errors::PageHausError;
pub use crate::statement::{CountQuery, PreparedPage, Statement};

// Re-export centralized config
pub use config::{AppConfig, DialectConfig, PaginationConfig};

// Re-export commonly used page-object types for convenience
pub use page_object::prelude::*;

// Re-export page_object module for derive-generated code
pub use page_object;

// Re-export dialects
pub use dialect_system::prelude::*;

// Re-export the derive for parameter types
pub use pagination_derive::Pageable;
