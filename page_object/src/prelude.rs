//! Convenience re-exports for common page-object usage

// Core traits
pub use crate::traits::{Pageable, PaginationContainer};

// Error types
pub use crate::errors::PaginationError;

// Parameters and descriptors
pub use crate::descriptor::PaginationDescriptor;
pub use crate::param::PaginationParam;
pub use crate::resolver::DescriptorResolver;
pub use crate::shape::PaginationShape;

// Result envelopes
pub use crate::container::{PageMetadata, Paginated};
pub use crate::page::Page;

// Common external dependencies that are frequently used
pub use serde::Serialize;
pub use serde_json::{json, Value};
