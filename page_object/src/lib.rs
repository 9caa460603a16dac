//! Page Object - Core pagination types for PageHaus
//!
//! This crate provides the pieces of pagination that do not depend on a SQL
//! engine: resolved page parameters, per-statement descriptors and their cache,
//! extraction and clamping of page values from parameter objects, and the
//! `Page` envelope assembled from a row list and its metadata.

pub mod container;
pub mod descriptor;
pub mod errors;
pub mod extractor;
pub mod page;
pub mod param;
pub mod prelude;
pub mod resolver;
pub mod shape;
pub mod traits;

pub use container::{PageMetadata, Paginated};
pub use descriptor::{FieldPath, PaginationDescriptor};
pub use errors::PaginationError;
pub use extractor::{extract, extract_from};
pub use page::Page;
pub use param::{PaginationParam, COUNT_ALL};
pub use resolver::{DescriptorResolver, DescriptorResolverBuilder};
pub use shape::PaginationShape;
pub use traits::*;

// Re-export centralized config
pub use config::PaginationConfig;
