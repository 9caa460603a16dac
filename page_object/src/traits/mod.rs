//! Trait definitions
//!
//! This module contains the traits parameter types and result containers
//! implement to take part in pagination.

pub mod container;
pub mod pageable;

// Re-export all public items for convenience
pub use container::PaginationContainer;
pub use pageable::Pageable;
