//! Dialect system for engine-specific SQL pagination
//!
//! This crate provides the `Dialect` strategy trait, one implementation per
//! family of native pagination syntax, and the `DialectRegistry` that maps
//! engine ids to dialects.

pub mod dialect;
pub mod dialects;
pub mod errors;
pub mod prelude;
pub mod registry;

pub use dialect::{Dialect, PaginatedSql};
pub use dialects::{Db2, Informix, LimitOffset, MySql, OffsetFetch, Oracle, SqlServer};
pub use errors::DialectError;
pub use registry::{engine_id_from_url, DialectRegistry, DialectRegistryBuilder};
