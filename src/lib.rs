//! # PageHaus
//!
//! Dialect-aware SQL pagination: rewrites a statement so that only one page of
//! rows is fetched, and assembles page metadata (total, total pages, next,
//! previous) around the returned rows.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagehaus::prelude::*;
//!
//! #[derive(Serialize, Pageable)]
//! #[pagination(default_size = 20, max_size = 100)]
//! pub struct UserQuery {
//!     pub name: Option<String>,
//!     #[page]
//!     pub page: Option<i64>,
//!     #[size]
//!     pub size: Option<i64>,
//! }
//!
//! fn main() -> Result<(), PageHausError> {
//!     let pagehaus = PageHaus::builder(AppConfig::default())
//!         .pageable::<UserQuery>("users.by_name")
//!         .build()?;
//!
//!     let statement = Statement::new("users.by_name", "SELECT * FROM users WHERE name = ?")
//!         .bind("ada");
//!     let query = UserQuery { name: Some("ada".into()), page: Some(2), size: Some(10) };
//!
//!     let prepared = pagehaus.prepare(&statement, "informix", &query)?;
//!     assert_eq!(prepared.params, vec![json!(10), json!(10), json!("ada")]);
//!
//!     let page = prepared.fetch_page::<_, PageHausError, _, _>(
//!         |_count_sql, _params| Ok(25),
//!         |_sql, _params| Ok(vec!["row 11", "row 12"]),
//!     )?;
//!     assert_eq!(page.total_pages(), Some(3));
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod execution;
pub mod prelude;
pub mod statement;

// Re-export the main public types for convenience
pub use crate::core::{PageHaus, PageHausBuilder};
pub use errors::PageHausError;
pub use statement::{CountQuery, PreparedPage, Statement};

// Re-export centralized config
pub use config::{AppConfig, DialectConfig, PaginationConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated derive code to work correctly
pub use dialect_system;
pub use page_object;
pub use pagination_derive;

// Re-export external dependencies used in public API
pub use serde_json;
