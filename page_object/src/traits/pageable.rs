//! Pagination-carrying parameter types

use crate::shape::PaginationShape;

/// A parameter type that declares where its pagination values live.
///
/// This trait should be derived with `#[derive(Pageable)]`:
/// ```ignore
/// use pagehaus::prelude::*;
///
/// #[derive(Serialize, Pageable)]
/// #[pagination(default_size = 20, max_size = 100)]
/// pub struct UserQuery {
///     #[page]
///     pub page: Option<i64>,
///     #[size]
///     pub size: Option<i64>,
///     pub name: Option<String>,
/// }
/// ```
///
/// Manual implementation:
/// ```
/// use page_object::{Pageable, PaginationShape};
///
/// struct Window;
///
/// impl Pageable for Window {
///     fn pagination_shape() -> PaginationShape {
///         PaginationShape::new().offset("skip").rows("take")
///     }
/// }
/// ```
pub trait Pageable {
    fn pagination_shape() -> PaginationShape;
}
