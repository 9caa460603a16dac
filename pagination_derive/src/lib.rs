//! Procedural macro for declaring where pagination values live on a parameter type
//!
//! This crate provides the `Pageable` derive. It records, at compile time, the
//! serialized paths of the fields carrying page, size, offset, rows and count
//! column values, plus the bounds declared with `#[pagination(...)]`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod generation;
mod parsing;

use generation::generate_pageable_impl;
use parsing::{parse_field_attributes, parse_struct_attributes};

/// Derive macro for the `Pageable` trait
///
/// Usage:
/// ```ignore
/// use pagehaus::prelude::*;
///
/// #[derive(Serialize, Pageable)]
/// #[serde(rename_all = "camelCase")]
/// #[pagination(default_size = 20, max_size = 100, count_column = "id")]
/// pub struct UserQuery {
///     #[page]
///     pub page: Option<i64>,
///
///     #[size]
///     pub page_size: Option<i64>,
///
///     #[count_column]
///     pub count_by: Option<String>,
///
///     pub keyword: Option<String>,
/// }
/// ```
///
/// Field paths follow the field's serialized name, so `page_size` above is read
/// from `pageSize`. A struct needs `#[page]` and `#[size]`, or `#[offset]` and
/// `#[rows]`; both pairs may be declared.
#[proc_macro_derive(Pageable, attributes(pagination, page, size, offset, rows, count_column))]
pub fn derive_pageable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let info = match parse_struct_attributes(&input.attrs) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match parse_field_attributes(&input.data, &info) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_pageable_impl(name, &input.generics, &info, &fields))
}
