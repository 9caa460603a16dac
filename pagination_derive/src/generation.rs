//! Code generation for the `Pageable` implementation
//!
//! Turns the parsed markers and bounds into a `pagination_shape()` body built
//! from `PaginationShape` builder calls.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident};

use crate::parsing::{FieldInfo, PaginationInfo};

pub fn generate_pageable_impl(
    name: &Ident,
    generics: &Generics,
    info: &PaginationInfo,
    fields: &FieldInfo,
) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let paths = [
        (quote!(page), &fields.page),
        (quote!(size), &fields.size),
        (quote!(offset), &fields.offset),
        (quote!(rows), &fields.rows),
        (quote!(count_column), &fields.count_column),
    ]
    .into_iter()
    .filter_map(|(method, path)| path.as_ref().map(|path| quote! { .#method(#path) }));

    let bounds = [
        (quote!(with_default_page), info.default_page),
        (quote!(with_default_size), info.default_size),
        (quote!(with_max_page), info.max_page),
        (quote!(with_max_size), info.max_size),
    ]
    .into_iter()
    .filter_map(|(method, value)| value.map(|value| quote! { .#method(#value) }));

    let count_column = info
        .count_column
        .as_ref()
        .map(|column| quote! { .with_default_count_column(#column) });

    quote! {
        impl #impl_generics page_object::Pageable for #name #ty_generics #where_clause {
            fn pagination_shape() -> page_object::PaginationShape {
                page_object::PaginationShape::new()
                    #(#paths)*
                    #(#bounds)*
                    #count_column
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_generated_shape_calls() {
        let name: Ident = parse_quote!(UserQuery);
        let generics: Generics = parse_quote!();
        let info = PaginationInfo {
            max_size: Some(100),
            count_column: Some("id".to_string()),
            ..Default::default()
        };
        let fields = FieldInfo {
            page: Some("page".to_string()),
            size: Some("pageSize".to_string()),
            ..Default::default()
        };

        let tokens = generate_pageable_impl(&name, &generics, &info, &fields).to_string();
        assert!(tokens.contains("impl page_object :: Pageable for UserQuery"));
        assert!(tokens.contains(". page (\"page\")"));
        assert!(tokens.contains(". size (\"pageSize\")"));
        assert!(tokens.contains(". with_max_size (100i64)"));
        assert!(tokens.contains(". with_default_count_column (\"id\")"));
        assert!(!tokens.contains("offset"));
    }
}
