// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for the fixed-width blocks of a WELT2000 record.
//!
//! A WELT2000 line is not one contiguous layout. The trailing position block
//! is anchored to the end of the line and the feature block floats inside the
//! name. Both are fixed-width once located, so each is modeled as a struct of
//! fields which this crate turns into a `Block` implementation plus a
//! `TryFrom<&[u8]>`.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Block)]
//! #[welt2000(length = 23)]
//! pub struct Tail<'a> {
//!     pub altitude: Altitude<'a>,
//!     pub latitude: Latitude<'a>,
//!     pub longitude: Longitude<'a>,
//!     pub country: Country<'a>,
//!     pub site_type: SiteType,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

fn int_literal(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int_lit),
            ..
        }) => int_lit.base10_parse::<usize>().ok(),
        _ => None,
    }
}

/// Reads the block length from `#[welt2000(length = n)]` on the struct.
fn parse_block_length(input: &DeriveInput) -> Option<usize> {
    input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("welt2000"))
        .filter_map(|attr| attr.parse_args::<Meta>().ok())
        .find_map(|meta| match meta {
            Meta::NameValue(nv) if nv.path.is_ident("length") => int_literal(&nv.value),
            _ => None,
        })
}

/// Derive macro for implementing the `Block` trait.
///
/// Generates both the `Block` trait implementation and a `TryFrom<&[u8]>`
/// implementation. The struct must carry `#[welt2000(length = n)]` with the
/// block's width in bytes.
#[proc_macro_derive(Block, attributes(welt2000))]
pub fn derive_block(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let block_name = name.to_string();
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let lifetime = &generics
        .lifetimes()
        .next()
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "Block types must have a lifetime parameter (e.g., 'a)",
            )
        })?
        .lifetime;

    let length = parse_block_length(input).ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "Block types need the attribute #[welt2000(length = n)]",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "Block derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                Span::call_site(),
                "Block derive only supports structs",
            ))
        }
    };

    // fields are read back to back in declaration order
    let field_parsers = fields.iter().filter_map(|field| {
        field.ident.as_ref().map(|field_name| {
            quote! {
                #field_name: fields.next()?
            }
        })
    });

    Ok(quote! {
        impl #impl_generics crate::block::Block<#lifetime> for #name #ty_generics #where_clause {
            const NAME: &'static str = #block_name;
            const LENGTH: usize = #length;

            fn parse(mut fields: crate::block::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::block::Block<#lifetime>>::from_bytes(bytes)
            }
        }
    })
}
