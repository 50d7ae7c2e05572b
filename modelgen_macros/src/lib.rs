//! Procedural macros for `modelgen`.
//!
//! `#[derive(Model)]` implements `modelgen::Model` for structs with named
//! fields. The generated `describe` builds a record schema listing each
//! field in declaration order with its declared type, inferred kind and
//! annotations taken from `#[model(...)]` and `#[serde(...)]` attributes.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `modelgen::Model`.
///
/// Container attributes: `crate = "path"`, `rename = "Name"`.
///
/// Field attributes: `label`, `required`, `remark`, `validate`, `persist`,
/// `external_name`, `kind`, `flatten` and `skip`. `#[serde(rename)]`,
/// `#[serde(rename_all)]`, `#[serde(skip)]` and `#[serde(flatten)]` are read
/// as well.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
