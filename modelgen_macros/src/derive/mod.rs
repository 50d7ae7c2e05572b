//! Expansion of `#[derive(Model)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod kind;
mod parse;

/// Parses `input` and produces the `Model` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let model = parse::parse_input(input)?;
    Ok(generate::model_impl(&model))
}
