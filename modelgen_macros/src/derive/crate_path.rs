//! Where generated `Model` impls find the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens naming the runtime crate inside generated code.
///
/// Code that depends on the runtime under another name sets
/// `#[model(crate = "alias")]`; everything else gets `::modelgen`.
pub(crate) fn runtime_path(alias: Option<&syn::Path>) -> TokenStream {
    alias.map_or_else(|| quote! { ::modelgen }, |path| quote! { #path })
}
