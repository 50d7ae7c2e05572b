//! Token generation for the `Model` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_quote;

use super::crate_path;
use super::kind::Kind;
use super::parse::{FieldAttrs, ModelInput, SerdeRenameAll, display_type};

/// Builds `impl Model for <ident>` with one builder call per kept field.
pub(crate) fn model_impl(model: &ModelInput) -> TokenStream {
    let krate = crate_path::runtime_path(model.struct_attrs.crate_path.as_ref());
    let ident = &model.ident;
    let type_name = model
        .struct_attrs
        .rename
        .clone()
        .unwrap_or_else(|| ident.unraw().to_string());
    let rename_all = model.struct_attrs.serde_rename_all;

    let kept: Vec<(&syn::Field, &FieldAttrs)> = model
        .fields
        .iter()
        .zip(&model.field_attrs)
        .filter(|(_, attrs)| !attrs.skip)
        .collect();

    let mut generics = model.generics.clone();
    let flattened: Vec<&syn::Type> = kept
        .iter()
        .filter(|(_, attrs)| attrs.is_flatten())
        .map(|(field, _)| &field.ty)
        .collect();
    if !flattened.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in flattened {
            where_clause
                .predicates
                .push(parse_quote! { #ty: #krate::Model });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let entries = kept
        .iter()
        .map(|(field, attrs)| entry_tokens(field, attrs, &krate, rename_all));

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Model for #ident #ty_generics #where_clause {
            fn describe() -> #krate::Schema {
                #krate::Schema::Record(
                    #krate::RecordSchema::new(#type_name)
                        #( #entries )*
                )
            }
        }
    }
}

fn entry_tokens(
    field: &syn::Field,
    attrs: &FieldAttrs,
    krate: &TokenStream,
    rename_all: Option<SerdeRenameAll>,
) -> TokenStream {
    let name = field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string())
        .unwrap_or_default();
    let ty = &field.ty;
    if attrs.is_flatten() {
        return quote! { .flatten(#name, <#ty as #krate::Model>::describe()) };
    }

    let type_name = display_type(ty);
    let kind = attrs.kind.unwrap_or_else(|| Kind::infer(ty)).tokens(krate);
    let annotations = annotation_tokens(&name, attrs, krate, rename_all);
    quote! {
        .field(#krate::FieldSchema::new(#name, #type_name, #kind).annotations(#annotations))
    }
}

fn annotation_tokens(
    name: &str,
    attrs: &FieldAttrs,
    krate: &TokenStream,
    rename_all: Option<SerdeRenameAll>,
) -> TokenStream {
    let mut tokens = quote! { #krate::FieldAnnotations::new() };
    let text = [
        ("external_name", attrs.resolve_external_name(name, rename_all)),
        ("label", attrs.label.clone()),
        ("remark", attrs.remark.clone()),
        ("validate", attrs.validate.clone()),
        ("persist", attrs.persist.clone()),
    ];
    for (setter, value) in text {
        if let Some(text_value) = value {
            let method = syn::Ident::new(setter, proc_macro2::Span::call_site());
            tokens.extend(quote! { .#method(#text_value) });
        }
    }
    if attrs.required {
        tokens.extend(quote! { .required(true) });
    }
    tokens
}
