//! Input parsing for the `Model` derive macro.
//!
//! This module gathers the struct identifier, fields, and relevant attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Everything expansion needs from the user-provided struct.
pub(crate) struct ModelInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub fields: Vec<syn::Field>,
    pub struct_attrs: StructAttrs,
    pub field_attrs: Vec<FieldAttrs>,
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields are accepted; enums, unions, tuple and
/// unit structs are rejected here so the error points at the offending
/// declaration.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ModelInput> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Model requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Model can only be derived for structs",
            ));
        }
    };

    let field_attrs = fields
        .iter()
        .map(parse_field_attrs)
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(ModelInput {
        ident,
        generics: input.generics.clone(),
        fields,
        struct_attrs,
        field_attrs,
    })
}
