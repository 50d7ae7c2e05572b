//! Parsing utilities for the `Model` derive macro.
//!
//! Container and field attributes are read from `#[model(...)]` and, for
//! naming, flattening and skipping, from `#[serde(...)]`. Unknown keys are
//! rejected inside `#[model(...)]` and ignored inside `#[serde(...)]`.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Token, parenthesized};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ModelInput, parse_input};
use literals::{lit_bool, lit_str, required_flag};
pub(crate) use serde_attrs::{SerdeFieldAttrs, SerdeRenameAll, serde_field_attrs, serde_rename_all};
pub(crate) use type_utils::{display_type, last_segment, unwrap_single_layer};

use super::kind::Kind;

/// Container-level attributes recognised by `#[derive(Model)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[model(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `::modelgen::`.
    pub crate_path: Option<syn::Path>,
    /// Type name reported instead of the struct identifier.
    pub rename: Option<String>,
    pub serde_rename_all: Option<SerdeRenameAll>,
}

/// Field-level attributes recognised by `#[derive(Model)]`.
///
/// - `label`, `remark`, `validate` and `persist` carry annotation text.
/// - `required` accepts the flag form, a boolean or the string `"true"`.
/// - `external_name` overrides any serde-derived name; `"-"` means none.
/// - `kind` replaces the kind inferred from the declared type.
/// - `flatten` promotes the member's own fields into the parent record.
/// - `skip` leaves the field out of the description entirely.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub label: Option<String>,
    pub required: bool,
    pub remark: Option<String>,
    pub validate: Option<String>,
    pub persist: Option<String>,
    pub external_name: Option<String>,
    pub kind: Option<Kind>,
    pub flatten: bool,
    pub skip: bool,
    pub serde: SerdeFieldAttrs,
}

/// Iterate all `#[model(...)]` attributes once and apply a callback.
fn parse_model<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("model")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Accepts both `key` and `key = <bool>`.
fn flag(meta: &ParseNestedMeta, key: &str) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        lit_bool(meta, key)
    } else {
        Ok(true)
    }
}

fn unknown_key(meta: &ParseNestedMeta, allowed: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown model attribute '{key}'; expected one of {allowed}"))
}

/// Extracts `#[model(...)]` and `#[serde(rename_all)]` metadata applied to
/// a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs {
        serde_rename_all: serde_rename_all(attrs)?,
        ..StructAttrs::default()
    };
    parse_model(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            Some("rename") => {
                out.rename = Some(lit_str(meta, "rename")?.value());
                Ok(())
            }
            _ => Err(unknown_key(meta, "`crate` or `rename`")),
        }
    })?;
    Ok(out)
}

/// Applies a recognised field attribute, returning `true` if handled.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Ok(false);
    };
    let key = ident.to_string();
    match key.as_str() {
        "label" => out.label = Some(lit_str(meta, "label")?.value()),
        "remark" => out.remark = Some(lit_str(meta, "remark")?.value()),
        "validate" => out.validate = Some(lit_str(meta, "validate")?.value()),
        "persist" => out.persist = Some(lit_str(meta, "persist")?.value()),
        "external_name" => out.external_name = Some(lit_str(meta, "external_name")?.value()),
        "required" => out.required = required_flag(meta)?,
        "kind" => {
            let s = lit_str(meta, "kind")?;
            out.kind = Some(Kind::parse(&s.value(), s.span())?);
        }
        "flatten" => out.flatten = flag(meta, "flatten")?,
        "skip" => out.skip = flag(meta, "skip")?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parses field-level `#[model(...)]` and `#[serde(...)]` attributes.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        serde: serde_field_attrs(&field.attrs)?,
        ..FieldAttrs::default()
    };
    parse_model(&field.attrs, |meta| {
        if apply_field_attr(meta, &mut out)? {
            Ok(())
        } else {
            Err(unknown_key(
                meta,
                "`label`, `required`, `remark`, `validate`, `persist`, `external_name`, \
                 `kind`, `flatten` or `skip`",
            ))
        }
    })?;
    if out.is_flatten() && out.kind.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`kind` has no effect on a flattened member",
        ));
    }
    Ok(out)
}

impl FieldAttrs {
    /// Whether the field's own fields are promoted into the parent.
    pub(crate) const fn is_flatten(&self) -> bool {
        self.flatten || self.serde.flatten
    }

    /// External name following `model(external_name)`, then serde skip,
    /// rename and container `rename_all`.
    pub(crate) fn resolve_external_name(
        &self,
        field_name: &str,
        rename_all: Option<SerdeRenameAll>,
    ) -> Option<String> {
        if let Some(explicit) = &self.external_name {
            return Some(explicit.clone());
        }
        if self.serde.skip {
            return Some(SKIP_MARKER.to_owned());
        }
        if let Some(rename) = &self.serde.rename {
            return Some(rename.clone());
        }
        rename_all.map(|rule| rule.apply(field_name))
    }
}

/// External-name marker for fields serde never serialises.
pub(crate) const SKIP_MARKER: &str = "-";
