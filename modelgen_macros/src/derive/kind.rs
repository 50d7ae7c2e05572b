//! Field kind inference from declared types.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Type;

use super::parse::{last_segment, unwrap_single_layer};

/// Mirrors `modelgen::FieldKind` inside the macro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Numeric,
    String,
    Boolean,
    Temporal,
    Other,
}

const NUMERIC: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "Decimal", "BigDecimal",
];

const STRING: &[&str] = &["String", "str", "char"];

const TEMPORAL: &[&str] = &[
    "DateTime",
    "NaiveDateTime",
    "NaiveDate",
    "NaiveTime",
    "OffsetDateTime",
    "PrimitiveDateTime",
    "UtcDateTime",
    "Date",
    "Time",
    "SystemTime",
    "Timestamp",
    "Zoned",
    "DeletedAt",
];

impl Kind {
    pub(crate) fn parse(value: &str, span: Span) -> syn::Result<Self> {
        match value {
            "numeric" => Ok(Self::Numeric),
            "string" => Ok(Self::String),
            "boolean" => Ok(Self::Boolean),
            "temporal" => Ok(Self::Temporal),
            "other" => Ok(Self::Other),
            _ => Err(syn::Error::new(
                span,
                format!(
                    "unknown kind '{value}'; expected one of \"numeric\", \"string\", \
                     \"boolean\", \"temporal\", or \"other\""
                ),
            )),
        }
    }

    /// Classifies `ty` after removing one wrapper layer.
    pub(crate) fn infer(ty: &Type) -> Self {
        Self::classify(unwrap_single_layer(ty))
    }

    fn classify(ty: &Type) -> Self {
        // `&str` is text in its own right; other references count as the
        // one wrapper layer already removed.
        if let Type::Reference(reference) = ty {
            return match last_segment(&reference.elem) {
                Some((ident, _)) if ident == "str" => Self::String,
                _ => Self::Other,
            };
        }
        let Some((ident, args)) = last_segment(ty) else {
            return Self::Other;
        };
        let name = ident.as_str();
        if NUMERIC.contains(&name) || name.starts_with("NonZero") {
            Self::Numeric
        } else if STRING.contains(&name) {
            Self::String
        } else if name == "Cow" {
            match args.last() {
                Some(inner) if Self::classify(inner) == Self::String => Self::String,
                _ => Self::Other,
            }
        } else if name == "bool" {
            Self::Boolean
        } else if TEMPORAL.contains(&name) {
            Self::Temporal
        } else {
            Self::Other
        }
    }

    /// Path to the matching `FieldKind` variant under `krate`.
    pub(crate) fn tokens(self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::Numeric => quote! { #krate::FieldKind::Numeric },
            Self::String => quote! { #krate::FieldKind::String },
            Self::Boolean => quote! { #krate::FieldKind::Boolean },
            Self::Temporal => quote! { #krate::FieldKind::Temporal },
            Self::Other => quote! { #krate::FieldKind::Other },
        }
    }
}
