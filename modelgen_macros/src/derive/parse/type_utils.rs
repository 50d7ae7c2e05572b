//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise the wrapper types a field kind looks through and to render a
//! declared type the way it was written.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Wrappers removed before a field's kind is inferred.
const WRAPPERS: [&str; 4] = ["Option", "Box", "Rc", "Arc"];

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    angle_args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the outermost path's final
/// segment, so `std::option::Option<T>` and `Option<T>` both match. The
/// function is not recursive.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Removes one layer of `Option`, `Box`, `Rc`, `Arc`, reference or
/// parentheses, returning `ty` unchanged when it is not wrapped.
///
/// `Option<Option<i64>>` yields `Option<i64>`.
pub(crate) fn unwrap_single_layer(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => &reference.elem,
        Type::Paren(paren) => &paren.elem,
        Type::Group(group) => &group.elem,
        _ => WRAPPERS
            .iter()
            .find_map(|wrapper| type_inner(ty, wrapper))
            .unwrap_or(ty),
    }
}

/// Final path segment identifier and its type arguments.
pub(crate) fn last_segment(ty: &Type) -> Option<(String, Vec<&Type>)> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    let args = match &last.arguments {
        PathArguments::AngleBracketed(angle) => angle
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(inner) => Some(inner),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Some((last.ident.to_string(), args))
}

/// Renders `ty` as source text without the spacing `quote` inserts between
/// punctuation.
///
/// `Option < Vec < i64 > >` becomes `Option<Vec<i64>>`, while spaces that
/// separate words (`&'a str`, `dyn Any`) are kept.
pub(crate) fn display_type(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (index, ch) in chars.iter().enumerate() {
        if *ch != ' ' {
            out.push(*ch);
            if *ch == ',' {
                out.push(' ');
            }
            continue;
        }
        let prev = out.chars().last();
        let next = chars.get(index + 1).copied();
        if prev.is_some_and(is_word) && next.is_some_and(is_word) {
            out.push(' ');
        }
    }
    out
}

fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\''
}
