//! Tests for type introspection helpers.

use super::super::*;
use rstest::rstest;
use syn::{Type, parse_quote};

#[rstest]
#[case(parse_quote!(Option<u32>), parse_quote!(u32))]
#[case(parse_quote!(std::option::Option<u32>), parse_quote!(u32))]
#[case(parse_quote!(Box<Timestamps>), parse_quote!(Timestamps))]
#[case(parse_quote!(std::sync::Arc<str>), parse_quote!(str))]
#[case(parse_quote!(Rc<bool>), parse_quote!(bool))]
#[case(parse_quote!(&'a Timestamps), parse_quote!(Timestamps))]
#[case(parse_quote!(Option<Option<i64>>), parse_quote!(Option<i64>))]
#[case(parse_quote!(Vec<u8>), parse_quote!(Vec<u8>))]
#[case(parse_quote!(i64), parse_quote!(i64))]
fn unwrap_single_layer_removes_one_wrapper(#[case] ty: Type, #[case] expected: Type) {
    assert_eq!(unwrap_single_layer(&ty), &expected);
}

#[rstest]
#[case(parse_quote!(i64), "i64")]
#[case(parse_quote!(Option<i64>), "Option<i64>")]
#[case(parse_quote!(chrono::DateTime<chrono::Utc>), "chrono::DateTime<chrono::Utc>")]
#[case(parse_quote!(&'static str), "&'static str")]
#[case(parse_quote!(BTreeMap<String, Vec<u8>>), "BTreeMap<String, Vec<u8>>")]
#[case(parse_quote!((i64, bool)), "(i64, bool)")]
#[case(parse_quote!(Box<dyn Any>), "Box<dyn Any>")]
fn display_type_matches_source_spelling(#[case] ty: Type, #[case] expected: &str) {
    assert_eq!(display_type(&ty), expected);
}

#[rstest]
fn last_segment_reports_type_arguments() {
    let ty: Type = parse_quote!(std::borrow::Cow<'a, str>);
    let segment = last_segment(&ty);
    let expected: Type = parse_quote!(str);
    assert!(matches!(
        segment,
        Some((ref ident, ref args)) if ident == "Cow" && args.as_slice() == [&expected]
    ));
}
