//! trybuild coverage for `#[derive(Model)]`.
//!
//! Passing cases exercise crate-path aliasing and generic flattening;
//! failing cases pin the diagnostics for unsupported inputs.

#[test]
fn derive_model_trybuild() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/crate_path_alias.rs");
    t.pass("tests/pass/generic_flatten.rs");
    t.compile_fail("tests/ui/*.rs");
}
