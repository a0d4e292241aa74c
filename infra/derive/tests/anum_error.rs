#[test]
fn anum_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/anum_error_pass.rs");
    t.pass("tests/ui/anum_error_unit_variant.rs");
}
