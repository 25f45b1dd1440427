//! Integration tests that compile generated units with `rustc -D warnings`.
//!
//! A unit that references deprecated items must only compile when the
//! tracker's suppression was attached.

mod common;

use hush_codegen::testing::{
    CompileChecker, RustcChecker, assert_generates_valid_code, generate_to_temp,
    print_generated_files,
};
use hush_codegen::{Deprecation, WarningTracker};
use hush_codegen_rust::{Fn, RustFile};

fn write_unit(file: RustFile) -> impl FnOnce(&std::path::Path) -> eyre::Result<()> {
    move |dir| {
        file.write_to(dir.join("lib.rs"))?;
        Ok(())
    }
}

/// Generate `file` and assert the compiler rejects it with a deprecation error.
fn assert_rejected_for_deprecation(file: RustFile) {
    let dir = generate_to_temp(write_unit(file)).expect("Failed to generate code");
    match RustcChecker.check(dir.path()) {
        Ok(()) => {
            print_generated_files(dir.path());
            panic!("unsuppressed deprecated usage compiled under -D warnings");
        }
        Err(err) => assert!(
            err.output.contains("deprecated"),
            "unexpected failure: {}",
            err
        ),
    }
}

#[test]
fn test_unit_without_warnings_compiles() {
    let file = common::unit(|file| {
        file.add(
            Fn::new("apply")
                .body_line("let _bean = String::from(\"Hello\");")
                .suppress_warnings(&WarningTracker::new()),
        )
    });
    assert!(!file.render().contains("#[allow"));

    assert_generates_valid_code(write_unit(file), &RustcChecker).unwrap();
}

#[test]
fn test_suppressed_function_compiles() {
    let file = common::unit(|file| file.add(common::apply_fn(true)));
    assert_generates_valid_code(write_unit(file), &RustcChecker).unwrap();
}

#[test]
fn test_unsuppressed_function_is_rejected() {
    assert_rejected_for_deprecation(common::unit(|file| file.add(common::apply_fn(false))));
}

#[test]
fn test_suppressed_struct_and_impl_compile() {
    let (holder, constructor) = common::holder(true);
    let file = common::unit(|file| file.add(holder).add(constructor));
    assert_generates_valid_code(write_unit(file), &RustcChecker).unwrap();
}

#[test]
fn test_unsuppressed_struct_is_rejected() {
    let (holder, constructor) = common::holder(false);
    assert_rejected_for_deprecation(common::unit(|file| file.add(holder).add(constructor)));
}

#[test]
fn test_java_style_categories_compile() {
    let mut warnings = WarningTracker::new();
    warnings
        .register("static-access")
        .register("cast")
        .detect_deprecation(&Deprecation::Deprecated);

    let apply = Fn::new("apply")
        .body_line("let _bean = DeprecatedBean {};")
        .suppress_warnings(&warnings);
    assert_eq!(apply.attrs(), ["allow(deprecated)"]);

    let file = common::unit(|file| file.add(apply));
    assert_generates_valid_code(write_unit(file), &RustcChecker).unwrap();
}

#[test]
fn test_java_only_categories_attach_nothing() {
    let mut warnings = WarningTracker::new();
    warnings.register("static-access").register("cast");

    let apply = Fn::new("apply").suppress_warnings(&warnings);
    assert!(apply.attrs().is_empty());

    let file = common::unit(|file| file.add(apply));
    assert_generates_valid_code(write_unit(file), &RustcChecker).unwrap();
}
