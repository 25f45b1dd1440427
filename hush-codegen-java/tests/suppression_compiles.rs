//! Integration tests that compile generated units with
//! `javac -Xlint:all -Werror`.
//!
//! Skipped when `javac` is not installed.

mod common;

use std::path::Path;

use hush_codegen::testing::{
    CompileChecker, JavacChecker, assert_generates_valid_code, generate_to_temp,
    print_generated_files, tool_available,
};
use hush_codegen_java::JavaFile;

fn javac_available() -> bool {
    let available = tool_available("javac");
    if !available {
        eprintln!("javac not found, skipping");
    }
    available
}

fn write_unit(file: JavaFile) -> impl FnOnce(&Path) -> eyre::Result<()> {
    move |dir| {
        for fixture in common::fixtures() {
            fixture.write_to(dir)?;
        }
        file.write_to(dir)?;
        Ok(())
    }
}

fn assert_rejected_for_deprecation(file: JavaFile) {
    let dir = generate_to_temp(write_unit(file)).expect("Failed to generate code");
    match JavacChecker.check(dir.path()) {
        Ok(()) => {
            print_generated_files(dir.path());
            panic!("unsuppressed deprecated usage compiled under -Werror");
        }
        Err(err) => assert!(err.output.contains("deprecat"), "unexpected failure: {}", err),
    }
}

#[test]
fn test_suppressed_method_compiles() {
    if !javac_available() {
        return;
    }
    assert_generates_valid_code(write_unit(common::factory(true)), &JavacChecker).unwrap();
}

#[test]
fn test_unsuppressed_method_is_rejected() {
    if !javac_available() {
        return;
    }
    assert_rejected_for_deprecation(common::factory(false));
}

#[test]
fn test_suppressed_class_compiles() {
    if !javac_available() {
        return;
    }
    assert_generates_valid_code(write_unit(common::holder(true)), &JavacChecker).unwrap();
}

#[test]
fn test_unsuppressed_class_is_rejected() {
    if !javac_available() {
        return;
    }
    assert_rejected_for_deprecation(common::holder(false));
}
