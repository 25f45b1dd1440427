//! Snapshot tests for generated units carrying warning suppressions.

mod common;

use hush_codegen::WarningTracker;
use hush_codegen_rust::{Fn, LintMap, TypePath};

#[test]
fn test_apply_suppressed() {
    let code = common::unit(|file| file.add(common::apply_fn(true))).render();
    insta::assert_snapshot!("apply_suppressed", code);
}

#[test]
fn test_holder_suppressed() {
    let (holder, constructor) = common::holder(true);
    let code = common::unit(|file| file.add(holder).add(constructor)).render();
    insta::assert_snapshot!("holder_suppressed", code);
}

#[test]
fn test_apply_with_custom_lints() {
    let lints = LintMap::from_toml(
        "[lints]\ndeprecation = [\"deprecated\", \"unused_variables\"]\n",
        "hush.toml",
    )
    .unwrap();

    let mut warnings = WarningTracker::new();
    for ty in ["DeprecatedBean", "DeprecatedForRemovalBean"] {
        common::index().detect_in(&TypePath::new(ty), &mut warnings);
    }

    let mut apply = Fn::new("apply")
        .body_line("let bean = DeprecatedBean {};")
        .body_line("let another = DeprecatedForRemovalBean {};");
    warnings.suppress(&mut lints.target(&mut apply));

    insta::assert_snapshot!("apply_custom_lints", apply.build());
}
