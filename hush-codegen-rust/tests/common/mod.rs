//! Code unit shared by the snapshot and compile tests.

#![allow(dead_code)]

use hush_codegen::{Deprecation, WarningTracker};
use hush_codegen_rust::{
    Deprecated, Field, Fn, Impl, ItemIndex, RustFile, Struct, TypePath,
};

pub const HEADER: &str = "//! Generated code, do not edit.";

/// Metadata for the two fixture beans.
pub fn index() -> ItemIndex {
    let mut index = ItemIndex::new();
    index
        .insert("DeprecatedBean", Deprecation::Deprecated)
        .insert("DeprecatedForRemovalBean", Deprecation::ForRemoval);
    index
}

/// Fixture definitions followed by `items`.
pub fn unit(items: impl FnOnce(RustFile) -> RustFile) -> RustFile {
    let file = RustFile::new()
        .header(HEADER)
        .add(
            Struct::new("DeprecatedBean")
                .doc("A bean kept for compatibility.")
                .attr(Deprecated::new()),
        )
        .add(
            Struct::new("DeprecatedForRemovalBean")
                .doc("A bean scheduled for removal.")
                .attr(Deprecated::new().note("scheduled for removal")),
        );
    items(file)
}

/// A function instantiating both beans, suppressed when `suppress` is set.
pub fn apply_fn(suppress: bool) -> Fn {
    let index = index();
    let mut warnings = WarningTracker::new();
    for ty in ["DeprecatedBean", "DeprecatedForRemovalBean"] {
        index.detect_in(&TypePath::new(ty), &mut warnings);
    }
    assert_eq!(warnings.to_string(), "WarningTracker[deprecation, removal]");

    let apply = Fn::new("apply")
        .doc("Instantiate both beans.")
        .body_line("let _bean = DeprecatedBean {};")
        .body_line("let _another = DeprecatedForRemovalBean {};");

    if suppress {
        apply.suppress_warnings(&warnings)
    } else {
        apply
    }
}

/// A struct holding a generic over a deprecated bean, plus a constructor.
pub fn holder(suppress: bool) -> (Struct, Impl) {
    let ty = TypePath::new("Vec").arg(TypePath::new("DeprecatedForRemovalBean"));

    let mut warnings = WarningTracker::new();
    index().detect_in(&ty, &mut warnings);

    let holder = Struct::new("Holder").field(Field::new("beans", ty.to_string()));
    let constructor = Impl::new("Holder").method(
        Fn::new("new")
            .returns("Self")
            .body_line("Self { beans: vec![DeprecatedForRemovalBean {}] }"),
    );

    if suppress {
        (
            holder.suppress_warnings(&warnings),
            constructor.suppress_warnings(&warnings),
        )
    } else {
        (holder, constructor)
    }
}
