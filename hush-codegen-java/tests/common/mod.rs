//! Compilation units shared by the snapshot and compile tests.

#![allow(dead_code)]

use hush_codegen::WarningTracker;
use hush_codegen_java::{Annotation, Class, Field, JavaFile, JavaType, Method};

pub const HEADER: &str = "// Generated code, do not edit.";

pub fn deprecated_bean() -> JavaType {
    JavaType::new("legacy.DeprecatedBean").deprecated()
}

pub fn removal_bean() -> JavaType {
    JavaType::new("legacy.DeprecatedForRemovalBean").for_removal()
}

/// The two deprecated fixture classes.
pub fn fixtures() -> [JavaFile; 2] {
    [
        JavaFile::new(
            Class::new("DeprecatedBean")
                .doc("A bean kept for compatibility.")
                .annotation(Annotation::deprecated()),
        )
        .package("legacy"),
        JavaFile::new(
            Class::new("DeprecatedForRemovalBean")
                .doc("A bean scheduled for removal.")
                .annotation(Annotation::deprecated_for_removal()),
        )
        .package("legacy"),
    ]
}

/// A factory whose `apply` method instantiates both beans.
pub fn factory(suppress: bool) -> JavaFile {
    let beans = [deprecated_bean(), removal_bean()];

    let mut warnings = WarningTracker::new();
    warnings.detect_deprecations(&beans);
    assert_eq!(warnings.to_string(), "WarningTracker[deprecation, removal]");

    let mut apply = Method::new("apply").doc("Instantiate both beans.");
    for bean in &beans {
        apply = apply.body_line(format!("new {}();", bean.simple_name()));
    }
    if suppress {
        apply = apply.suppress_warnings(&warnings);
    }

    beans.iter().fold(
        JavaFile::new(Class::new("Factory").method(apply))
            .header(HEADER)
            .package("app"),
        |file, bean| file.import_type(bean),
    )
}

/// A holder whose field type mentions the removal bean as a generic argument.
pub fn holder(suppress: bool) -> JavaFile {
    let ty = JavaType::new("java.util.List").arg(removal_bean());

    let mut warnings = WarningTracker::new();
    warnings.detect_deprecations(ty.walk());

    let mut holder = Class::new("Holder").field(
        Field::new(ty.source_name(), "beans").init("new java.util.ArrayList<>()"),
    );
    if suppress {
        holder = holder.suppress_warnings(&warnings);
    }

    JavaFile::new(holder)
        .header(HEADER)
        .package("app")
        .import_type(&ty)
}
