//! Java emitter for hush.
//!
//! Builders for Java methods and classes that accept suppressions from a
//! [`WarningTracker`](hush_codegen::WarningTracker) as
//! `@SuppressWarnings(...)` annotations. Categories are emitted verbatim, so
//! a tracker holding `deprecation` and `removal` produces
//! `@SuppressWarnings({ "deprecation", "removal" })`.
//!
//! # Example
//!
//! ```
//! use hush_codegen::WarningTracker;
//! use hush_codegen_java::{JavaType, Method};
//!
//! let bean = JavaType::new("legacy.DeprecatedBean").deprecated();
//!
//! let mut warnings = WarningTracker::new();
//! warnings.detect_deprecation(&bean);
//!
//! let method = Method::new("apply")
//!     .body_line(format!("new {}();", bean.simple_name()))
//!     .suppress_warnings(&warnings);
//!
//! assert_eq!(
//!     method.build(),
//!     "@SuppressWarnings(\"deprecation\")\npublic void apply() {\n\tnew DeprecatedBean();\n}\n"
//! );
//! ```

mod java_file;
mod java_type;

pub mod ast;

pub use ast::{Annotation, Class, Field, Method, Param};
pub use java_file::JavaFile;
pub use java_type::{JavaType, Walk};
