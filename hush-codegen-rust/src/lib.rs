//! Rust emitter for hush.
//!
//! Builders for Rust items that accept warning suppressions from a
//! [`WarningTracker`](hush_codegen::WarningTracker) as `#[allow(...)]`
//! attributes, with categories translated through a [`LintMap`].

mod error;
mod items;
mod lints;

pub mod ast;
pub mod rust_file;

pub use ast::{Allow, Attributed, Deprecated, Field, Fn, Impl, Param, Struct};
pub use error::{Error, Result, SourceContext};
pub use items::{Item, ItemIndex, TypePath, Walk};
pub use lints::{LintMap, LintTarget};
pub use rust_file::RustFile;
