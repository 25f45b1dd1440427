//! Rust AST builders for functions, impls, and structs.
//!
//! Every builder is a [`SuppressionTarget`](hush_codegen::SuppressionTarget):
//! a suppression directive becomes an `#[allow(...)]` attribute.

mod attrs;
mod fns;
mod impls;
mod structs;

pub use attrs::{Allow, Deprecated};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

/// Items that carry outer attributes.
pub trait Attributed {
    /// Append an attribute, given without the `#[...]` wrapper.
    fn push_attr(&mut self, attr: String);
}
