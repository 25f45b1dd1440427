//! Java AST builders for annotations, methods, and classes.
//!
//! These provide a high-level API for constructing Java declarations,
//! which can then be rendered via CodeBuilder.

mod annotation;
mod class;
mod method;

pub use annotation::Annotation;
pub use class::{Class, Field};
pub use method::{Method, Param};
