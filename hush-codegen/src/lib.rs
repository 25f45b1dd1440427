//! Warning tracking and suppression for generated code.
//!
//! This crate provides the language-agnostic pieces used by the language
//! emitters (e.g., `hush-codegen-rust`, `hush-codegen-java`).
//!
//! # Module Organization
//!
//! - [`warnings`] - Per-unit warning tracking (WarningTracker, DeprecationInfo, Suppression)
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`testing`] - Compile-check test utilities (feature-gated)

pub mod builder;
pub mod warnings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use warnings::{Deprecation, DeprecationInfo, Suppression, SuppressionTarget, WarningTracker};
