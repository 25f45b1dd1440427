//! Deprecation metadata for referenced Rust items.
//!
//! The tracker classifies one element at a time. Generated code usually
//! references types with generic arguments (`Vec<legacy::Bean>`), so callers
//! walk a [`TypePath`] and look each segment up in an [`ItemIndex`].

use std::fmt;

use hush_codegen::{Deprecation, DeprecationInfo, WarningTracker};
use indexmap::IndexMap;

/// A type path with generic arguments, e.g. `HashMap<String, legacy::Bean>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePath {
    path: String,
    args: Vec<TypePath>,
}

impl TypePath {
    /// Create a path without generic arguments.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    /// Add a generic argument.
    pub fn arg(mut self, arg: TypePath) -> Self {
        self.args.push(arg);
        self
    }

    /// The path without generic arguments.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Generic arguments.
    pub fn args(&self) -> &[TypePath] {
        &self.args
    }

    /// This path and every nested generic argument, outermost first.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Pre-order iterator over a [`TypePath`] and its generic arguments.
pub struct Walk<'a> {
    stack: Vec<&'a TypePath>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TypePath;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.args.iter().rev());
        Some(next)
    }
}

/// A known item and its deprecation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub path: &'a str,
    pub deprecation: Deprecation,
}

impl DeprecationInfo for Item<'_> {
    fn is_deprecated(&self) -> bool {
        self.deprecation.is_deprecated()
    }

    fn is_for_removal(&self) -> bool {
        self.deprecation.is_for_removal()
    }
}

/// Deprecation status of items the generator may reference, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: IndexMap<String, Deprecation>,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the status of an item.
    pub fn insert(&mut self, path: impl Into<String>, deprecation: Deprecation) -> &mut Self {
        self.items.insert(path.into(), deprecation);
        self
    }

    /// Look up an item by path.
    pub fn get(&self, path: &str) -> Option<Item<'_>> {
        self.items
            .get_key_value(path)
            .map(|(path, deprecation)| Item {
                path,
                deprecation: *deprecation,
            })
    }

    /// Register the deprecation of every known item mentioned in `ty`.
    ///
    /// Unknown segments (std types, generic parameters) are skipped.
    pub fn detect_in(&self, ty: &TypePath, warnings: &mut WarningTracker) {
        for segment in ty.walk() {
            match self.get(segment.path()) {
                Some(item) => {
                    warnings.detect_deprecation(&item);
                }
                None => tracing::trace!(path = segment.path(), "no metadata for type"),
            }
        }
    }
}
