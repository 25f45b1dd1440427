//! Mapping from warning categories to rustc lints.
//!
//! Categories registered on a [`WarningTracker`](hush_codegen::WarningTracker)
//! are language neutral (`deprecation`, `removal`, ...). Rust has its own lint
//! names, so before an `#[allow(...)]` is attached each category is looked up
//! here:
//!
//! - mapped categories expand to their lints (possibly none);
//! - unmapped categories are used verbatim as lint names, or dropped when
//!   they are not valid Rust lint names.
//!
//! The default table can be extended from TOML:
//!
//! ```toml
//! [lints]
//! unused = ["unused_variables", "unused_imports"]
//! rawtypes = []
//! ```

use std::{path::Path, sync::LazyLock};

use hush_codegen::{Suppression, SuppressionTarget, warnings};
use indexmap::{IndexMap, IndexSet};
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    ast::{Allow, Attributed},
    error::{Error, Result, SourceContext},
};

/// `javac -Xlint` categories that have no rustc equivalent.
const DROPPED: &[&str] = &[
    "cast",
    "divzero",
    "empty",
    "fallthrough",
    "finally",
    "overrides",
    "rawtypes",
    "serial",
    "static",
    "try",
    "unchecked",
    "varargs",
];

/// Words that cannot appear as a lint name inside `#[allow(...)]`.
const KEYWORDS: &[&str] = &[
    "_", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

static RUSTC: LazyLock<LintMap> = LazyLock::new(LintMap::new);

/// Category to rustc lint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintMap {
    lints: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LintFile {
    #[serde(default)]
    lints: IndexMap<String, Vec<Spanned<String>>>,
}

impl LintMap {
    /// The default table: both deprecation categories map to `deprecated`,
    /// Java-only categories are dropped.
    pub fn new() -> Self {
        let mut map = Self::empty();
        map.insert(warnings::DEPRECATION, ["deprecated"])
            .insert(warnings::REMOVAL, ["deprecated"]);
        for category in DROPPED {
            map.insert(*category, Vec::<String>::new());
        }
        map
    }

    /// A table without entries: every category is used verbatim.
    pub fn empty() -> Self {
        Self {
            lints: IndexMap::new(),
        }
    }

    /// The shared default table.
    pub fn rustc() -> &'static LintMap {
        &RUSTC
    }

    /// Map `category` to `lints`, replacing any previous entry.
    ///
    /// An empty `lints` drops the category from generated attributes.
    pub fn insert<I, S>(&mut self, category: impl Into<String>, lints: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lints.insert(
            category.into(),
            lints.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Lints for a category, in table order.
    ///
    /// An unmapped category is used verbatim if it is a valid lint name
    /// (`static-access` is not) and yields nothing otherwise.
    pub fn lints_for<'a>(&'a self, category: &'a str) -> Vec<&'a str> {
        match self.lints.get(category) {
            Some(lints) => lints.iter().map(String::as_str).collect(),
            None if is_lint_name(category) => vec![category],
            None => Vec::new(),
        }
    }

    /// The `#[allow(...)]` attribute covering a suppression payload.
    ///
    /// Lints are deduplicated in category order. Returns `None` if every
    /// category was dropped.
    pub fn allow_for(&self, suppression: &Suppression) -> Option<Allow> {
        let mut lints = IndexSet::new();
        for category in suppression.categories() {
            let mapped = self.lints_for(category);
            if mapped.is_empty() {
                tracing::debug!(%category, "no rustc lint for warning category, dropping");
            }
            lints.extend(mapped);
        }
        Allow::from_lints(lints)
    }

    /// Attach the `#[allow(...)]` for `suppression` to `item`, if any.
    pub fn attach<T: Attributed + ?Sized>(&self, suppression: &Suppression, item: &mut T) {
        match self.allow_for(suppression) {
            Some(allow) => item.push_attr(allow.to_string()),
            None => tracing::debug!(%suppression, "suppression maps to no lints, skipping"),
        }
    }

    /// Wrap `item` so suppressions attached to it go through this table.
    ///
    /// ```
    /// use hush_codegen::WarningTracker;
    /// use hush_codegen_rust::{Fn, LintMap};
    ///
    /// let mut lints = LintMap::new();
    /// lints.insert("unused", ["unused_variables"]);
    ///
    /// let mut warnings = WarningTracker::new();
    /// warnings.register("unused");
    ///
    /// let mut apply = Fn::new("apply");
    /// warnings.suppress(&mut lints.target(&mut apply));
    /// assert!(apply.build().starts_with("#[allow(unused_variables)]"));
    /// ```
    pub fn target<'a, T: Attributed + ?Sized>(&'a self, item: &'a mut T) -> LintTarget<'a, T> {
        LintTarget { lints: self, item }
    }

    /// Parse a table from TOML and merge it over the defaults.
    pub fn from_toml(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let file: LintFile = toml::from_str(src).map_err(|e| ctx.parse_error(e))?;

        let mut map = Self::new();
        for (category, lints) in file.lints {
            if category.trim().is_empty() {
                return Err(ctx.validation_error("warning category must not be empty"));
            }
            let mut names = Vec::with_capacity(lints.len());
            for lint in lints {
                let span = lint.span();
                let lint = lint.into_inner();
                if !is_lint_name(&lint) {
                    return Err(ctx.invalid_lint_error(
                        category,
                        lint,
                        Some(SourceSpan::from(span)),
                    ));
                }
                names.push(lint);
            }
            map.insert(category, names);
        }
        Ok(map)
    }

    /// Read and parse a table from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&src, &path.display().to_string())
    }
}

impl Default for LintMap {
    fn default() -> Self {
        Self::new()
    }
}

/// An item whose suppressions are mapped through a custom [`LintMap`].
pub struct LintTarget<'a, T: ?Sized> {
    lints: &'a LintMap,
    item: &'a mut T,
}

impl<T: Attributed + ?Sized> SuppressionTarget for LintTarget<'_, T> {
    fn add_suppression(&mut self, suppression: Suppression) {
        self.lints.attach(&suppression, &mut *self.item);
    }
}

/// `ident` or `tool::ident`.
fn is_lint_name(name: &str) -> bool {
    let mut segments = name.split("::");
    let valid = segments.by_ref().take(2).all(is_ident);
    valid && segments.next().is_none()
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !KEYWORDS.contains(&s) && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppression(categories: &[&str]) -> Suppression {
        Suppression::from_categories(categories.iter().copied()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let map = LintMap::new();
        assert_eq!(map.lints_for("deprecation"), ["deprecated"]);
        assert_eq!(map.lints_for("removal"), ["deprecated"]);
        assert!(map.lints_for("rawtypes").is_empty());
        assert!(map.lints_for("cast").is_empty());
        assert_eq!(map.lints_for("unused_mut"), ["unused_mut"]);
    }

    #[test]
    fn test_allow_dedups_in_order() {
        let allow = LintMap::new()
            .allow_for(&suppression(&["removal", "dead_code", "deprecation"]))
            .unwrap();
        assert_eq!(allow.to_string(), "allow(deprecated, dead_code)");
    }

    #[test]
    fn test_allow_all_dropped() {
        let map = LintMap::new();
        assert_eq!(map.allow_for(&suppression(&["rawtypes", "unchecked"])), None);
    }

    #[test]
    fn test_empty_map_passes_through() {
        let allow = LintMap::empty()
            .allow_for(&suppression(&["deprecation"]))
            .unwrap();
        assert_eq!(allow.to_string(), "allow(deprecation)");
    }

    #[test]
    fn test_from_toml_merges_over_defaults() {
        let map = LintMap::from_toml(
            r#"
            [lints]
            unused = ["unused_variables", "unused_imports"]
            removal = ["deprecated", "clippy::disallowed_types"]
            "#,
            "hush.toml",
        )
        .unwrap();

        assert_eq!(map.lints_for("unused"), ["unused_variables", "unused_imports"]);
        assert_eq!(
            map.lints_for("removal"),
            ["deprecated", "clippy::disallowed_types"]
        );
        assert_eq!(map.lints_for("deprecation"), ["deprecated"]);
    }

    #[test]
    fn test_from_toml_without_table() {
        let map = LintMap::from_toml("", "hush.toml").unwrap();
        assert_eq!(map, LintMap::new());
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = LintMap::from_toml("[lints\n", "hush.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_toml_rejects_unknown_section() {
        let err = LintMap::from_toml("[other]\nx = 1\n", "hush.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_toml_invalid_lint() {
        let src = "[lints]\ndeprecation = [\"not a lint\"]\n";
        let err = LintMap::from_toml(src, "hush.toml").unwrap_err();
        match *err {
            Error::InvalidLint {
                ref category,
                ref lint,
                span,
                ..
            } => {
                assert_eq!(category, "deprecation");
                assert_eq!(lint, "not a lint");
                let span = span.unwrap();
                assert!(src[span.offset()..span.offset() + span.len()].contains("not a lint"));
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LintMap::from_file(dir.path().join("hush.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hush.toml");
        std::fs::write(&path, "[lints]\nserial = [\"dead_code\"]\n").unwrap();

        let map = LintMap::from_file(&path).unwrap();
        assert_eq!(map.lints_for("serial"), ["dead_code"]);
    }

    #[test]
    fn test_lint_names() {
        assert!(is_lint_name("deprecated"));
        assert!(is_lint_name("clippy::all"));
        assert!(is_lint_name("_private"));
        assert!(!is_lint_name(""));
        assert!(!is_lint_name("_"));
        assert!(!is_lint_name("a::b::c"));
        assert!(!is_lint_name("clippy::"));
        assert!(!is_lint_name("1st"));
        assert!(!is_lint_name("not-a-lint"));
        assert!(!is_lint_name("static"));
        assert!(!is_lint_name("clippy::type"));
    }

    #[test]
    fn test_invalid_passthrough_dropped() {
        let map = LintMap::new();
        assert!(map.lints_for("static-access").is_empty());
        assert!(map.lints_for("static").is_empty());
        assert_eq!(map.lints_for("unused_variables"), ["unused_variables"]);

        let allow = map
            .allow_for(&suppression(&["static-access", "unused_variables", "deprecation"]))
            .unwrap();
        assert_eq!(allow.to_string(), "allow(unused_variables, deprecated)");

        assert_eq!(map.allow_for(&suppression(&["static-access", "fall-through"])), None);
    }
}
