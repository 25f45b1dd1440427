//! Typed lint attributes for generated items.
//!
//! Instead of passing raw strings like `"allow(deprecated)"`, use typed
//! attributes that are rendered to the appropriate syntax.

use std::fmt;

/// `#[allow(...)]` listing one or more rustc lints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allow {
    lints: Vec<String>,
}

impl Allow {
    /// Create an allow attribute for a single lint.
    pub fn new(lint: impl Into<String>) -> Self {
        Self {
            lints: vec![lint.into()],
        }
    }

    /// Create an allow attribute from lints in order.
    ///
    /// Returns `None` when `lints` is empty, since `#[allow()]` is itself
    /// flagged by rustc.
    pub fn from_lints<I, S>(lints: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lints: Vec<String> = lints.into_iter().map(Into::into).collect();
        (!lints.is_empty()).then_some(Self { lints })
    }
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allow({})", self.lints.join(", "))
    }
}

impl From<Allow> for String {
    fn from(attr: Allow) -> Self {
        attr.to_string()
    }
}

/// `#[deprecated]` with optional `since` and `note`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deprecated {
    since: Option<String>,
    note: Option<String>,
}

impl Deprecated {
    /// Create a bare `#[deprecated]` attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version the item was deprecated in.
    pub fn since(mut self, version: impl Into<String>) -> Self {
        self.since = Some(version.into());
        self
    }

    /// Set the deprecation note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for Deprecated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref since) = self.since {
            parts.push(format!("since = {:?}", since));
        }
        if let Some(ref note) = self.note {
            parts.push(format!("note = {:?}", note));
        }

        if parts.is_empty() {
            write!(f, "deprecated")
        } else {
            write!(f, "deprecated({})", parts.join(", "))
        }
    }
}

impl From<Deprecated> for String {
    fn from(attr: Deprecated) -> Self {
        attr.to_string()
    }
}
