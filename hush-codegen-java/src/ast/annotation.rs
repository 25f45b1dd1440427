//! Java annotation builder.

use std::fmt;

use hush_codegen::Suppression;

/// A Java annotation such as `@Deprecated` or `@SuppressWarnings("unchecked")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    value: Option<String>,
}

impl Annotation {
    /// An annotation without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Set the raw argument list, rendered between the parentheses.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// `@Deprecated`
    pub fn deprecated() -> Self {
        Self::new("Deprecated")
    }

    /// `@Deprecated(forRemoval = true)`
    pub fn deprecated_for_removal() -> Self {
        Self::new("Deprecated").value("forRemoval = true")
    }

    /// `@SuppressWarnings(...)` for a tracker payload.
    pub fn suppress_warnings(suppression: &Suppression) -> Self {
        Self::new("SuppressWarnings").value(suppression.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "@{}({})", self.name, value),
            None => write!(f, "@{}", self.name),
        }
    }
}
