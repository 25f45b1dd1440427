//! Per-unit warning tracking.

use std::fmt;

use indexmap::IndexSet;

use super::{Deprecation, DeprecationInfo, Suppression, SuppressionTarget};

/// Warning categories accumulated while generating one code unit.
///
/// Categories are kept in first-registration order and never duplicated.
/// Create one tracker per generated unit and drop it once the unit has been
/// emitted; sharing a tracker between units merges their warning sets.
///
/// # Example
///
/// ```
/// use hush_codegen::warnings::{Deprecation, Suppression, SuppressionTarget, WarningTracker};
///
/// #[derive(Default)]
/// struct Method(Vec<String>);
///
/// impl SuppressionTarget for Method {
///     fn add_suppression(&mut self, suppression: Suppression) {
///         self.0.push(format!("@SuppressWarnings({})", suppression));
///     }
/// }
///
/// let mut warnings = WarningTracker::new();
/// warnings
///     .detect_deprecation(&Deprecation::Deprecated)
///     .detect_deprecation(&Deprecation::ForRemoval)
///     .register("deprecation");
///
/// assert_eq!(warnings.to_string(), "WarningTracker[deprecation, removal]");
///
/// let mut method = Method::default();
/// warnings.suppress(&mut method);
/// assert_eq!(method.0, ["@SuppressWarnings({ \"deprecation\", \"removal\" })"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningTracker {
    categories: IndexSet<String>,
}

impl WarningTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a warning category.
    ///
    /// Registering a category that is already present is a no-op and keeps
    /// its original position.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or only whitespace.
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        assert!(
            !name.trim().is_empty(),
            "warning category must not be empty"
        );
        let (index, inserted) = self.categories.insert_full(name);
        if inserted {
            tracing::debug!(category = %self.categories[index], "registered warning category");
        }
        self
    }

    /// Register the category raised by using `element`, if it is deprecated.
    ///
    /// An element deprecated for removal registers `removal` only; an
    /// ordinarily deprecated one registers `deprecation`. Only the element
    /// itself is inspected: callers that need to look through members,
    /// generic arguments or referenced types call this once per element.
    pub fn detect_deprecation<E>(&mut self, element: &E) -> &mut Self
    where
        E: DeprecationInfo + ?Sized,
    {
        let status = element.deprecation();
        if let Some(category) = status.category() {
            tracing::debug!(?status, "detected deprecated element");
            self.register(category);
        }
        self
    }

    /// Run [`detect_deprecation`](Self::detect_deprecation) on every element.
    pub fn detect_deprecations<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: DeprecationInfo,
    {
        for element in elements {
            self.detect_deprecation(&element);
        }
        self
    }

    /// Attach one suppression directive listing every category to `target`.
    ///
    /// Leaves `target` untouched when no category has been registered. Call
    /// this once per generated item, after all registrations for it are
    /// done; every call attaches another directive.
    pub fn suppress<T>(&self, target: &mut T)
    where
        T: SuppressionTarget + ?Sized,
    {
        match self.to_suppression() {
            Some(suppression) => {
                tracing::debug!(%suppression, "attaching suppression directive");
                target.add_suppression(suppression);
            }
            None => tracing::debug!("no warnings registered, skipping suppression"),
        }
    }

    /// The suppression payload for the current categories, if any.
    pub fn to_suppression(&self) -> Option<Suppression> {
        Suppression::from_categories(self.categories.iter().cloned())
    }

    /// The registered categories, in registration order.
    pub fn categories(&self) -> &IndexSet<String> {
        &self.categories
    }

    /// Whether `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no category has been registered.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl fmt::Display for WarningTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WarningTracker[")?;
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(category)?;
        }
        f.write_str("]")
    }
}

impl Extend<Deprecation> for WarningTracker {
    fn extend<I: IntoIterator<Item = Deprecation>>(&mut self, iter: I) {
        self.detect_deprecations(iter);
    }
}
