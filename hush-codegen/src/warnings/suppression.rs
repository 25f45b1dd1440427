//! Suppression directive payloads and the targets that accept them.

use std::fmt;

/// The payload of a warning-suppression directive.
///
/// A single category is kept apart from a list so that emitters can render
/// the shortest form their target syntax allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    /// Exactly one category.
    Single(String),
    /// Two or more categories, in registration order.
    List(Vec<String>),
}

impl Suppression {
    /// Build a payload from categories in order.
    ///
    /// Returns `None` when there is nothing to suppress.
    pub fn from_categories<I, S>(categories: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        match categories.len() {
            0 => None,
            1 => categories.pop().map(Self::Single),
            _ => Some(Self::List(categories)),
        }
    }

    /// The suppressed categories, in order.
    pub fn categories(&self) -> &[String] {
        match self {
            Self::Single(category) => std::slice::from_ref(category),
            Self::List(categories) => categories,
        }
    }

    /// Whether this payload holds a single category.
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

/// Renders the payload as an annotation value literal:
/// `"deprecation"` or `{ "deprecation", "removal" }`.
impl fmt::Display for Suppression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(category) => write_literal(f, category),
            Self::List(categories) => {
                f.write_str("{ ")?;
                for (i, category) in categories.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_literal(f, category)?;
                }
                f.write_str(" }")
            }
        }
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// A generated item that can carry a warning-suppression directive.
///
/// Emitters implement this on their in-progress function, method, or type
/// builders. Each call appends one directive.
pub trait SuppressionTarget {
    /// Append a suppression directive for the given payload.
    fn add_suppression(&mut self, suppression: Suppression);
}

impl<T: SuppressionTarget + ?Sized> SuppressionTarget for &mut T {
    fn add_suppression(&mut self, suppression: Suppression) {
        (**self).add_suppression(suppression);
    }
}
