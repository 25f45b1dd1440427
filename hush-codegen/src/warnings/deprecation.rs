//! Deprecation metadata consumed by the warning tracker.

/// Something that can report whether it is deprecated.
///
/// Implement this for whatever your generator uses to describe referenced
/// program elements (a type table entry, a parsed declaration, a reflected
/// symbol). The tracker only ever reads these two facts.
pub trait DeprecationInfo {
    /// Whether the element is deprecated.
    fn is_deprecated(&self) -> bool;

    /// Whether the element is scheduled for removal.
    ///
    /// Only meaningful when [`is_deprecated`](Self::is_deprecated) is `true`.
    fn is_for_removal(&self) -> bool;

    /// Classify this element into a [`Deprecation`] status.
    fn deprecation(&self) -> Deprecation {
        match (self.is_deprecated(), self.is_for_removal()) {
            (true, true) => Deprecation::ForRemoval,
            (true, false) => Deprecation::Deprecated,
            (false, _) => Deprecation::None,
        }
    }
}

/// Deprecation status of a program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deprecation {
    /// Not deprecated.
    #[default]
    None,
    /// Deprecated, but not scheduled for removal.
    Deprecated,
    /// Deprecated and scheduled for removal.
    ForRemoval,
}

impl Deprecation {
    /// The warning category a use of such an element raises, if any.
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Deprecated => Some(super::DEPRECATION),
            Self::ForRemoval => Some(super::REMOVAL),
        }
    }
}

impl DeprecationInfo for Deprecation {
    fn is_deprecated(&self) -> bool {
        !matches!(self, Self::None)
    }

    fn is_for_removal(&self) -> bool {
        matches!(self, Self::ForRemoval)
    }

    fn deprecation(&self) -> Deprecation {
        *self
    }
}

impl<T: DeprecationInfo + ?Sized> DeprecationInfo for &T {
    fn is_deprecated(&self) -> bool {
        (**self).is_deprecated()
    }

    fn is_for_removal(&self) -> bool {
        (**self).is_for_removal()
    }
}

impl<T: DeprecationInfo + ?Sized> DeprecationInfo for Box<T> {
    fn is_deprecated(&self) -> bool {
        self.as_ref().is_deprecated()
    }

    fn is_for_removal(&self) -> bool {
        self.as_ref().is_for_removal()
    }
}
