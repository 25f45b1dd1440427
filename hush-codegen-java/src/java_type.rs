//! Referenced Java types and their deprecation status.

use std::fmt;

use hush_codegen::{Deprecation, DeprecationInfo};

/// A fully qualified Java type with generic arguments, e.g.
/// `java.util.List<legacy.DeprecatedBean>`.
///
/// The deprecation status describes the declared type itself; arguments
/// carry their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaType {
    name: String,
    deprecation: Deprecation,
    args: Vec<JavaType>,
}

impl JavaType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecation: Deprecation::None,
            args: Vec::new(),
        }
    }

    /// Mark the type `@Deprecated`.
    pub fn deprecated(mut self) -> Self {
        self.deprecation = Deprecation::Deprecated;
        self
    }

    /// Mark the type `@Deprecated(forRemoval = true)`.
    pub fn for_removal(mut self) -> Self {
        self.deprecation = Deprecation::ForRemoval;
        self
    }

    pub fn arg(mut self, arg: JavaType) -> Self {
        self.args.push(arg);
        self
    }

    /// The fully qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its package.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The package, if the name is qualified.
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(package, _)| package)
    }

    pub fn args(&self) -> &[JavaType] {
        &self.args
    }

    /// This type and every nested generic argument, outermost first.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// The type as written in source once imported: simple names throughout.
    pub fn source_name(&self) -> String {
        if self.args.is_empty() {
            return self.simple_name().to_string();
        }
        let args = self
            .args
            .iter()
            .map(JavaType::source_name)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{}>", self.simple_name(), args)
    }
}

impl DeprecationInfo for JavaType {
    fn is_deprecated(&self) -> bool {
        self.deprecation.is_deprecated()
    }

    fn is_for_removal(&self) -> bool {
        self.deprecation.is_for_removal()
    }
}

/// Fully qualified form.
impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
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

/// Pre-order iterator over a [`JavaType`] and its generic arguments.
pub struct Walk<'a> {
    stack: Vec<&'a JavaType>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a JavaType;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.args.iter().rev());
        Some(next)
    }
}
