//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes of the language emitters produce fragments; [`CodeBuilder`]
//! turns fragments into indented text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// A single-line Javadoc comment.
    JavaDoc(String),
    /// A Rust doc comment.
    RustDoc(String),
}

impl CodeFragment {
    /// Create a block fragment closed by `close`.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
