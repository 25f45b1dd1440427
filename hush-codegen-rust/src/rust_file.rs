//! RustFile abstraction for one generated Rust code unit.

use std::path::Path;

use hush_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    /// Create a use statement for a module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    /// Add a symbol to import from the module.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// ```
/// use hush_codegen_rust::{Fn, RustFile, rust_file::Use};
///
/// let code = RustFile::new()
///     .header("//! Generated code, do not edit.")
///     .use_stmt(Use::new("legacy").symbol("Bean"))
///     .add(Fn::new("apply"))
///     .render();
///
/// assert_eq!(
///     code,
///     "//! Generated code, do not edit.\n\nuse legacy::Bean;\n\npub fn apply() {\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct RustFile {
    header: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header comment rendered before everything else.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();
        let mut sections = 0;

        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_line(line);
            }
            sections += 1;
        }

        if !self.uses.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in &self.uses {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    /// Render and write the file to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.uses.is_empty() && self.body.is_empty()
    }
}
