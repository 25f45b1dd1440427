//! Indented text output for rendered fragments.

use super::{CodeFragment, Indent, Renderable};

/// Writes [`CodeFragment`]s as indented source text.
///
/// ```
/// use hush_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.apply_fragment(CodeFragment::block(
///     "public void apply() {",
///     vec![CodeFragment::Line("new OldBean();".into())],
///     "}",
/// ));
///
/// assert_eq!(builder.build(), "public void apply() {\n\tnew OldBean();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Tab indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a single-line `/** ... */` comment.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("/** {} */", text))
    }

    /// Add a `///` comment line per line of `text`.
    pub fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            let line = format!("/// {}", line);
            self.push_line(line.trim_end());
        }
        self
    }

    /// Emit every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                self.push_line(&close);
            }
            CodeFragment::JavaDoc(text) => {
                self.push_javadoc(&text);
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
