//! Rust function builder.

use hush_codegen::{
    CodeBuilder, CodeFragment, Renderable, Suppression, SuppressionTarget, WarningTracker,
};

use super::Attributed;
use crate::LintMap;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    /// Suppress every warning in `warnings` on this function.
    ///
    /// Call after the body is complete.
    pub fn suppress_warnings(mut self, warnings: &WarningTracker) -> Self {
        warnings.suppress(&mut self);
        self
    }

    /// Attributes in declaration order, without the `#[...]` wrapper.
    pub fn attrs(&self) -> &[String] {
        &self.attrs
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| {
                if p.ty.is_empty() {
                    p.name.clone()
                } else {
                    format!("{}: {}", p.name, p.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {} {{", vis, self.name, params_str, ret),
            None => format!("{}fn {}({}) {{", vis, self.name, params_str),
        }
    }
}

impl Attributed for Fn {
    fn push_attr(&mut self, attr: String) {
        self.attrs.push(attr);
    }
}

impl SuppressionTarget for Fn {
    fn add_suppression(&mut self, suppression: Suppression) {
        LintMap::rustc().attach(&suppression, self);
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        fragments.push(CodeFragment::block(
            self.format_signature(),
            self.body.iter().cloned().map(CodeFragment::Line).collect(),
            "}",
        ));

        fragments
    }
}
