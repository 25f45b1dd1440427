//! Rust struct builder.

use hush_codegen::{
    CodeBuilder, CodeFragment, Renderable, Suppression, SuppressionTarget, WarningTracker,
};

use super::Attributed;
use crate::LintMap;

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Suppress every warning in `warnings` on the struct definition.
    ///
    /// Use this when field types reference deprecated items.
    pub fn suppress_warnings(mut self, warnings: &WarningTracker) -> Self {
        warnings.suppress(&mut self);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .flat_map(|field| {
                let mut fragments = Vec::new();
                let vis = if field.is_public { "pub " } else { "" };

                if let Some(doc) = &field.doc {
                    fragments.push(CodeFragment::RustDoc(doc.clone()));
                }

                fragments.push(CodeFragment::Line(format!(
                    "{}{}: {},",
                    vis, field.name, field.ty
                )));

                fragments
            })
            .collect()
    }
}

impl Attributed for Struct {
    fn push_attr(&mut self, attr: String) {
        self.attrs.push(attr);
    }
}

impl SuppressionTarget for Struct {
    fn add_suppression(&mut self, suppression: Suppression) {
        LintMap::rustc().attach(&suppression, self);
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}struct {} {{}}",
                vis, self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}struct {} {{", vis, self.name),
                self.fields_to_fragments(),
                "}",
            ));
        }

        fragments
    }
}
