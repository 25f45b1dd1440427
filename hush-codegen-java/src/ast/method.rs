//! Java method builder.

use hush_codegen::{
    CodeBuilder, CodeFragment, Renderable, Suppression, SuppressionTarget, WarningTracker,
};

use super::Annotation;

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Builder for Java methods.
///
/// Methods are `public` with a `void` return type unless told otherwise.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    annotations: Vec<Annotation>,
    modifiers: Vec<String>,
    return_type: String,
    params: Vec<Param>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            modifiers: vec!["public".to_string()],
            return_type: "void".to_string(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Replace the modifiers, e.g. `["private", "static"]`.
    pub fn modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the method body.
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

    /// Suppress every warning in `warnings` on this method.
    pub fn suppress_warnings(mut self, warnings: &WarningTracker) -> Self {
        warnings.suppress(&mut self);
        self
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = self.modifiers.join(" ");
        if !signature.is_empty() {
            signature.push(' ');
        }
        format!("{}{} {}({}) {{", signature, self.return_type, self.name, params)
    }
}

impl SuppressionTarget for Method {
    fn add_suppression(&mut self, suppression: Suppression) {
        tracing::trace!(method = %self.name, %suppression, "annotating method");
        self.annotations.push(Annotation::suppress_warnings(&suppression));
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JavaDoc(doc.clone()));
        }

        for annotation in &self.annotations {
            fragments.push(CodeFragment::Line(annotation.to_string()));
        }

        fragments.push(CodeFragment::block(
            self.format_signature(),
            self.body.iter().cloned().map(CodeFragment::Line).collect(),
            "}",
        ));

        fragments
    }
}
