//! Java class builder.

use hush_codegen::{
    CodeBuilder, CodeFragment, Renderable, Suppression, SuppressionTarget, WarningTracker,
};

use super::{Annotation, Method};

/// A field in a Java class.
#[derive(Debug, Clone)]
pub struct Field {
    pub modifiers: Vec<String>,
    pub ty: String,
    pub name: String,
    pub init: Option<String>,
}

impl Field {
    /// A `private final` field.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: vec!["private".to_string(), "final".to_string()],
            ty: ty.into(),
            name: name.into(),
            init: None,
        }
    }

    /// Set the initializer expression.
    pub fn init(mut self, init: impl Into<String>) -> Self {
        self.init = Some(init.into());
        self
    }

    fn format(&self) -> String {
        let mut line = self.modifiers.join(" ");
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("{} {}", self.ty, self.name));
        if let Some(init) = &self.init {
            line.push_str(&format!(" = {}", init));
        }
        line.push(';');
        line
    }
}

/// Builder for Java classes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    annotations: Vec<Annotation>,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Class {
    /// A `public class`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
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

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Suppress every warning in `warnings` on the whole class.
    pub fn suppress_warnings(mut self, warnings: &WarningTracker) -> Self {
        warnings.suppress(&mut self);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(field.format()))
            .collect();

        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.fields.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(method.to_fragments());
        }

        fragments
    }
}

impl SuppressionTarget for Class {
    fn add_suppression(&mut self, suppression: Suppression) {
        tracing::trace!(class = %self.name, %suppression, "annotating class");
        self.annotations.push(Annotation::suppress_warnings(&suppression));
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JavaDoc(doc.clone()));
        }

        for annotation in &self.annotations {
            fragments.push(CodeFragment::Line(annotation.to_string()));
        }

        fragments.push(CodeFragment::block(
            format!("public class {} {{", self.name),
            self.members_to_fragments(),
            "}",
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use hush_codegen::Deprecation;

    use super::*;

    #[test]
    fn test_empty_class() {
        assert_eq!(Class::new("Factory").build(), "public class Factory {\n}\n");
    }

    #[test]
    fn test_deprecated_class() {
        let c = Class::new("DeprecatedForRemovalBean")
            .doc("A bean scheduled for removal.")
            .annotation(Annotation::deprecated_for_removal())
            .build();
        assert_eq!(
            c,
            "/** A bean scheduled for removal. */\n@Deprecated(forRemoval = true)\npublic class DeprecatedForRemovalBean {\n}\n"
        );
    }

    #[test]
    fn test_members_separated_by_blank_lines() {
        let c = Class::new("Holder")
            .field(Field::new("List<Bean>", "beans").init("new ArrayList<>()"))
            .method(Method::new("first"))
            .method(Method::new("second"))
            .build();
        assert_eq!(
            c,
            "public class Holder {\n\tprivate final List<Bean> beans = new ArrayList<>();\n\n\tpublic void first() {\n\t}\n\n\tpublic void second() {\n\t}\n}\n"
        );
    }

    #[test]
    fn test_class_level_suppression() {
        let mut warnings = WarningTracker::new();
        warnings.detect_deprecation(&Deprecation::ForRemoval);

        let c = Class::new("Holder")
            .field(Field::new("DeprecatedForRemovalBean", "bean"))
            .suppress_warnings(&warnings)
            .build();
        assert_eq!(
            c,
            "@SuppressWarnings(\"removal\")\npublic class Holder {\n\tprivate final DeprecatedForRemovalBean bean;\n}\n"
        );
    }

    #[test]
    fn test_empty_tracker_adds_nothing() {
        let c = Class::new("Holder").suppress_warnings(&WarningTracker::new());
        assert!(c.annotations().is_empty());
    }
}
