//! Rust impl block builder.

use hush_codegen::{
    CodeBuilder, CodeFragment, Renderable, Suppression, SuppressionTarget, WarningTracker,
};

use super::{Attributed, Fn};
use crate::LintMap;

/// Builder for Rust impl blocks.
///
/// An `#[allow(...)]` on the impl block covers every method inside it.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    attrs: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            attrs: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Suppress every warning in `warnings` on the whole impl block.
    pub fn suppress_warnings(mut self, warnings: &WarningTracker) -> Self {
        warnings.suppress(&mut self);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {} {{", trait_name, self.type_name),
            None => format!("impl {} {{", self.type_name),
        }
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Attributed for Impl {
    fn push_attr(&mut self, attr: String) {
        self.attrs.push(attr);
    }
}

impl SuppressionTarget for Impl {
    fn add_suppression(&mut self, suppression: Suppression) {
        LintMap::rustc().attach(&suppression, self);
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .attrs
            .iter()
            .map(|attr| CodeFragment::Line(format!("#[{}]", attr)))
            .collect();

        fragments.push(CodeFragment::block(
            self.format_header(),
            self.methods_to_fragments(),
            "}",
        ));

        fragments
    }
}
