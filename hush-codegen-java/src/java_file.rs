//! JavaFile abstraction for one generated Java compilation unit.

use std::path::{Path, PathBuf};

use hush_codegen::{CodeBuilder, Renderable};
use indexmap::IndexSet;

use crate::{JavaType, ast::Class};

/// A Java compilation unit holding one top-level class.
///
/// Imports are deduplicated and kept in insertion order. Types from
/// `java.lang` and from the file's own package are never imported.
pub struct JavaFile {
    header: Option<String>,
    package: Option<String>,
    imports: IndexSet<String>,
    class: Class,
}

impl JavaFile {
    pub fn new(class: Class) -> Self {
        Self {
            header: None,
            package: None,
            imports: IndexSet::new(),
            class,
        }
    }

    /// Set a comment rendered before the package declaration.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Import a fully qualified name.
    pub fn import(mut self, name: impl Into<String>) -> Self {
        self.imports.insert(name.into());
        self
    }

    /// Import every qualified type mentioned in `ty`, arguments included.
    pub fn import_type(mut self, ty: &JavaType) -> Self {
        for ty in ty.walk() {
            match ty.package() {
                Some("java.lang") | None => {}
                Some(package) if Some(package) == self.package.as_deref() => {}
                Some(_) => {
                    self.imports.insert(ty.name().to_string());
                }
            }
        }
        self
    }

    /// `<package path>/<Class>.java`, relative to a source root.
    pub fn path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if let Some(package) = &self.package {
            path.extend(package.split('.'));
        }
        path.push(format!("{}.java", self.class.name()));
        path
    }

    /// Render the file with Java indentation (tabs).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        let mut sections = 0;

        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_line(line);
            }
            sections += 1;
        }

        if let Some(package) = &self.package {
            if sections > 0 {
                builder.push_blank();
            }
            builder.push_line(&format!("package {};", package));
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.push_line(&format!("import {};", import));
            }
            sections += 1;
        }

        if sections > 0 {
            builder.push_blank();
        }
        for fragment in self.class.to_fragments() {
            builder.apply_fragment(fragment);
        }

        builder.build()
    }

    /// Render and write the file under the source root `dir`, creating
    /// package directories as needed. Returns the written path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(self.path());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.render())?;
        tracing::debug!(path = %path.display(), "wrote java file");
        Ok(path)
    }
}
