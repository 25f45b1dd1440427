//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. Checkers compile generated sources with warnings
//! promoted to errors, so a missing or incomplete suppression fails the check.

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl CompileError {
    fn spawn(tool: &str, err: std::io::Error) -> Self {
        Self {
            message: format!("Failed to run {}: {}", tool, err),
            output: String::new(),
        }
    }

    fn from_output(message: &str, output: &Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        Self {
            message: message.to_string(),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles without warnings.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Rust checker compiling `lib.rs` as a library with `rustc -D warnings`.
pub struct RustcChecker;

impl CompileChecker for RustcChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("rustc")
            .args([
                "--edition",
                "2021",
                "--crate-type",
                "lib",
                "--crate-name",
                "generated",
                "--emit",
                "metadata",
                "-D",
                "warnings",
                "--out-dir",
            ])
            .arg(dir.join("target"))
            .arg(dir.join("lib.rs"))
            .output()
            .map_err(|e| CompileError::spawn("rustc", e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CompileError::from_output("rustc -D warnings failed", &output))
        }
    }
}

/// Java checker using `javac -Xlint:all -Werror` on every `.java` file.
pub struct JavacChecker;

impl CompileChecker for JavacChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let sources = java_sources(dir).map_err(|e| CompileError::spawn("javac", e))?;

        let output = Command::new("javac")
            .args(["-Xlint:all", "-Werror", "-d"])
            .arg(dir.join("classes"))
            .args(&sources)
            .output()
            .map_err(|e| CompileError::spawn("javac", e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CompileError::from_output(
                "javac -Xlint:all -Werror failed",
                &output,
            ))
        }
    }
}

fn java_sources(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            sources.extend(java_sources(&path)?);
        } else if path.extension().is_some_and(|e| e == "java") {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Whether `tool` can be spawned from `PATH`.
pub fn tool_available(tool: &str) -> bool {
    Command::new(tool).arg("-version").output().is_ok()
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Helper to run a generator and check that it compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        print_generated_files(temp_dir.path());
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}

/// Print generated sources for debugging a failed check.
pub fn print_generated_files(dir: &Path) {
    eprintln!("Generated files in {}:", dir.display());
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            print_generated_files(&path);
        } else if path.extension().is_some_and(|e| e == "rs" || e == "java") {
            eprintln!("  {}", path.display());
            if let Ok(content) = std::fs::read_to_string(&path) {
                for line in content.lines() {
                    eprintln!("    | {}", line);
                }
            }
        }
    }
}
