// src/core/exclude.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;

/// Glob patterns naming catalog files to leave out of a scan.
///
/// Patterns are matched against the bare file name, never the full path.
#[derive(Debug, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles every pattern in `patterns`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern with invalid glob syntax.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Self::new();
        for pattern in patterns {
            compiled.add_pattern(pattern.as_ref())?;
        }
        Ok(compiled)
    }

    /// Adds a pattern. Blank entries and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let Some(file_name) = path.as_ref().file_name() else {
            return false;
        };
        let file_name = file_name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&file_name))
    }
}
