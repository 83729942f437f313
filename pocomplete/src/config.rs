// src/config.rs
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "pocomplete.toml";

/// What a batch scan does when a catalog file cannot be read.
#[derive(Deserialize, ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first unreadable catalog; no report is produced.
    #[default]
    Abort,
    /// Record the failure, keep scanning and report what could be read.
    Skip,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the catalog files.
    pub catalog_directory: PathBuf,
    /// Stripped from file names to derive the language code.
    pub filename_prefix: String,
    /// Selects catalog files and is stripped from the language code.
    pub filename_extension: String,
    /// Number of strings in the master template, shown in the summary.
    pub expected_total_strings: u64,
    /// Glob patterns of catalog file names to leave out.
    pub exclude: Vec<String>,
    pub on_error: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_directory: PathBuf::from("languages"),
            filename_prefix: String::from("ai-translate-"),
            filename_extension: String::from(".po"),
            expected_total_strings: 179,
            exclude: Vec::new(),
            on_error: FailurePolicy::Abort,
        }
    }
}

impl Config {
    /// Parses a TOML configuration. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    #[inline]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not a valid configuration
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Resolves the base configuration before command-line overrides.
    ///
    /// An explicit path must exist. Without one, `pocomplete.toml` in `cwd`
    /// is used when present, and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen configuration file cannot be loaded.
    #[inline]
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading configuration");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }
}
