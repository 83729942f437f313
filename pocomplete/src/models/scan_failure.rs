// src/models/scan_failure.rs
use serde::Serialize;
use std::path::PathBuf;

/// A catalog file that could not be analyzed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub message: String,
}
