//! Configuration schema.
//!
//! Maps the optional `.venv-checker.yml` project file. Every key is
//! optional; absent keys fall back to built-in defaults.

use serde::Deserialize;
use std::path::PathBuf;

use crate::packages::InspectorKind;

/// Default expected virtual environment directory.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Default requirements manifest.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Default log file, relative to the project root.
pub const DEFAULT_LOG_FILE: &str = "venv_checker.log";

/// Root structure of `.venv-checker.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Expected venv directory, relative to the project root.
    pub venv_dir: Option<String>,

    /// Requirements manifest, relative to the project root.
    pub requirements: Option<PathBuf>,

    /// Installed-package inspection strategy.
    pub inspector: Option<InspectorKind>,

    /// Exit non-zero when a check fails.
    pub strict: Option<bool>,

    /// Write a log file for each run.
    pub logging: Option<bool>,

    /// Log file path (relative to project root).
    pub log_path: Option<PathBuf>,
}
