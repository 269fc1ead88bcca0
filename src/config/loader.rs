//! Configuration discovery, loading, and resolution.
//!
//! Settings are resolved from, in priority order:
//! 1. Command-line flags (and their environment-variable fallbacks)
//! 2. Project config (`.venv-checker.yml`, or the file given with `--config`)
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{CheckerConfig, DEFAULT_LOG_FILE, DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR};
use crate::error::{CheckerError, Result};
use crate::packages::InspectorKind;

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".venv-checker.yml";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
    pub venv_dir: Option<String>,
    pub requirements: Option<PathBuf>,
    pub inspector: Option<InspectorKind>,
    /// `Some(false)` turns off a `strict: true` from the config file.
    pub strict: Option<bool>,
    pub log_path: Option<PathBuf>,
    pub no_log_file: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the checks run against.
    pub project_root: PathBuf,
    /// Expected venv directory, as configured (relative to the root).
    pub venv_dir: String,
    /// Requirements manifest, as configured (relative to the root).
    pub requirements: PathBuf,
    /// Installed-package inspection strategy.
    pub inspector: InspectorKind,
    /// Exit non-zero when a check fails.
    pub strict: bool,
    /// Absolute log file path, or `None` when file logging is off.
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Built-in defaults for `project_root`.
    pub fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            inspector: InspectorKind::default(),
            strict: false,
            log_file: Some(project_root.join(DEFAULT_LOG_FILE)),
        }
    }

    /// Discover the project config and resolve settings for `project_root`.
    pub fn load(project_root: &Path, overrides: &Overrides) -> Result<Self> {
        let config = match &overrides.config {
            Some(path) => {
                let path = project_root.join(path);
                if !path.is_file() {
                    return Err(CheckerError::ConfigNotFound { path });
                }
                load_config_file(&path)?
            }
            None => match find_project_config(project_root) {
                Some(path) => load_config_file(&path)?,
                None => CheckerConfig::default(),
            },
        };
        Self::resolve(project_root, config, overrides)
    }

    /// Merge a parsed config with command-line overrides.
    pub fn resolve(
        project_root: &Path,
        config: CheckerConfig,
        overrides: &Overrides,
    ) -> Result<Self> {
        let defaults = Self::defaults(project_root);

        let venv_dir = overrides
            .venv_dir
            .clone()
            .or(config.venv_dir)
            .unwrap_or(defaults.venv_dir);
        if venv_dir.trim().is_empty() {
            return Err(CheckerError::ConfigValidationError {
                message: "venv_dir must not be empty".to_string(),
            });
        }

        let requirements = overrides
            .requirements
            .clone()
            .or(config.requirements)
            .unwrap_or(defaults.requirements);
        if requirements.as_os_str().is_empty() {
            return Err(CheckerError::ConfigValidationError {
                message: "requirements must not be empty".to_string(),
            });
        }

        let logging = !overrides.no_log_file && config.logging.unwrap_or(true);
        let log_file = if logging {
            overrides
                .log_path
                .clone()
                .or(config.log_path)
                .map(|p| project_root.join(p))
                .or(defaults.log_file)
        } else {
            None
        };

        Ok(Self {
            project_root: project_root.to_path_buf(),
            venv_dir,
            requirements,
            inspector: overrides
                .inspector
                .or(config.inspector)
                .unwrap_or(defaults.inspector),
            strict: overrides
                .strict
                .or(config.strict)
                .unwrap_or(defaults.strict),
            log_file,
        })
    }

    /// Absolute path of the expected venv directory.
    pub fn venv_path(&self) -> PathBuf {
        self.project_root.join(&self.venv_dir)
    }

    /// Absolute path of the requirements manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(&self.requirements)
    }
}

/// Find the project config at `.venv-checker.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<CheckerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckerError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`CheckerConfig`].
///
/// An empty file is treated as an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckerConfig> {
    if content.trim().is_empty() {
        return Ok(CheckerConfig::default());
    }
    tracing::debug!("Parsing config {}", source_path.display());
    serde_yaml::from_str(content).map_err(|e| CheckerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
