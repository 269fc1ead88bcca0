//! Virtual environment folder existence check.

use std::path::{Path, PathBuf};

use crate::packages::layout::is_venv;

/// Result of looking for the expected venv directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistenceOutcome {
    /// The directory exists.
    Found {
        path: PathBuf,
        /// Whether it contains `pyvenv.cfg`.
        looks_like_venv: bool,
    },
    /// Something exists at the path but it is not a directory.
    NotADirectory { path: PathBuf },
    /// Nothing exists at the path.
    NotFound { path: PathBuf },
}

impl ExistenceOutcome {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path that was checked.
    pub fn path(&self) -> &Path {
        match self {
            Self::Found { path, .. } | Self::NotADirectory { path } | Self::NotFound { path } => {
                path
            }
        }
    }
}

/// Check that `venv_dir` exists as a directory under `project_root`.
pub fn check_venv_exists(project_root: &Path, venv_dir: &str) -> ExistenceOutcome {
    let path = project_root.join(venv_dir);

    if path.is_dir() {
        ExistenceOutcome::Found {
            looks_like_venv: is_venv(&path),
            path,
        }
    } else if path.exists() {
        ExistenceOutcome::NotADirectory { path }
    } else {
        ExistenceOutcome::NotFound { path }
    }
}
