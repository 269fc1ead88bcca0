//! Declared-versus-installed package comparison.

use std::path::{Path, PathBuf};

use crate::error::CheckerError;
use crate::packages::{Manifest, PackageInspector, Requirement, SkippedLine};

/// Result of comparing the manifest with the installed package set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// Every declared package is installed.
    AllInstalled,
    /// Declared packages absent from the environment, in declaration order.
    Missing(Vec<Requirement>),
    /// The manifest file does not exist.
    ManifestNotFound,
    /// The manifest exists but could not be read.
    ManifestUnreadable(String),
    /// No active or local environment to inspect.
    NoEnvironment,
    /// The installed package set could not be determined.
    InspectionFailed(String),
}

/// Everything the manifest comparison found.
#[derive(Debug, Clone)]
pub struct ManifestCheck {
    /// Manifest that was read.
    pub manifest_path: PathBuf,
    /// Environment that was inspected.
    pub prefix: Option<PathBuf>,
    /// Packages the manifest declares.
    pub declared: Vec<Requirement>,
    /// Manifest lines that were ignored.
    pub skipped: Vec<SkippedLine>,
    /// The comparison result.
    pub outcome: ManifestOutcome,
}

impl ManifestCheck {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, ManifestOutcome::AllInstalled)
    }

    /// Names of missing packages, as written in the manifest.
    pub fn missing_names(&self) -> Vec<&str> {
        match &self.outcome {
            ManifestOutcome::Missing(missing) => missing.iter().map(|r| r.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Compare the packages declared in `manifest_path` with those installed
/// under `prefix`.
///
/// The manifest is read first so a missing manifest is reported even when
/// there is no environment.
pub fn compare_manifest(
    manifest_path: &Path,
    prefix: Option<&Path>,
    inspector: &dyn PackageInspector,
) -> ManifestCheck {
    let mut check = ManifestCheck {
        manifest_path: manifest_path.to_path_buf(),
        prefix: prefix.map(Path::to_path_buf),
        declared: Vec::new(),
        skipped: Vec::new(),
        outcome: ManifestOutcome::AllInstalled,
    };

    let manifest = match Manifest::load(manifest_path) {
        Ok(m) => m,
        Err(CheckerError::ManifestReadError { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            check.outcome = ManifestOutcome::ManifestNotFound;
            return check;
        }
        Err(e) => {
            check.outcome = ManifestOutcome::ManifestUnreadable(e.to_string());
            return check;
        }
    };
    check.declared = manifest.requirements;
    check.skipped = manifest.skipped;

    let Some(prefix) = prefix else {
        check.outcome = ManifestOutcome::NoEnvironment;
        return check;
    };

    let installed = match inspector.installed(prefix) {
        Ok(installed) => installed,
        Err(e) => {
            check.outcome = ManifestOutcome::InspectionFailed(e.to_string());
            return check;
        }
    };

    let missing: Vec<Requirement> = installed
        .missing(&check.declared)
        .into_iter()
        .cloned()
        .collect();
    if !missing.is_empty() {
        check.outcome = ManifestOutcome::Missing(missing);
    }
    check
}
