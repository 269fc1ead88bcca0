//! Installed-package inspection.
//!
//! Two strategies determine which distributions are installed in an
//! environment:
//!
//! - [`SitePackagesInspector`] reads `*.dist-info` / `*.egg-info`
//!   metadata straight from `site-packages`. No interpreter is started.
//! - [`PipInspector`] runs `python -m pip list --format=json` with the
//!   environment's own interpreter.
//!
//! [`InspectorKind::Auto`] prefers the first. It uses the second when no
//! `site-packages` directory can be found, or when the venv also sees the
//! base interpreter's packages (`include-system-site-packages = true`).

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{CheckerError, Result};
use crate::packages::layout::{includes_system_site_packages, python_executable, site_packages_dirs};
use crate::packages::manifest::Requirement;
use crate::packages::name::normalize;
use crate::shell::{display_command, execute_captured};

/// Which inspection strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InspectorKind {
    /// Scan site-packages, falling back to pip.
    #[default]
    Auto,
    /// Read package metadata from site-packages.
    SitePackages,
    /// Ask the environment's pip.
    Pip,
}

impl fmt::Display for InspectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Auto => "auto",
            Self::SitePackages => "site-packages",
            Self::Pip => "pip",
        };
        f.write_str(text)
    }
}

/// The set of distributions installed in an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    names: BTreeSet<String>,
}

impl InstalledPackages {
    /// Build a set from raw distribution names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| normalize(n.as_ref())).collect(),
        }
    }

    /// Whether a distribution is installed (name compared normalized).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    /// Requirements from `declared` that are not installed, in order.
    pub fn missing<'a>(&self, declared: &'a [Requirement]) -> Vec<&'a Requirement> {
        declared
            .iter()
            .filter(|r| !self.names.contains(&r.normalized))
            .collect()
    }

    /// Number of installed distributions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A strategy for listing installed distributions.
pub trait PackageInspector {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// List the distributions installed under `prefix`.
    fn installed(&self, prefix: &Path) -> Result<InstalledPackages>;
}

/// Reads distribution metadata from `site-packages`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SitePackagesInspector;

impl PackageInspector for SitePackagesInspector {
    fn name(&self) -> &'static str {
        "site-packages"
    }

    fn installed(&self, prefix: &Path) -> Result<InstalledPackages> {
        let dirs = site_packages_dirs(prefix);
        if dirs.is_empty() {
            return Err(CheckerError::InspectionFailed {
                prefix: prefix.to_path_buf(),
                message: "no site-packages directory found".to_string(),
            });
        }

        let mut names = Vec::new();
        for dir in &dirs {
            tracing::debug!("Scanning {}", dir.display());
            for entry in fs::read_dir(dir)?.filter_map(|e| e.ok()) {
                if let Some(name) = distribution_name(&entry.path()) {
                    names.push(name);
                }
            }
        }

        Ok(InstalledPackages::from_names(names))
    }
}

/// Name of the distribution described by a `.dist-info` or `.egg-info`
/// entry, or `None` for anything else.
fn distribution_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy().into_owned();

    let (stem, metadata) = if let Some(stem) = file_name.strip_suffix(".dist-info") {
        (stem.to_string(), path.join("METADATA"))
    } else if let Some(stem) = file_name.strip_suffix(".egg-info") {
        let metadata = if path.is_dir() {
            path.join("PKG-INFO")
        } else {
            path.to_path_buf()
        };
        (stem.to_string(), metadata)
    } else {
        return None;
    };

    metadata_name(&metadata).or_else(|| {
        // `{name}-{version}`, where the name has `-` escaped to `_`
        stem.split('-').next().filter(|s| !s.is_empty()).map(String::from)
    })
}

/// Read the `Name:` header from a core-metadata file.
fn metadata_name(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("Name:"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Asks the environment's own pip for its installed distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipInspector;

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
}

impl PipInspector {
    /// Parse the output of `pip list --format=json`.
    pub fn parse_list(json: &str) -> serde_json::Result<InstalledPackages> {
        let entries: Vec<PipListEntry> = serde_json::from_str(json)?;
        Ok(InstalledPackages::from_names(
            entries.into_iter().map(|e| e.name),
        ))
    }
}

impl PackageInspector for PipInspector {
    fn name(&self) -> &'static str {
        "pip"
    }

    fn installed(&self, prefix: &Path) -> Result<InstalledPackages> {
        let python = python_executable(prefix);
        if !python.exists() {
            return Err(CheckerError::InspectionFailed {
                prefix: prefix.to_path_buf(),
                message: format!("interpreter not found at {}", python.display()),
            });
        }

        let args = [
            "-m",
            "pip",
            "list",
            "--format=json",
            "--disable-pip-version-check",
        ];
        let result = execute_captured(&python, &args)?;
        let command = display_command(&python, &args);
        tracing::debug!("{} finished in {:?}", command, result.duration);
        if !result.success {
            tracing::debug!(
                "{} exited with {:?}: {}",
                command,
                result.exit_code,
                result.stderr.trim()
            );
            return Err(CheckerError::InspectionFailed {
                prefix: prefix.to_path_buf(),
                message: format!("`{}` failed: {}", command, result.stderr.trim()),
            });
        }

        Self::parse_list(&result.stdout).map_err(|e| CheckerError::InspectionFailed {
            prefix: prefix.to_path_buf(),
            message: format!("unexpected pip output: {}", e),
        })
    }
}

/// Pick the inspector for `kind`, resolving `Auto` against `prefix`.
pub fn inspector_for(kind: InspectorKind, prefix: &Path) -> Box<dyn PackageInspector> {
    match kind {
        InspectorKind::SitePackages => Box::new(SitePackagesInspector),
        InspectorKind::Pip => Box::new(PipInspector),
        InspectorKind::Auto
            if includes_system_site_packages(prefix) || site_packages_dirs(prefix).is_empty() =>
        {
            Box::new(PipInspector)
        }
        InspectorKind::Auto => Box::new(SitePackagesInspector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::manifest::Manifest;
    use tempfile::TempDir;

    fn site_packages(prefix: &Path) -> std::path::PathBuf {
        let site = prefix.join("lib").join("python3.12").join("site-packages");
        fs::create_dir_all(&site).unwrap();
        site
    }

    #[test]
    fn contains_compares_normalized() {
        let installed = InstalledPackages::from_names(["PyYAML", "typing_extensions"]);
        assert!(installed.contains("pyyaml"));
        assert!(installed.contains("typing-extensions"));
        assert!(!installed.contains("requests"));
        assert_eq!(installed.len(), 2);
    }

    #[test]
    fn missing_flags_exactly_the_absent_package() {
        let manifest = Manifest::parse_str("requests\nnumpy\npandas\n", Path::new("r.txt"));
        let installed = InstalledPackages::from_names(["requests", "pandas"]);

        let missing = installed.missing(&manifest.requirements);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "numpy");
    }

    #[test]
    fn reads_dist_info_metadata_name() {
        let temp = TempDir::new().unwrap();
        let site = site_packages(temp.path());
        let dist = site.join("PyYAML-6.0.1.dist-info");
        fs::create_dir_all(&dist).unwrap();
        fs::write(
            dist.join("METADATA"),
            "Metadata-Version: 2.1\nName: PyYAML\nVersion: 6.0.1\n\nName: not-this\n",
        )
        .unwrap();

        let installed = SitePackagesInspector.installed(temp.path()).unwrap();
        assert!(installed.contains("pyyaml"));
        assert!(!installed.contains("not-this"));
    }

    #[test]
    fn falls_back_to_folder_name() {
        let temp = TempDir::new().unwrap();
        let site = site_packages(temp.path());
        fs::create_dir_all(site.join("typing_extensions-4.9.0.dist-info")).unwrap();
        fs::write(site.join("legacy_pkg-1.0-py3.12.egg-info"), "").unwrap();
        fs::create_dir_all(site.join("requests")).unwrap();

        let installed = SitePackagesInspector.installed(temp.path()).unwrap();
        assert!(installed.contains("typing-extensions"));
        assert!(installed.contains("legacy-pkg"));
        assert!(!installed.contains("requests"));
        assert_eq!(installed.len(), 2);
    }

    #[test]
    fn reads_egg_info_pkg_info() {
        let temp = TempDir::new().unwrap();
        let site = site_packages(temp.path());
        let egg = site.join("old_thing.egg-info");
        fs::create_dir_all(&egg).unwrap();
        fs::write(egg.join("PKG-INFO"), "Metadata-Version: 1.0\nName: Old-Thing\n").unwrap();

        let installed = SitePackagesInspector.installed(temp.path()).unwrap();
        assert!(installed.contains("old-thing"));
    }

    #[test]
    fn site_packages_inspector_requires_site_packages() {
        let temp = TempDir::new().unwrap();
        let result = SitePackagesInspector.installed(temp.path());
        assert!(matches!(result, Err(CheckerError::InspectionFailed { .. })));
    }

    #[test]
    fn pip_inspector_requires_interpreter() {
        let temp = TempDir::new().unwrap();
        let result = PipInspector.installed(temp.path());
        match result {
            Err(CheckerError::InspectionFailed { message, .. }) => {
                assert!(message.contains("interpreter not found"));
            }
            other => panic!("Expected InspectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn parses_pip_list_json() {
        let json = r#"[{"name": "requests", "version": "2.31.0"}, {"name": "Jinja2", "version": "3.1.2", "editable_project_location": "/src"}]"#;
        let installed = PipInspector::parse_list(json).unwrap();
        assert!(installed.contains("requests"));
        assert!(installed.contains("jinja2"));
    }

    #[test]
    fn rejects_non_json_pip_output() {
        assert!(PipInspector::parse_list("Package Version\n------- -------").is_err());
    }

    #[test]
    fn auto_uses_site_packages_when_present() {
        let temp = TempDir::new().unwrap();
        let site = site_packages(temp.path());
        fs::create_dir_all(site.join("requests-2.31.0.dist-info")).unwrap();

        let installed = inspector_for(InspectorKind::Auto, temp.path())
            .installed(temp.path())
            .unwrap();
        assert!(installed.contains("requests"));
    }

    #[test]
    fn auto_falls_back_to_pip() {
        let temp = TempDir::new().unwrap();
        let result = inspector_for(InspectorKind::Auto, temp.path()).installed(temp.path());
        match result {
            Err(CheckerError::InspectionFailed { message, .. }) => {
                assert!(message.contains("interpreter not found"));
            }
            other => panic!("Expected InspectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn inspector_for_resolves_auto() {
        let temp = TempDir::new().unwrap();
        assert_eq!(inspector_for(InspectorKind::Auto, temp.path()).name(), "pip");
        site_packages(temp.path());
        assert_eq!(
            inspector_for(InspectorKind::Auto, temp.path()).name(),
            "site-packages"
        );
        assert_eq!(inspector_for(InspectorKind::Pip, temp.path()).name(), "pip");
    }

    #[test]
    fn auto_uses_pip_when_system_packages_are_visible() {
        let temp = TempDir::new().unwrap();
        site_packages(temp.path());
        fs::write(
            temp.path().join("pyvenv.cfg"),
            "home = /usr/bin\ninclude-system-site-packages = true\n",
        )
        .unwrap();

        assert_eq!(inspector_for(InspectorKind::Auto, temp.path()).name(), "pip");
        assert_eq!(
            inspector_for(InspectorKind::SitePackages, temp.path()).name(),
            "site-packages"
        );
    }

    /// A prefix whose `bin/python` is a shell script with `body`.
    #[cfg(unix)]
    fn fake_interpreter(body: &str) -> TempDir {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let python = bin.join("python");
        fs::write(&python, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
        temp
    }

    #[cfg(unix)]
    #[test]
    fn pip_inspector_reads_pip_list() {
        let temp = fake_interpreter(
            r#"echo '[{"name": "requests", "version": "2.31.0"}, {"name": "PyYAML", "version": "6.0.1"}]'"#,
        );

        let installed = PipInspector.installed(temp.path()).unwrap();
        assert_eq!(installed.len(), 2);
        assert!(installed.contains("requests"));
        assert!(installed.contains("pyyaml"));
    }

    #[cfg(unix)]
    #[test]
    fn pip_inspector_reports_failed_pip() {
        let temp = fake_interpreter("echo 'No module named pip' >&2\nexit 1");

        match PipInspector.installed(temp.path()) {
            Err(CheckerError::InspectionFailed { message, .. }) => {
                assert!(message.contains("No module named pip"));
            }
            other => panic!("Expected InspectionFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn pip_inspector_rejects_unexpected_output() {
        let temp = fake_interpreter("echo 'Package Version'");

        match PipInspector.installed(temp.path()) {
            Err(CheckerError::InspectionFailed { message, .. }) => {
                assert!(message.contains("unexpected pip output"));
            }
            other => panic!("Expected InspectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn inspector_kind_display() {
        assert_eq!(InspectorKind::SitePackages.to_string(), "site-packages");
        assert_eq!(InspectorKind::default(), InspectorKind::Auto);
    }
}
