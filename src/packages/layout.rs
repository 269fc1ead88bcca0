//! On-disk layout of a Python virtual environment.
//!
//! POSIX venvs keep the interpreter in `bin/` and packages in
//! `lib/pythonX.Y/site-packages`; Windows venvs use `Scripts\` and
//! `Lib\site-packages`. Both layouts are probed regardless of host so a
//! venv copied between machines is still inspected.

use std::fs;
use std::path::{Path, PathBuf};

use crate::shell::is_windows;

/// Marker file written by `python -m venv` and virtualenv.
pub const PYVENV_CFG: &str = "pyvenv.cfg";

/// Whether `dir` looks like a venv (has `pyvenv.cfg`).
pub fn is_venv(dir: &Path) -> bool {
    dir.join(PYVENV_CFG).is_file()
}

/// Whether `pyvenv.cfg` under `prefix` sets
/// `include-system-site-packages = true`.
///
/// Such an environment also sees the base interpreter's packages, which
/// live outside `prefix`.
pub fn includes_system_site_packages(prefix: &Path) -> bool {
    let Ok(content) = fs::read_to_string(prefix.join(PYVENV_CFG)) else {
        return false;
    };
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("include-system-site-packages"))
        .is_some_and(|(_, value)| value.trim().eq_ignore_ascii_case("true"))
}

/// Path of the interpreter inside the environment at `prefix`.
pub fn python_executable(prefix: &Path) -> PathBuf {
    let windows = prefix.join("Scripts").join("python.exe");
    let posix = prefix.join("bin").join("python");
    if is_windows() {
        if windows.exists() || !posix.exists() {
            return windows;
        }
        return posix;
    }
    if posix.exists() || !windows.exists() {
        posix
    } else {
        windows
    }
}

/// All `site-packages` directories under `prefix`.
pub fn site_packages_dirs(prefix: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let windows = prefix.join("Lib").join("site-packages");
    if windows.is_dir() {
        dirs.push(windows);
    }

    for lib in ["lib", "lib64"] {
        let Ok(entries) = fs::read_dir(prefix.join(lib)) else {
            continue;
        };
        let mut found: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                let name = e.file_name();
                let name = name.to_string_lossy();
                name.starts_with("python") || name.starts_with("pypy")
            })
            .map(|e| e.path().join("site-packages"))
            .filter(|p| p.is_dir())
            .collect();
        found.sort();
        for dir in found {
            // lib64 is often a symlink to lib
            let canonical = fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
            let duplicate = dirs
                .iter()
                .any(|d| fs::canonicalize(d).unwrap_or_else(|_| d.clone()) == canonical);
            if !duplicate {
                dirs.push(dir);
            }
        }
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn is_venv_requires_pyvenv_cfg() {
        let temp = TempDir::new().unwrap();
        assert!(!is_venv(temp.path()));
        fs::write(temp.path().join(PYVENV_CFG), "home = /usr/bin\n").unwrap();
        assert!(is_venv(temp.path()));
    }

    #[test]
    fn reads_include_system_site_packages() {
        let temp = TempDir::new().unwrap();
        assert!(!includes_system_site_packages(temp.path()));

        let cfg = temp.path().join(PYVENV_CFG);
        fs::write(&cfg, "home = /usr/bin\ninclude-system-site-packages = false\n").unwrap();
        assert!(!includes_system_site_packages(temp.path()));

        fs::write(
            &cfg,
            "home = /usr/bin\ninclude-system-site-packages = True\nversion = 3.12.1\n",
        )
        .unwrap();
        assert!(includes_system_site_packages(temp.path()));
    }

    #[test]
    fn finds_posix_site_packages() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("lib/python3.12/site-packages");
        fs::create_dir_all(&site).unwrap();
        fs::create_dir_all(temp.path().join("lib/not-python")).unwrap();

        assert_eq!(site_packages_dirs(temp.path()), vec![site]);
    }

    #[test]
    fn finds_windows_site_packages() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("Lib").join("site-packages");
        fs::create_dir_all(&site).unwrap();

        let found = site_packages_dirs(temp.path());
        assert!(!found.is_empty());
        assert!(found[0].ends_with("site-packages"));
    }

    #[test]
    fn no_site_packages_in_empty_prefix() {
        let temp = TempDir::new().unwrap();
        assert!(site_packages_dirs(temp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn posix_python_executable() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            python_executable(temp.path()),
            temp.path().join("bin").join("python")
        );
    }
}
