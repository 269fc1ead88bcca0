//! Virtual environment activation check.
//!
//! Activation scripts (`bin/activate`, `Scripts\activate`) export
//! `VIRTUAL_ENV` with the environment's prefix. The check compares that
//! prefix against the expected local venv directory.

use std::env::VarError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Environment variable holding the active venv prefix.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Result of comparing the active prefix with the expected venv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationStatus {
    /// The expected venv is active.
    Active { prefix: PathBuf },
    /// A different venv is active.
    OtherEnvironment { active: PathBuf, expected: PathBuf },
    /// No venv is active.
    Inactive,
}

impl ActivationStatus {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// The active prefix, whichever environment it belongs to.
    pub fn active_prefix(&self) -> Option<&Path> {
        match self {
            Self::Active { prefix } => Some(prefix),
            Self::OtherEnvironment { active, .. } => Some(active),
            Self::Inactive => None,
        }
    }
}

/// Read the active venv prefix with a custom env var lookup function.
///
/// An empty value counts as unset.
pub fn active_prefix_with_env<F>(env_fn: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_fn(VIRTUAL_ENV_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Compare the process's active venv against `expected`.
pub fn check_activation(expected: &Path) -> ActivationStatus {
    check_activation_with_env(expected, &|key: &str| std::env::var(key))
}

/// Activation check with a custom env var lookup function.
pub fn check_activation_with_env<F>(expected: &Path, env_fn: &F) -> ActivationStatus
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let Some(active) = active_prefix_with_env(env_fn) else {
        return ActivationStatus::Inactive;
    };

    if same_location(&active, expected) {
        ActivationStatus::Active { prefix: active }
    } else {
        ActivationStatus::OtherEnvironment {
            active,
            expected: expected.to_path_buf(),
        }
    }
}

/// Whether two paths name the same directory.
///
/// Canonical paths are compared when both resolve (following symlinks);
/// otherwise the lexically cleaned paths are compared.
fn same_location(a: &Path, b: &Path) -> bool {
    if let (Ok(ca), Ok(cb)) = (fs::canonicalize(a), fs::canonicalize(b)) {
        return ca == cb;
    }
    lexical_clean(a) == lexical_clean(b)
}

fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_with(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn unset_variable_is_inactive() {
        let temp = TempDir::new().unwrap();
        let status = check_activation_with_env(&temp.path().join(".venv"), &env_with(&[]));
        assert_eq!(status, ActivationStatus::Inactive);
        assert!(!status.passed());
        assert!(status.active_prefix().is_none());
    }

    #[test]
    fn empty_variable_is_inactive() {
        let temp = TempDir::new().unwrap();
        let env = env_with(&[(VIRTUAL_ENV_VAR, "  ")]);
        let status = check_activation_with_env(&temp.path().join(".venv"), &env);
        assert_eq!(status, ActivationStatus::Inactive);
    }

    #[test]
    fn matching_prefix_is_active() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join(".venv");
        fs::create_dir(&venv).unwrap();
        let env = env_with(&[(VIRTUAL_ENV_VAR, venv.to_str().unwrap())]);

        let status = check_activation_with_env(&venv, &env);
        assert!(status.passed());
        assert_eq!(status.active_prefix(), Some(venv.as_path()));
    }

    #[test]
    fn matching_prefix_through_dot_segments() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join(".venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        let spelled = venv.join("bin").join("..");
        let env = env_with(&[(VIRTUAL_ENV_VAR, spelled.to_str().unwrap())]);

        assert!(check_activation_with_env(&venv, &env).passed());
    }

    #[test]
    fn other_prefix_is_mismatch() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join(".venv");
        let other = temp.path().join("elsewhere");
        fs::create_dir(&venv).unwrap();
        fs::create_dir(&other).unwrap();
        let env = env_with(&[(VIRTUAL_ENV_VAR, other.to_str().unwrap())]);

        let status = check_activation_with_env(&venv, &env);
        assert!(!status.passed());
        assert_eq!(
            status,
            ActivationStatus::OtherEnvironment {
                active: other.clone(),
                expected: venv,
            }
        );
        assert_eq!(status.active_prefix(), Some(other.as_path()));
    }

    #[test]
    fn nonexistent_paths_compare_lexically() {
        let env = env_with(&[(VIRTUAL_ENV_VAR, "/no/such/project/./.venv")]);
        let status = check_activation_with_env(Path::new("/no/such/project/.venv"), &env);
        assert!(status.passed());
    }

    #[test]
    fn lexical_clean_resolves_parent_dirs() {
        assert_eq!(
            lexical_clean(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
    }
}
