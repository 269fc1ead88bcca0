//! Python distribution-name normalization.
//!
//! Names are compared the way pip compares them (PEP 503): case-folded,
//! with every run of `-`, `_` and `.` collapsed to a single `-`. This is
//! what makes `Django`, `django` and `pyyaml`/`PyYAML` match across the
//! manifest, `pip list` and dist-info folder names.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of separator characters.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("SEPARATOR_RUN must compile"));

/// Normalize a distribution name for comparison.
pub fn normalize(name: &str) -> String {
    SEPARATOR_RUN
        .replace_all(name.trim(), "-")
        .to_ascii_lowercase()
}
