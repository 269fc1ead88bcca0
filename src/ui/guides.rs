//! "How to fix" guides shown after a failing check.
//!
//! Each guide names the failing condition and lists the commands that
//! resolve it on Windows (PowerShell) and on macOS/Linux (zsh or bash).
//! The checker never runs these commands itself.

/// A titled block of fix instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    /// One-line description of the failing condition.
    pub title: String,
    /// Instruction lines, shown in order.
    pub lines: Vec<String>,
}

impl Guide {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

fn create_and_activate(venv_dir: &str) -> Vec<String> {
    vec![
        "Open a terminal in your ROOT PROJECT FOLDER and run each command separately.".into(),
        "On Windows, use a PowerShell terminal.".into(),
        format!("   py -m venv {}", venv_dir),
        format!("   .\\{}\\Scripts\\activate", venv_dir),
        "On Mac or Linux, use your zsh or bash terminal.".into(),
        format!("   python3 -m venv {}", venv_dir),
        format!("   source {}/bin/activate", venv_dir),
    ]
}

/// Guide for a missing venv folder.
pub fn missing_venv(venv_dir: &str) -> Guide {
    let mut lines = vec!["Create your local project virtual env and activate it.".to_string()];
    lines.extend(create_and_activate(venv_dir));
    Guide::new(format!("Missing {} folder - HOW TO FIX", venv_dir), lines)
}

/// Guide for a venv that exists but is not the active environment.
pub fn inactive(venv_dir: &str) -> Guide {
    let mut lines = vec![format!(
        "Activate {} in the terminal you run your project from.",
        venv_dir
    )];
    lines.extend(create_and_activate(venv_dir));
    lines.push(
        "If activation still fails, ensure you've installed a current Python version on your machine."
            .into(),
    );
    Guide::new(
        "Local project virtual environment is not active - HOW TO FIX",
        lines,
    )
}

/// Guide for a missing requirements manifest.
pub fn missing_manifest(manifest: &str) -> Guide {
    Guide::new(
        format!("Local {} file is missing - HOW TO FIX", manifest),
        vec![
            format!("Create a {} file in your ROOT PROJECT FOLDER.", manifest),
            "On Windows, use a PowerShell terminal.".into(),
            format!("   ni {}", manifest),
            "On Mac or Linux, use your zsh or bash terminal.".into(),
            format!("   touch {}", manifest),
            format!("Then list each required package, one per line, in {}.", manifest),
        ],
    )
}

/// Guide for declared packages that are not installed.
pub fn missing_packages(manifest: &str, venv_dir: &str) -> Guide {
    Guide::new(
        format!(
            "Not all packages listed in {} are installed - HOW TO FIX",
            manifest
        ),
        vec![
            format!("Install packages in {} into your active {}.", manifest, venv_dir),
            "Open a terminal in your ROOT PROJECT FOLDER and run the command.".into(),
            "On Windows, use a PowerShell terminal.".into(),
            format!("   py -m pip install --upgrade -r {}", manifest),
            "On Mac or Linux, use your zsh or bash terminal.".into(),
            format!("   python3 -m pip install --upgrade -r {}", manifest),
        ],
    )
}
