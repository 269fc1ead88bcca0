//! Sequential checklist runner.
//!
//! Runs the existence, activation and manifest checks in that order,
//! reports each to the UI and the log, and tracks progress. A failing
//! check never stops the ones after it.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::checks::activation::{check_activation_with_env, ActivationStatus};
use crate::checks::existence::{check_venv_exists, ExistenceOutcome};
use crate::checks::progress::{Progress, ACTIVATION_POINTS, EXISTENCE_POINTS, MANIFEST_POINTS};
use crate::checks::requirements::{compare_manifest, ManifestCheck, ManifestOutcome};
use crate::config::Settings;
use crate::packages::inspector_for;
use crate::ui::{guides, StatusKind, UserInterface};

/// Number of checks in the checklist.
pub const CHECK_COUNT: usize = 3;

type EnvFn<'a> = Box<dyn Fn(&str) -> Result<String, VarError> + 'a>;

/// Outcome of a full checklist run.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub existence: ExistenceOutcome,
    pub activation: ActivationStatus,
    pub manifest: ManifestCheck,
    pub progress: Progress,
}

impl CheckReport {
    /// How many of the checks passed.
    pub fn passed_count(&self) -> usize {
        [
            self.existence.passed(),
            self.activation.passed(),
            self.manifest.passed(),
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed_count() == CHECK_COUNT
    }
}

/// Runs the checklist against resolved [`Settings`].
pub struct Checklist<'a> {
    settings: &'a Settings,
    env_fn: EnvFn<'a>,
}

impl<'a> Checklist<'a> {
    /// Create a checklist reading the real process environment.
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_env(settings, |key: &str| std::env::var(key))
    }

    /// Create a checklist with a custom env var lookup function.
    pub fn with_env<F>(settings: &'a Settings, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + 'a,
    {
        Self {
            settings,
            env_fn: Box::new(env_fn),
        }
    }

    /// Run every check and report the results.
    pub fn run(&self, ui: &mut dyn UserInterface) -> CheckReport {
        let settings = self.settings;
        tracing::info!(
            "Checking virtual environment for {}",
            settings.project_root.display()
        );
        ui.show_header("Local project virtual environment check");

        let mut progress = Progress::new();

        let existence = check_venv_exists(&settings.project_root, &settings.venv_dir);
        report_existence(ui, settings, &existence);
        if existence.passed() {
            advance(ui, &mut progress, EXISTENCE_POINTS);
        }

        let activation = check_activation_with_env(&settings.venv_path(), &self.env_fn);
        report_activation(ui, settings, &activation);
        if activation.passed() {
            advance(ui, &mut progress, ACTIVATION_POINTS);
        }

        let prefix = environment_to_inspect(&activation, &existence);
        let venv_path = settings.venv_path();
        let inspector = inspector_for(
            settings.inspector,
            prefix.as_deref().unwrap_or(venv_path.as_path()),
        );
        tracing::debug!("Using the {} inspector", inspector.name());
        let manifest = compare_manifest(
            &settings.manifest_path(),
            prefix.as_deref(),
            inspector.as_ref(),
        );
        report_manifest(ui, settings, &manifest);
        if manifest.passed() {
            advance(ui, &mut progress, MANIFEST_POINTS);
        }

        let report = CheckReport {
            existence,
            activation,
            manifest,
            progress,
        };
        report_summary(ui, &report);
        report
    }
}

/// The environment whose packages are compared: the active one if any,
/// else the local venv folder if it exists.
pub fn environment_to_inspect(
    activation: &ActivationStatus,
    existence: &ExistenceOutcome,
) -> Option<PathBuf> {
    activation
        .active_prefix()
        .map(Path::to_path_buf)
        .or_else(|| existence.passed().then(|| existence.path().to_path_buf()))
}

fn advance(ui: &mut dyn UserInterface, progress: &mut Progress, points: u8) {
    progress.award(points);
    let milestone = progress.milestone();
    if milestone.is_empty() {
        tracing::info!("Progress: {}%.", progress.percent());
    } else {
        tracing::info!("Progress: {}% - {}", progress.percent(), milestone);
    }
    ui.show_progress(progress.percent(), milestone);
}

fn report_existence(ui: &mut dyn UserInterface, settings: &Settings, outcome: &ExistenceOutcome) {
    let dir = &settings.venv_dir;
    match outcome {
        ExistenceOutcome::Found {
            path,
            looks_like_venv,
        } => {
            tracing::info!("{} folder exists.", dir);
            if *looks_like_venv {
                ui.show_check(StatusKind::Passed, &format!("{} folder exists", dir));
            } else {
                tracing::warn!("{} has no pyvenv.cfg", path.display());
                ui.show_check(
                    StatusKind::Warning,
                    &format!(
                        "{} folder exists but has no pyvenv.cfg; it may not be a virtual environment",
                        dir
                    ),
                );
            }
        }
        ExistenceOutcome::NotADirectory { path } => {
            tracing::error!("{} exists but is not a directory.", path.display());
            ui.show_check(
                StatusKind::Failed,
                &format!("{} exists but is not a directory", dir),
            );
            ui.show_guide(&guides::missing_venv(dir));
        }
        ExistenceOutcome::NotFound { .. } => {
            tracing::error!("{} folder not found.", dir);
            ui.show_check(StatusKind::Failed, &format!("{} folder not found", dir));
            ui.show_guide(&guides::missing_venv(dir));
        }
    }
}

fn report_activation(ui: &mut dyn UserInterface, settings: &Settings, status: &ActivationStatus) {
    match status {
        ActivationStatus::Active { prefix } => {
            tracing::info!("Virtual environment is active: {}", prefix.display());
            ui.show_check(StatusKind::Passed, "Virtual environment is active");
            ui.show_detail(&prefix.display().to_string());
        }
        ActivationStatus::OtherEnvironment { active, expected } => {
            tracing::error!(
                "A different virtual environment is active: {} (expected {})",
                active.display(),
                expected.display()
            );
            ui.show_check(
                StatusKind::Failed,
                &format!(
                    "A different virtual environment is active: {}",
                    active.display()
                ),
            );
            ui.show_detail(&format!("expected {}", expected.display()));
            ui.show_guide(&guides::inactive(&settings.venv_dir));
        }
        ActivationStatus::Inactive => {
            tracing::error!("Virtual environment is not active.");
            ui.show_check(StatusKind::Failed, "Virtual environment is not active");
            ui.show_guide(&guides::inactive(&settings.venv_dir));
        }
    }
}

fn report_manifest(ui: &mut dyn UserInterface, settings: &Settings, check: &ManifestCheck) {
    let manifest = settings.requirements.display().to_string();

    for skipped in &check.skipped {
        tracing::debug!(
            "Ignored {}:{} `{}` ({})",
            skipped.source.display(),
            skipped.line,
            skipped.text,
            skipped.reason
        );
        ui.show_detail(&format!(
            "ignored line {} `{}`: {}",
            skipped.line, skipped.text, skipped.reason
        ));
    }

    match &check.outcome {
        ManifestOutcome::AllInstalled => {
            for requirement in &check.declared {
                tracing::info!("Required {} is installed.", requirement.name);
                ui.show_detail(&format!("{} is installed", requirement.name));
            }
            tracing::info!("All packages in {} are installed.", manifest);
            ui.show_check(
                StatusKind::Passed,
                &format!(
                    "All {} packages in {} are installed",
                    check.declared.len(),
                    manifest
                ),
            );
        }
        ManifestOutcome::Missing(missing) => {
            let names: Vec<&str> = missing.iter().map(|r| r.name.as_str()).collect();
            tracing::error!("Missing required packages: {}", names.join(", "));
            ui.show_check(
                StatusKind::Failed,
                &format!("Missing required packages: {}", names.join(", ")),
            );
            for requirement in missing {
                ui.show_detail(&format!(
                    "{} (declared at {}:{})",
                    requirement.name,
                    requirement.source.display(),
                    requirement.line
                ));
            }
            ui.show_guide(&guides::missing_packages(&manifest, &settings.venv_dir));
        }
        ManifestOutcome::ManifestNotFound => {
            tracing::error!("{} file is missing.", manifest);
            ui.show_check(
                StatusKind::Skipped,
                &format!(
                    "{} is missing, cannot verify installed packages",
                    manifest
                ),
            );
            ui.show_guide(&guides::missing_manifest(&manifest));
        }
        ManifestOutcome::ManifestUnreadable(reason) => {
            tracing::error!("{}", reason);
            ui.show_check(
                StatusKind::Skipped,
                &format!("Cannot read {}: {}", manifest, reason),
            );
        }
        ManifestOutcome::NoEnvironment => {
            tracing::error!("No environment to inspect for installed packages.");
            ui.show_check(
                StatusKind::Skipped,
                "No active or local virtual environment to inspect for installed packages",
            );
        }
        ManifestOutcome::InspectionFailed(reason) => {
            tracing::error!("{}", reason);
            ui.show_check(
                StatusKind::Skipped,
                &format!("Could not determine installed packages: {}", reason),
            );
        }
    }
}

fn report_summary(ui: &mut dyn UserInterface, report: &CheckReport) {
    ui.message("");
    if report.all_passed() {
        tracing::info!("All checks passed.");
        ui.success("All checks passed");
    } else {
        tracing::warn!(
            "{} of {} checks passed.",
            report.passed_count(),
            CHECK_COUNT
        );
        ui.warning(&format!(
            "{} of {} checks passed",
            report.passed_count(),
            CHECK_COUNT
        ));
    }
}
