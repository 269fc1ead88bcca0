//! The virtual environment checklist.
//!
//! Three checks run in order against a project:
//!
//! 1. [`existence`]: the expected venv folder exists
//! 2. [`activation`]: that venv is the active environment
//! 3. [`requirements`]: every package in the manifest is installed
//!
//! [`Checklist`] runs them, reports each one, and tracks [`Progress`].

pub mod activation;
pub mod existence;
pub mod progress;
pub mod requirements;
pub mod runner;

pub use activation::{check_activation, check_activation_with_env, ActivationStatus};
pub use existence::{check_venv_exists, ExistenceOutcome};
pub use progress::Progress;
pub use requirements::{compare_manifest, ManifestCheck, ManifestOutcome};
pub use runner::{CheckReport, Checklist, CHECK_COUNT};
