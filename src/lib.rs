//! venv-checker - Verify a Python project's local virtual environment.
//!
//! Runs a short checklist against a project folder: the expected venv
//! folder exists, that venv is the active environment, and every package
//! the requirements file declares is installed in it. Each failure comes
//! with platform-specific instructions for fixing it.
//!
//! # Modules
//!
//! - [`checks`] - The three checks and the checklist runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and resolution
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Requirements parsing and installed-package inspection
//! - [`shell`] - External command execution and platform detection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use venv_checker::packages::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::parse_str("Django>=4.2\n# tools\nblack\n", Path::new("requirements.txt"));
//! assert_eq!(manifest.names(), vec!["Django", "black"]);
//! ```
//!
//! For running the full checklist, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod packages;
pub mod shell;
pub mod ui;

pub use error::{CheckerError, Result};
