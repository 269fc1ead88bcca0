//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Every setting flag falls back
//! to a `VENV_CHECKER_*` environment variable.

use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;
use crate::packages::InspectorKind;

/// check-venv - Verify a Python project's local virtual environment.
#[derive(Debug, Parser)]
#[command(name = "check-venv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .venv-checker.yml)
    #[arg(short, long, env = "VENV_CHECKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "VENV_CHECKER_PROJECT")]
    pub project: Option<PathBuf>,

    /// Expected virtual environment folder, relative to the project root
    #[arg(long, value_name = "NAME", env = "VENV_CHECKER_VENV_DIR")]
    pub venv_dir: Option<String>,

    /// Requirements file, relative to the project root
    #[arg(short, long, value_name = "FILE", env = "VENV_CHECKER_REQUIREMENTS")]
    pub requirements: Option<PathBuf>,

    /// How installed packages are discovered
    #[arg(long, value_enum, env = "VENV_CHECKER_INSPECTOR")]
    pub inspector: Option<InspectorKind>,

    /// Write the run log to FILE (default: venv_checker.log)
    #[arg(long, value_name = "FILE", conflicts_with = "no_log_file")]
    pub log_file: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log_file: bool,

    /// Exit with status 1 when any check fails (`--strict=false` overrides the config file)
    #[arg(
        long,
        env = "VENV_CHECKER_STRICT",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub strict: Option<bool>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print nothing except errors; pair with --strict to use the exit code
    #[arg(short, long)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Settings given on the command line, for layering over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            venv_dir: self.venv_dir.clone(),
            requirements: self.requirements.clone(),
            inspector: self.inspector,
            strict: self.strict,
            log_path: self.log_file.clone(),
            no_log_file: self.no_log_file,
        }
    }
}
