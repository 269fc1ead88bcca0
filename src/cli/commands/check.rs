//! The default command: run the venv checklist.

use std::env::VarError;

use crate::checks::Checklist;
use crate::cli::commands::command::{Command, CommandResult};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a failed check under `--strict`.
pub const STRICT_FAILURE_EXIT_CODE: i32 = 1;

/// Runs every check against the resolved settings.
pub struct CheckCommand {
    settings: Settings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the checklist with a custom env var lookup function.
    pub fn run_with_env<F>(&self, ui: &mut dyn UserInterface, env_fn: F) -> CommandResult
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let report = Checklist::with_env(&self.settings, env_fn).run(ui);

        if self.settings.strict && !report.all_passed() {
            tracing::debug!("Strict mode: failing the run");
            CommandResult::failure(STRICT_FAILURE_EXIT_CODE)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        Ok(self.run_with_env(ui, |key: &str| std::env::var(key)))
    }
}
