//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments and piped output
//! - [`MockUI`] for capturing output in tests
//! - Fix guides, status icons and the color theme
//!
//! # Example
//!
//! ```
//! use venv_checker::ui::{create_ui, OutputMode, StatusKind};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Venv check");
//! ui.show_check(StatusKind::Passed, ".venv folder exists");
//! ```

pub mod guides;
pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use guides::Guide;
pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CheckerTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the result line of a single check.
    fn show_check(&mut self, kind: StatusKind, msg: &str);

    /// Show a secondary detail line (verbose mode only).
    fn show_detail(&mut self, msg: &str);

    /// Show a "how to fix" guide.
    fn show_guide(&mut self, guide: &Guide);

    /// Show overall progress through the checklist.
    fn show_progress(&mut self, percent: u8, msg: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
