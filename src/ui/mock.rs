//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use venv_checker::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.show_check(StatusKind::Failed, "Virtual environment is not active");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_check(StatusKind::Failed, "not active"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{Guide, OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    checks: Vec<(StatusKind, String)>,
    details: Vec<String>,
    guides: Vec<Guide>,
    progress: Vec<(u8, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured check lines.
    pub fn checks(&self) -> &[(StatusKind, String)] {
        &self.checks
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all guides that were shown.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> &[(u8, String)] {
        &self.progress
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a check line of the given kind containing `msg` was shown.
    pub fn has_check(&self, kind: StatusKind, msg: &str) -> bool {
        self.checks.iter().any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Check if a guide whose title contains `title` was shown.
    pub fn has_guide(&self, title: &str) -> bool {
        self.guides.iter().any(|g| g.title.contains(title))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_check(&mut self, kind: StatusKind, msg: &str) {
        self.checks.push((kind, msg.to_string()));
    }

    fn show_detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn show_guide(&mut self, guide: &Guide) {
        self.guides.push(guide.clone());
    }

    fn show_progress(&mut self, percent: u8, msg: &str) {
        self.progress.push((percent, msg.to_string()));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
