//! Non-interactive UI for CI/headless environments.

use super::{Guide, OutputMode, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Used in CI (detected via `is_ci()`) and whenever stdout is not a
/// terminal. Check lines use bracketed labels instead of styled icons
/// so the output stays greppable in logs.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_check(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", kind.format_plain(msg));
        }
    }

    fn show_detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("    {}", msg);
        }
    }

    fn show_guide(&mut self, guide: &Guide) {
        if self.mode.shows_guidance() {
            println!("ERROR: {}", guide.title);
            for line in &guide.lines {
                println!("    {}", line);
            }
        }
    }

    fn show_progress(&mut self, percent: u8, msg: &str) {
        if !self.mode.shows_guidance() {
            return;
        }
        if msg.is_empty() {
            println!("Progress: {}%.", percent);
        } else {
            println!("Progress: {}% - {}", percent, msg);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
