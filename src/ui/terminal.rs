//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, CheckerTheme, Guide, NonInteractiveUI, OutputMode, StatusKind,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: CheckerTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CheckerTheme::new()
        } else {
            CheckerTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_check(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn show_detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "      {}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn show_guide(&mut self, guide: &Guide) {
        if !self.mode.shows_guidance() {
            return;
        }
        let b = &self.theme.border;
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("┌─"),
            self.theme.hint.apply_to(&guide.title)
        )
        .ok();
        for line in &guide.lines {
            let styled = if line.starts_with("   ") {
                self.theme.command.apply_to(line.as_str()).to_string()
            } else {
                line.clone()
            };
            writeln!(self.term, "    {} {}", b.apply_to("│"), styled).ok();
        }
        writeln!(
            self.term,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn show_progress(&mut self, percent: u8, msg: &str) {
        if self.mode.shows_guidance() {
            writeln!(
                self.term,
                "  {} {}",
                self.theme.format_progress(percent),
                self.theme.dim.apply_to(msg)
            )
            .ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new(OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn create_ui_non_interactive_is_not_interactive() {
        let ui = create_ui(false, OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
