//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-package detail in addition to check status.
    Verbose,
    /// Show check status, fix guides, and the summary.
    #[default]
    Normal,
    /// Show check status lines only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` / `--silent` flags.
    ///
    /// The quietest flag given wins.
    pub fn from_flags(verbose: bool, quiet: bool, silent: bool) -> Self {
        if silent {
            Self::Silent
        } else if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-item detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows fix guides and progress.
    pub fn shows_guidance(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false, false), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, true, false), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, true, false), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(false, true, true), OutputMode::Silent);
    }

    #[test]
    fn output_mode_shows_detail() {
        assert!(OutputMode::Verbose.shows_detail());
        assert!(!OutputMode::Normal.shows_detail());
        assert!(!OutputMode::Quiet.shows_detail());
        assert!(!OutputMode::Silent.shows_detail());
    }

    #[test]
    fn output_mode_shows_guidance() {
        assert!(OutputMode::Verbose.shows_guidance());
        assert!(OutputMode::Normal.shows_guidance());
        assert!(!OutputMode::Quiet.shows_guidance());
        assert!(!OutputMode::Silent.shows_guidance());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
