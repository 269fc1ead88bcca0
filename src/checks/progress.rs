//! Checklist progress tracking.
//!
//! Each passed check awards points; the three checks add up to 100.

/// Points for the venv folder existing.
pub const EXISTENCE_POINTS: u8 = 33;
/// Points for the venv being active.
pub const ACTIVATION_POINTS: u8 = 33;
/// Points for every declared package being installed.
pub const MANIFEST_POINTS: u8 = 34;

/// Accumulated progress through the checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    percent: u8,
}

impl Progress {
    /// Start at 0%.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points for a passed check, saturating at 100.
    pub fn award(&mut self, points: u8) {
        self.percent = self.percent.saturating_add(points).min(100);
    }

    /// Current percentage.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether every check has passed.
    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }

    /// Encouragement for the milestones; empty otherwise.
    pub fn milestone(&self) -> &'static str {
        match self.percent {
            33 => "You're 1/3 done - good start!",
            66 => "You're 2/3 done - almost there!",
            100 => "100% completed - all checks passed. Nice work!",
            _ => "",
        }
    }
}
