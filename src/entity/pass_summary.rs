use serde::{Deserialize, Serialize};

/// Outcome of one sentinel pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub items_checked: usize,
    pub alerts_sent: usize,
    pub skipped: usize,
    pub cooling_down: usize,
    pub failed_sends: usize,
    pub failed_updates: usize,
}

impl std::fmt::Display for PassSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "checked={} alerts={} skipped={} cooling_down={} failed_sends={} failed_updates={}",
            self.items_checked,
            self.alerts_sent,
            self.skipped,
            self.cooling_down,
            self.failed_sends,
            self.failed_updates
        )
    }
}
