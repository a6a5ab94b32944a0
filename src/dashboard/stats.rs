//! Stats panel

use serde::Serialize;

use crate::models::DashboardStats;

/// Shown for a missing average
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder before the first successful load
const PENDING: &str = "-";

/// The four display fields of the stats panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDisplay {
    pub total_entries: String,
    pub avg_mood: String,
    pub journal_entries: String,
    pub active_goals: String,
}

impl StatsDisplay {
    pub fn pending() -> Self {
        Self {
            total_entries: PENDING.into(),
            avg_mood: PENDING.into(),
            journal_entries: PENDING.into(),
            active_goals: PENDING.into(),
        }
    }
}

impl From<&DashboardStats> for StatsDisplay {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_entries: stats.total_entries.to_string(),
            avg_mood: stats
                .avg_mood
                .map(|m| format!("{:.1}", m))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            journal_entries: stats.total_journal_entries.to_string(),
            active_goals: stats.active_goals.to_string(),
        }
    }
}

/// Last successfully loaded summary
///
/// A failed reload keeps whatever was shown before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsPanel {
    stats: Option<DashboardStats>,
}

impl StatsPanel {
    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn update(&mut self, stats: DashboardStats) {
        self.stats = Some(stats);
    }

    pub fn display(&self) -> StatsDisplay {
        self.stats
            .as_ref()
            .map(StatsDisplay::from)
            .unwrap_or_else(StatsDisplay::pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_avg_mood_is_na() {
        let stats = DashboardStats {
            total_entries: 3,
            avg_mood: None,
            total_journal_entries: 1,
            active_goals: 0,
            ..Default::default()
        };
        let display = StatsDisplay::from(&stats);
        assert_eq!(display.avg_mood, "N/A");
        assert_eq!(display.total_entries, "3");
    }

    #[test]
    fn test_avg_mood_one_decimal() {
        let stats = DashboardStats {
            avg_mood: Some(6.666),
            ..Default::default()
        };
        assert_eq!(StatsDisplay::from(&stats).avg_mood, "6.7");
    }

    #[test]
    fn test_pending_before_load() {
        assert_eq!(StatsPanel::default().display(), StatsDisplay::pending());
    }
}
