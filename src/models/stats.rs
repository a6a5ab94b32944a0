//! Dashboard summary

use serde::{Deserialize, Serialize};

/// GET /api/dashboard/stats
///
/// Only the first four fields are shown on the dashboard; the rest are
/// returned by the backend and kept for the CLI's JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_entries: u64,
    pub avg_mood: Option<f64>,
    pub total_journal_entries: u64,
    pub active_goals: u64,
    #[serde(default)]
    pub avg_energy: Option<f64>,
    #[serde(default)]
    pub avg_stress: Option<f64>,
    #[serde(default)]
    pub avg_sleep: Option<f64>,
    #[serde(default)]
    pub total_activities: u64,
    #[serde(default)]
    pub completed_goals: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"total_entries": 12, "avg_mood": null, "total_journal_entries": 4, "active_goals": 2}"#,
        )
        .unwrap();
        assert_eq!(stats.total_entries, 12);
        assert_eq!(stats.avg_mood, None);
        assert_eq!(stats.total_activities, 0);
    }
}
