//! Fetch results into view state
//!
//! Shared by [`DashboardClient`](super::DashboardClient) and the browser
//! dashboard, which keeps the same view state in reactive signals. The
//! functions here only touch plain state; raising toasts is left to the
//! caller so each front end can schedule their dismissal its own way.

use crate::client::{fetch_list, fetch_stats, Backend, ClientError, CreateError};
use crate::entity::{EntityKind, ListQuery};
use crate::models::{Activity, DashboardStats, Goal, JournalEntry, MoodEntry};

use super::controller::{Listed, Lists};
use super::list::ListState;
use super::stats::StatsPanel;

/// Store a stats result; a failure keeps the previous values
pub fn apply_stats(panel: &mut StatsPanel, result: Result<DashboardStats, ClientError>) {
    match result {
        Ok(stats) => panel.update(stats),
        Err(e) => tracing::warn!(error = %e, "Error loading dashboard stats"),
    }
}

/// Store a list result
///
/// Returns the error toast to raise when the load failed; the view is then
/// back to `Idle`.
pub fn apply_list<E: Listed>(
    lists: &mut Lists,
    result: Result<Vec<E>, ClientError>,
) -> Option<&'static str> {
    let slot = E::slot_mut(lists);
    match result {
        Ok(records) => {
            tracing::debug!(kind = %E::KIND, count = records.len(), "List loaded");
            *slot = ListState::loaded(records);
            None
        }
        Err(e) => {
            tracing::warn!(kind = %E::KIND, error = %e, "List load failed");
            *slot = ListState::Idle;
            Some(E::KIND.load_failed_message())
        }
    }
}

/// Toast text for a failed create
pub fn create_failed(kind: EntityKind, error: &CreateError) -> String {
    tracing::warn!(kind = %kind, error = %error, "Create failed");
    error.toast_message(kind.save_failed_message())
}

/// Reload one list and the stats concurrently, once each
pub async fn reload<E: Listed, B: Backend + ?Sized>(
    backend: &B,
    query: &ListQuery,
) -> (Result<Vec<E>, ClientError>, Result<DashboardStats, ClientError>) {
    futures_util::join!(fetch_list::<E, B>(backend, query), fetch_stats(backend))
}

/// Results of the five startup fetches
pub struct StartupLoad {
    pub stats: Result<DashboardStats, ClientError>,
    pub lists: ListLoad,
}

/// One list result per kind
pub struct ListLoad {
    pub mood: Result<Vec<MoodEntry>, ClientError>,
    pub journal: Result<Vec<JournalEntry>, ClientError>,
    pub activities: Result<Vec<Activity>, ClientError>,
    pub goals: Result<Vec<Goal>, ClientError>,
}

impl StartupLoad {
    /// Issue the stats request and all four list requests at once
    pub async fn fetch<B: Backend + ?Sized>(backend: &B, queries: &[ListQuery; 4]) -> Self {
        let (stats, mood, journal, activities, goals) = futures_util::join!(
            fetch_stats(backend),
            fetch_list::<MoodEntry, B>(backend, &queries[EntityKind::Mood.index()]),
            fetch_list::<JournalEntry, B>(backend, &queries[EntityKind::Journal.index()]),
            fetch_list::<Activity, B>(backend, &queries[EntityKind::Activity.index()]),
            fetch_list::<Goal, B>(backend, &queries[EntityKind::Goal.index()]),
        );

        Self {
            stats,
            lists: ListLoad {
                mood,
                journal,
                activities,
                goals,
            },
        }
    }
}

impl ListLoad {
    /// Store all four results; returns one toast per failed list, in tab order
    pub fn apply(self, lists: &mut Lists) -> Vec<&'static str> {
        [
            apply_list(lists, self.mood),
            apply_list(lists, self.journal),
            apply_list(lists, self.activities),
            apply_list(lists, self.goals),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;

    fn stats(total_entries: u64) -> DashboardStats {
        DashboardStats {
            total_entries,
            avg_mood: Some(7.0),
            ..Default::default()
        }
    }

    fn refused() -> ClientError {
        ClientError::Network("connection refused".into())
    }

    #[test]
    fn test_failed_list_goes_idle_with_one_toast() {
        let mut lists = Lists::default();
        lists.set_loading(EntityKind::Journal);

        let toast = apply_list::<JournalEntry>(&mut lists, Err(refused()));
        assert_eq!(toast, Some("Failed to load journal entries"));
        assert_eq!(lists.journal, ListState::Idle);
        assert!(!lists.journal.shows_empty());
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut lists = Lists::default();
        assert_eq!(apply_list::<Goal>(&mut lists, Ok(Vec::new())), None);
        assert!(lists.goals.shows_empty());
    }

    #[test]
    fn test_stats_failure_keeps_previous() {
        let mut panel = StatsPanel::default();
        apply_stats(&mut panel, Ok(stats(4)));
        apply_stats(&mut panel, Err(ClientError::Api { status: 500, message: None }));
        assert_eq!(panel.display().total_entries, "4");
    }

    #[test]
    fn test_startup_results_toast_per_failed_list() {
        let load = ListLoad {
            mood: Ok(Vec::new()),
            journal: Err(refused()),
            activities: Ok(Vec::new()),
            goals: Err(refused()),
        };

        let mut lists = Lists::default();
        let toasts = load.apply(&mut lists);
        assert_eq!(toasts, vec!["Failed to load journal entries", "Failed to load goals"]);
        assert!(lists.mood.shows_empty());
        assert_eq!(lists.goals, ListState::Idle);
    }

    #[test]
    fn test_create_failed_message() {
        let invalid = CreateError::Invalid(ValidationError::Required {
            field: "content".into(),
        });
        assert_eq!(
            create_failed(EntityKind::Journal, &invalid),
            invalid.toast_message("Failed to save journal entry")
        );

        let network = CreateError::Client(refused());
        assert_eq!(create_failed(EntityKind::Activity, &network), "Failed to log activity");
    }
}
