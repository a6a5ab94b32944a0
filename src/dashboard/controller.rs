//! Dashboard controller
//!
//! [`DashboardClient`] owns the view state of the whole dashboard (stats
//! panel, the four list views, their creation forms, the active tab and the
//! toast stack) and drives it against a [`Backend`].
//!
//! The client holds no authoritative data: after every successful create the
//! affected list and the stats panel are fetched again in full.

use crate::client::{fetch_list, fetch_stats, submit, Backend, ClientError, CreateError};
use crate::entity::{Entity, EntityKind, ListQuery, UnknownTab};
use crate::forms::FormValues;
use crate::models::{Activity, Goal, JournalEntry, MoodEntry};

use super::form::FormPanel;
use super::list::ListState;
use super::load::{apply_list, apply_stats, create_failed, reload, StartupLoad};
use super::stats::StatsPanel;
use super::tabs::TabController;
use super::toast::{Toasts, DEFAULT_TOAST_MS};

/// The four list views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lists {
    pub mood: ListState<MoodEntry>,
    pub journal: ListState<JournalEntry>,
    pub activities: ListState<Activity>,
    pub goals: ListState<Goal>,
}

impl Lists {
    /// Reset one view to `Loading`
    pub fn set_loading(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Mood => self.mood = ListState::Loading,
            EntityKind::Journal => self.journal = ListState::Loading,
            EntityKind::Activity => self.activities = ListState::Loading,
            EntityKind::Goal => self.goals = ListState::Loading,
        }
    }
}

/// Entity with a list view slot on the dashboard
pub trait Listed: Entity {
    fn slot(lists: &Lists) -> &ListState<Self>;
    fn slot_mut(lists: &mut Lists) -> &mut ListState<Self>;
}

impl Listed for MoodEntry {
    fn slot(lists: &Lists) -> &ListState<Self> {
        &lists.mood
    }
    fn slot_mut(lists: &mut Lists) -> &mut ListState<Self> {
        &mut lists.mood
    }
}

impl Listed for JournalEntry {
    fn slot(lists: &Lists) -> &ListState<Self> {
        &lists.journal
    }
    fn slot_mut(lists: &mut Lists) -> &mut ListState<Self> {
        &mut lists.journal
    }
}

impl Listed for Activity {
    fn slot(lists: &Lists) -> &ListState<Self> {
        &lists.activities
    }
    fn slot_mut(lists: &mut Lists) -> &mut ListState<Self> {
        &mut lists.activities
    }
}

impl Listed for Goal {
    fn slot(lists: &Lists) -> &ListState<Self> {
        &lists.goals
    }
    fn slot_mut(lists: &mut Lists) -> &mut ListState<Self> {
        &mut lists.goals
    }
}

/// Startup and display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Tab activated once startup settles
    pub default_tab: EntityKind,
    pub toast_lifetime_ms: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_tab: EntityKind::Mood,
            toast_lifetime_ms: DEFAULT_TOAST_MS,
        }
    }
}

/// Dashboard controller over a backend transport
pub struct DashboardClient<B> {
    backend: B,
    stats: StatsPanel,
    lists: Lists,
    forms: [FormPanel; 4],
    queries: [ListQuery; 4],
    tabs: TabController,
    toasts: Toasts,
    started: bool,
    settings: DashboardSettings,
}

impl<B: Backend> DashboardClient<B> {
    pub fn new(backend: B, settings: DashboardSettings) -> Self {
        Self {
            backend,
            stats: StatsPanel::default(),
            lists: Lists::default(),
            forms: EntityKind::ALL.map(FormPanel::new),
            queries: [ListQuery::default(); 4],
            tabs: TabController::new(settings.default_tab),
            toasts: Toasts::new(settings.toast_lifetime_ms),
            started: false,
            settings,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// True once the startup fetches have settled
    pub fn is_started(&self) -> bool {
        self.started
    }

    // ---- state accessors ----

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn lists(&self) -> &Lists {
        &self.lists
    }

    pub fn list<E: Listed>(&self) -> &ListState<E> {
        E::slot(&self.lists)
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn form(&self, kind: EntityKind) -> &FormPanel {
        &self.forms[kind.index()]
    }

    pub fn query(&self, kind: EntityKind) -> &ListQuery {
        &self.queries[kind.index()]
    }

    // ---- synchronous UI actions ----

    pub fn select_tab(&mut self, name: &str) -> Result<EntityKind, UnknownTab> {
        self.tabs.select_by_name(name)
    }

    pub fn show_form(&mut self, kind: EntityKind) {
        self.forms[kind.index()].show();
    }

    pub fn hide_form(&mut self, kind: EntityKind) {
        self.forms[kind.index()].hide();
    }

    pub fn set_field(&mut self, kind: EntityKind, name: &str, value: &str) {
        self.forms[kind.index()].set(name, value);
    }

    pub fn fill_form(&mut self, kind: EntityKind, values: &FormValues) {
        self.forms[kind.index()].fill(values);
    }

    /// Paging used by subsequent loads of this kind
    pub fn set_query(&mut self, kind: EntityKind, query: ListQuery) {
        self.queries[kind.index()] = query;
    }

    // ---- backend actions ----

    /// Load stats and all four lists concurrently, then show the default tab
    ///
    /// Each failing list reports its own toast; a stats failure is only
    /// logged. Nothing is retried.
    pub async fn start(&mut self) {
        for kind in EntityKind::ALL {
            self.lists.set_loading(kind);
        }

        let load = StartupLoad::fetch(&self.backend, &self.queries).await;
        apply_stats(&mut self.stats, load.stats);
        for message in load.lists.apply(&mut self.lists) {
            self.toasts.error(message);
        }

        self.tabs.select(self.settings.default_tab);
        self.started = true;

        tracing::info!(
            tab = %self.settings.default_tab,
            errors = self.toasts.errors().count(),
            "Dashboard ready"
        );
    }

    /// Refresh the stats panel; failures are logged only
    pub async fn load_stats(&mut self) {
        let result = fetch_stats(&self.backend).await;
        apply_stats(&mut self.stats, result);
    }

    /// Reload one list from scratch
    pub async fn load<E: Listed>(&mut self) {
        self.lists.set_loading(E::KIND);
        let result = fetch_list::<E, B>(&self.backend, &self.queries[E::KIND.index()]).await;
        self.store_list(result);
    }

    /// Submit the kind's form
    ///
    /// Invalid forms are rejected before any request. On success the form is
    /// hidden and reset, then the list and stats are each reloaded once.
    pub async fn create<E: Listed>(&mut self) -> Result<E, CreateError> {
        let kind = E::KIND;
        let values = self.forms[kind.index()].values().clone();

        let record = match submit::<E, B>(&self.backend, &values).await {
            Ok(record) => record,
            Err(e) => {
                self.toasts.error(create_failed(kind, &e));
                return Err(e);
            }
        };

        self.toasts.success(kind.saved_message());
        self.hide_form(kind);

        self.lists.set_loading(kind);
        let (list, stats) = reload::<E, B>(&self.backend, &self.queries[kind.index()]).await;
        self.store_list(list);
        apply_stats(&mut self.stats, stats);

        Ok(record)
    }

    fn store_list<E: Listed>(&mut self, result: Result<Vec<E>, ClientError>) {
        if let Some(message) = apply_list(&mut self.lists, result) {
            self.toasts.error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::JsonResponse;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned responses keyed by (method, path); unknown routes fail with 404
    #[derive(Default)]
    struct MockBackend {
        routes: HashMap<(&'static str, String), Result<Value, ClientError>>,
        requests: RefCell<Vec<(&'static str, String)>>,
    }

    impl MockBackend {
        fn with_empty_lists() -> Self {
            Self::default()
                .route("GET", "/api/dashboard/stats", Ok(stats_body()))
                .route("GET", "/api/mood", Ok(json!({"entries": [], "total": 0})))
                .route("GET", "/api/journal", Ok(json!({"entries": [], "total": 0})))
                .route("GET", "/api/activities", Ok(json!({"activities": [], "total": 0})))
                .route("GET", "/api/goals", Ok(json!({"goals": [], "total": 0})))
        }

        fn route(mut self, method: &'static str, path: &str, response: Result<Value, ClientError>) -> Self {
            self.routes.insert((method, path.to_string()), response);
            self
        }

        fn respond(&self, method: &'static str, path: &str) -> Result<JsonResponse, ClientError> {
            self.requests.borrow_mut().push((method, path.to_string()));
            match self.routes.get(&(method, path.to_string())) {
                Some(Ok(body)) => Ok(JsonResponse::new(200, body.clone())),
                Some(Err(e)) => Err(e.clone()),
                None => Err(ClientError::Api { status: 404, message: None }),
            }
        }

        fn count(&self, method: &str, path: &str) -> usize {
            self.requests
                .borrow()
                .iter()
                .filter(|(m, p)| *m == method && p == path)
                .count()
        }

        fn total(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn get_json(&self, path: &str) -> Result<JsonResponse, ClientError> {
            self.respond("GET", path)
        }

        async fn post_json(&self, path: &str, _body: &Value) -> Result<JsonResponse, ClientError> {
            self.respond("POST", path)
        }
    }

    fn stats_body() -> Value {
        json!({
            "total_entries": 2,
            "avg_mood": null,
            "total_journal_entries": 0,
            "active_goals": 1
        })
    }

    fn mood_record() -> Value {
        json!({
            "id": 1,
            "date": "2024-03-01T09:30:00",
            "mood_level": 8,
            "energy_level": 6,
            "stress_level": 3,
            "sleep_hours": 7.5,
            "notes": null,
            "created_at": "2024-03-01T09:30:00"
        })
    }

    fn dashboard(backend: MockBackend) -> DashboardClient<MockBackend> {
        DashboardClient::new(backend, DashboardSettings::default())
    }

    #[tokio::test]
    async fn test_start_issues_five_requests_and_selects_default_tab() {
        let mut dash = DashboardClient::new(
            MockBackend::with_empty_lists(),
            DashboardSettings {
                default_tab: EntityKind::Journal,
                ..Default::default()
            },
        );
        dash.start().await;

        assert!(dash.is_started());
        assert_eq!(dash.backend().total(), 5);
        assert_eq!(dash.tabs().active(), EntityKind::Journal);
        assert!(dash.toasts().is_empty());
        assert!(dash.list::<Goal>().shows_empty());
        assert_eq!(dash.stats().display().avg_mood, "N/A");
        assert_eq!(dash.stats().display().active_goals, "1");
    }

    #[tokio::test]
    async fn test_failed_list_reports_one_toast_and_goes_idle() {
        let backend = MockBackend::with_empty_lists().route(
            "GET",
            "/api/goals",
            Err(ClientError::Network("connection refused".into())),
        );
        let mut dash = dashboard(backend);
        dash.start().await;

        assert_eq!(dash.list::<Goal>(), &ListState::Idle);
        assert!(!dash.list::<Goal>().shows_empty());
        let errors: Vec<_> = dash.toasts().errors().map(|t| t.message.clone()).collect();
        assert_eq!(errors, vec!["Failed to load goals".to_string()]);
        assert!(dash.list::<MoodEntry>().shows_empty());
    }

    #[tokio::test]
    async fn test_stats_failure_is_silent_and_keeps_previous() {
        let mut dash = dashboard(MockBackend::with_empty_lists());
        dash.start().await;
        assert_eq!(dash.stats().display().total_entries, "2");

        dash.backend = MockBackend::with_empty_lists().route(
            "GET",
            "/api/dashboard/stats",
            Err(ClientError::Api { status: 500, message: None }),
        );
        dash.load_stats().await;

        assert_eq!(dash.stats().display().total_entries, "2");
        assert!(dash.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_mood_sends_nothing() {
        for level in ["0", "11"] {
            let mut dash = dashboard(MockBackend::with_empty_lists());
            dash.show_form(EntityKind::Mood);
            dash.set_field(EntityKind::Mood, "mood_level", level);

            let err = dash.create::<MoodEntry>().await.unwrap_err();
            assert!(matches!(err, CreateError::Invalid(_)));
            assert_eq!(dash.backend().total(), 0);
            assert_eq!(dash.toasts().errors().count(), 1);
            assert!(dash.form(EntityKind::Mood).is_visible());
        }
    }

    #[tokio::test]
    async fn test_empty_journal_content_sends_nothing() {
        let mut dash = dashboard(MockBackend::with_empty_lists());
        dash.show_form(EntityKind::Journal);
        dash.set_field(EntityKind::Journal, "title", "Morning pages");
        dash.set_field(EntityKind::Journal, "content", "   ");

        assert!(dash.create::<JournalEntry>().await.is_err());
        assert_eq!(dash.backend().count("POST", "/api/journal"), 0);
    }

    #[tokio::test]
    async fn test_successful_create_reloads_list_and_stats_once() {
        let backend = MockBackend::with_empty_lists()
            .route("POST", "/api/mood", Ok(mood_record()))
            .route("GET", "/api/mood", Ok(json!({"entries": [mood_record()], "total": 1})));
        let mut dash = dashboard(backend);
        dash.show_form(EntityKind::Mood);
        dash.set_field(EntityKind::Mood, "mood_level", "8");
        dash.set_field(EntityKind::Mood, "sleep_hours", "7.5");

        let created = dash.create::<MoodEntry>().await.unwrap();
        assert_eq!(created.mood_level, 8);

        let backend = dash.backend();
        assert_eq!(backend.count("POST", "/api/mood"), 1);
        assert_eq!(backend.count("GET", "/api/mood"), 1);
        assert_eq!(backend.count("GET", "/api/dashboard/stats"), 1);
        assert_eq!(backend.total(), 3);

        let form = dash.form(EntityKind::Mood);
        assert!(!form.is_visible());
        assert_eq!(form.values().get("mood_level"), "5");
        assert_eq!(form.values().get("sleep_hours"), "");

        assert_eq!(dash.list::<MoodEntry>().records().len(), 1);
        let messages: Vec<_> = dash.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Mood entry saved successfully!"]);
    }

    #[tokio::test]
    async fn test_rejected_create_uses_server_detail() {
        let backend = MockBackend::with_empty_lists().route(
            "POST",
            "/api/goals",
            Err(ClientError::Api {
                status: 422,
                message: Some("target_value must be positive".into()),
            }),
        );
        let mut dash = dashboard(backend);
        dash.show_form(EntityKind::Goal);
        dash.set_field(EntityKind::Goal, "title", "Run more");
        dash.set_field(EntityKind::Goal, "goal_type", "weekly");

        assert!(dash.create::<Goal>().await.is_err());
        let errors: Vec<_> = dash.toasts().errors().map(|t| t.message.as_str()).collect();
        assert_eq!(errors, vec!["target_value must be positive"]);
        assert!(dash.form(EntityKind::Goal).is_visible());
        assert_eq!(dash.backend().count("GET", "/api/goals"), 0);
    }

    #[tokio::test]
    async fn test_network_failure_on_create_uses_fallback() {
        let backend = MockBackend::with_empty_lists().route(
            "POST",
            "/api/activities",
            Err(ClientError::Network("timed out".into())),
        );
        let mut dash = dashboard(backend);
        dash.set_field(EntityKind::Activity, "activity_type", "walking");

        assert!(dash.create::<Activity>().await.is_err());
        let errors: Vec<_> = dash.toasts().errors().map(|t| t.message.as_str()).collect();
        assert_eq!(errors, vec!["Failed to log activity"]);
    }

    #[tokio::test]
    async fn test_query_applies_to_loads() {
        let backend = MockBackend::with_empty_lists()
            .route("GET", "/api/goals?include_completed=false", Ok(json!({"goals": []})));
        let mut dash = dashboard(backend);
        dash.set_query(
            EntityKind::Goal,
            ListQuery {
                include_completed: Some(false),
                ..Default::default()
            },
        );
        dash.load::<Goal>().await;

        assert_eq!(dash.backend().count("GET", "/api/goals?include_completed=false"), 1);
        assert!(dash.list::<Goal>().shows_empty());
    }

    #[test]
    fn test_select_unknown_tab() {
        let mut dash = dashboard(MockBackend::default());
        assert!(dash.select_tab("settings").is_err());
        assert_eq!(dash.select_tab("activities").unwrap(), EntityKind::Activity);
        assert!(dash.tabs().is_active(EntityKind::Activity));
    }
}
