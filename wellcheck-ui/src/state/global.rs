//! Global Application State
//!
//! Reactive state management using Leptos signals. Each signal wraps a core
//! view-state type, so the rules for list states, toasts, forms and the stats
//! panel live in `wellcheck` and are shared with the CLI.

use leptos::*;
use wellcheck::dashboard::{apply_list, apply_stats, create_failed, reload, Lists, StartupLoad};
use wellcheck::{
    fetch_list, submit, ClientError, DashboardStats, EntityKind, FormPanel, ListQuery, Listed,
    StatsPanel, TabController, ToastKind, Toasts,
};

use crate::api::HttpBackend;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Last successfully loaded dashboard summary
    pub stats: RwSignal<StatsPanel>,
    /// The four list views
    pub lists: RwSignal<Lists>,
    /// Creation forms, indexed by [`EntityKind::index`]
    pub forms: RwSignal<[FormPanel; 4]>,
    pub tabs: RwSignal<TabController>,
    pub toasts: RwSignal<Toasts>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        stats: create_rw_signal(StatsPanel::default()),
        lists: create_rw_signal(Lists::default()),
        forms: create_rw_signal(EntityKind::ALL.map(FormPanel::new)),
        tabs: create_rw_signal(TabController::default()),
        toasts: create_rw_signal(Toasts::default()),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Load stats and all four lists concurrently, then show the mood tab
    pub async fn start(self) {
        self.lists.update(|lists| {
            for kind in EntityKind::ALL {
                lists.set_loading(kind);
            }
        });

        let queries = [ListQuery::default(); 4];
        let load = StartupLoad::fetch(&HttpBackend::new(), &queries).await;
        self.store_stats(load.stats);
        let failures = self
            .lists
            .try_update(|lists| load.lists.apply(lists))
            .unwrap_or_default();
        for message in failures {
            self.show_error(message);
        }

        self.tabs.update(|tabs| tabs.select(EntityKind::Mood));
    }

    /// Reload one list from scratch
    pub async fn load_list<E: Listed>(self) {
        self.lists.update(|lists| lists.set_loading(E::KIND));
        let result = fetch_list::<E, _>(&HttpBackend::new(), &ListQuery::default()).await;
        self.store_list(result);
    }

    /// Submit the kind's form; on success hide it and reload list and stats
    pub async fn create<E: Listed>(self) {
        let kind = E::KIND;
        let values = self
            .forms
            .with_untracked(|forms| forms[kind.index()].values().clone());
        let backend = HttpBackend::new();

        if let Err(e) = submit::<E, _>(&backend, &values).await {
            log_error(&format!("Error saving {}: {}", kind, e));
            self.show_error(&create_failed(kind, &e));
            return;
        }

        self.show_success(kind.saved_message());
        self.hide_form(kind);

        self.lists.update(|lists| lists.set_loading(kind));
        let (list, stats) = reload::<E, _>(&backend, &ListQuery::default()).await;
        self.store_list(list);
        self.store_stats(stats);
    }

    fn store_stats(&self, result: Result<DashboardStats, ClientError>) {
        if let Err(e) = &result {
            log_error(&format!("Error loading stats: {}", e));
        }
        self.stats.update(|panel| apply_stats(panel, result));
    }

    fn store_list<E: Listed>(&self, result: Result<Vec<E>, ClientError>) {
        if let Err(e) = &result {
            log_error(&format!("Error loading {}: {}", E::KIND, e));
        }
        if let Some(Some(message)) = self.lists.try_update(|lists| apply_list(lists, result)) {
            self.show_error(message);
        }
    }

    /// Show a success message (auto-clears after the toast lifetime)
    pub fn show_success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    /// Show an error message (auto-clears after the toast lifetime)
    pub fn show_error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        let mut lifetime_ms = 0;
        self.toasts.update(|toasts| {
            id = toasts.push(kind, message);
            lifetime_ms = toasts.lifetime_ms();
        });

        let toasts = self.toasts;
        let delay = u32::try_from(lifetime_ms).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(delay, move || {
            toasts.update(|toasts| {
                toasts.dismiss(id);
                toasts.expire(chrono::Utc::now());
            });
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| {
            toasts.dismiss(id);
        });
    }

    pub fn show_form(&self, kind: EntityKind) {
        self.forms.update(|forms| forms[kind.index()].show());
    }

    pub fn hide_form(&self, kind: EntityKind) {
        self.forms.update(|forms| forms[kind.index()].hide());
    }

    pub fn set_field(&self, kind: EntityKind, name: &str, value: String) {
        self.forms.update(|forms| forms[kind.index()].set(name, &value));
    }

    /// Current value of one form field
    pub fn field(&self, kind: EntityKind, name: &str) -> String {
        self.forms
            .with(|forms| forms[kind.index()].values().get(name).to_string())
    }
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
