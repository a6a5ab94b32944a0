//! Stats Header Component
//!
//! The four dashboard totals shown above the tabs.

use leptos::*;

use crate::state::global::GlobalState;

/// Stats header component
#[component]
pub fn StatsHeader() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let display = create_memo(move |_| state.stats.with(|panel| panel.display()));

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                id="total-entries"
                label="Total Check-ins"
                value=Signal::derive(move || display.get().total_entries)
            />
            <StatCard
                id="avg-mood"
                label="Average Mood"
                value=Signal::derive(move || display.get().avg_mood)
            />
            <StatCard
                id="journal-entries"
                label="Journal Entries"
                value=Signal::derive(move || display.get().journal_entries)
            />
            <StatCard
                id="active-goals"
                label="Active Goals"
                value=Signal::derive(move || display.get().active_goals)
            />
        </div>
    }
}

#[component]
fn StatCard(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div id=id class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
