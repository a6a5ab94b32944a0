//! App Root Component
//!
//! Stats header, tab bar, one panel per entity kind and the toast stack.

use leptos::*;
use wellcheck::{Activity, Goal, JournalEntry, Listed, MoodEntry};

use crate::api;
use crate::components::{entity_form, entity_list, StatsHeader, TabBar, Toast};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Stats and all four lists, once on mount
    create_effect(move |_| {
        spawn_local(state.start());
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 py-6 space-y-6">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🌱"</span>
                        <span class="text-xl font-bold text-white">"Wellcheck"</span>
                    </div>
                    <StatsHeader />
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <TabBar />
                {entity_panel::<MoodEntry>(state)}
                {entity_panel::<JournalEntry>(state)}
                {entity_panel::<Activity>(state)}
                {entity_panel::<Goal>(state)}
            </main>

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Tab panel: add button, inline form and list for one kind
fn entity_panel<E: Listed>(state: GlobalState) -> impl IntoView {
    let kind = E::KIND;

    view! {
        <section
            id=format!("{}-tab", kind.tab_name())
            class=move || {
                if state.tabs.get().is_active(kind) {
                    "tab-content active"
                } else {
                    "tab-content hidden"
                }
            }
        >
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">{kind.icon()} " " {kind.label()}</h2>
                <button
                    type="button"
                    id=format!("add-{}-btn", kind.tab_name())
                    on:click=move |_| state.show_form(kind)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    class:hidden=move || state.forms.with(|forms| forms[kind.index()].is_visible())
                >
                    {kind.add_label()}
                </button>
            </div>

            {move || {
                if state.forms.with(|forms| forms[kind.index()].is_visible()) {
                    entity_form::<E>(state).into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {entity_list::<E>(state)}
        </section>
    }
}

/// Footer with the API origin override
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        state.show_success("API URL saved");
        spawn_local(state.start());
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center space-x-2 text-sm">
                <label class="text-gray-400">"API"</label>
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-3 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </footer>
    }
}
