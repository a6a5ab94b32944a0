//! Tab Bar Component

use leptos::*;
use wellcheck::EntityKind;

use crate::state::global::GlobalState;

/// One button per entity kind; exactly one is active
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="flex space-x-1 border-b border-gray-700 mb-6">
            {EntityKind::ALL
                .into_iter()
                .map(|kind| view! { <TabButton kind=kind /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn TabButton(kind: EntityKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            type="button"
            data-tab=kind.tab_name()
            on:click=move |_| state.tabs.update(|tabs| tabs.select(kind))
            class=move || {
                let base = "tab-button px-4 py-2 rounded-t-lg text-sm font-medium transition-colors";
                if state.tabs.get().is_active(kind) {
                    format!("{} active bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white hover:bg-gray-800", base)
                }
            }
        >
            {kind.icon()}
            " "
            {kind.label()}
        </button>
    }
}
