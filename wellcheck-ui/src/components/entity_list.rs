//! Entity List
//!
//! Loading, empty and populated states of one kind's list view.

use leptos::*;
use wellcheck::{ListState, Listed};

use crate::components::{CardView, Loading};
use crate::state::global::GlobalState;

/// List view for one entity kind
///
/// A failed load leaves the view idle, so nothing is shown.
pub fn entity_list<E: Listed>(state: GlobalState) -> impl IntoView {
    let kind = E::KIND;

    view! {
        <div class="space-y-3">
            {move || {
                state.lists.with(|lists| match E::slot(lists) {
                    ListState::Idle => view! {}.into_view(),
                    ListState::Loading => view! { <Loading /> }.into_view(),
                    ListState::Empty => view! {
                        <p class="empty-state text-center text-gray-400 py-8">
                            {kind.empty_message()}
                        </p>
                    }
                    .into_view(),
                    ListState::Populated(records) => records
                        .iter()
                        .map(|record| view! { <CardView card=record.card() /> })
                        .collect_view(),
                })
            }}
        </div>
    }
}
