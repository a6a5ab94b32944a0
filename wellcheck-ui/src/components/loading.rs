//! Loading Component

use leptos::*;

/// List loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
