//! Toast Notification Component
//!
//! Shows success and error messages. Toasts stack; each one removes itself
//! after its lifetime or when clicked.

use leptos::*;
use wellcheck::ToastKind;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.toasts.with(|toasts| {
                    toasts
                        .iter()
                        .map(|toast| view! {
                            <ToastMessage id=toast.id message=toast.message.clone() kind=toast.kind />
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    id: u64,
    #[prop(into)]
    message: String,
    kind: ToastKind,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, bg_class) = match kind {
        ToastKind::Success => ("✓", "bg-green-600"),
        ToastKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            on:click=move |_| state.dismiss_toast(id)
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
