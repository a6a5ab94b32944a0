//! Entity Form
//!
//! Inline creation form generated from a kind's field table.

use leptos::*;
use wellcheck::annotate::humanize;
use wellcheck::{EntityKind, FieldKind, FieldSpec, Listed};

use crate::state::global::GlobalState;

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

/// Creation form for one entity kind
///
/// Validation happens on submit; an invalid form raises an error toast and
/// sends nothing.
pub fn entity_form<E: Listed>(state: GlobalState) -> impl IntoView {
    let kind = E::KIND;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(state.create::<E>());
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 mb-6 space-y-4">
            {E::FIELDS
                .iter()
                .map(|spec| view! { <FieldInput kind=kind spec=*spec /> })
                .collect_view()}

            <div class="flex space-x-2">
                <button
                    type="submit"
                    class="flex-1 bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "Save"
                </button>
                <button
                    type="button"
                    on:click=move |_| state.hide_form(kind)
                    class="px-6 bg-gray-600 hover:bg-gray-500 rounded-lg py-3 transition-colors"
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn FieldInput(kind: EntityKind, spec: FieldSpec) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let name = spec.name;

    let value = move || state.field(kind, name);
    let on_input = move |ev: web_sys::Event| state.set_field(kind, name, event_target_value(&ev));

    let input = match spec.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                name=name
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),
        FieldKind::TextArea => view! {
            <textarea
                name=name
                rows="3"
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),
        FieldKind::Number { step } => view! {
            <input
                type="number"
                name=name
                step=step
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),
        FieldKind::Range { min, max } => view! {
            <div class="flex items-center space-x-3">
                <input
                    type="range"
                    name=name
                    min=min.to_string()
                    max=max.to_string()
                    prop:value=value
                    on:input=on_input
                    class="flex-1"
                />
                <span class="w-8 text-center font-semibold">{value}</span>
            </div>
        }
        .into_view(),
        FieldKind::Select(options) => view! {
            <select name=name prop:value=value on:change=on_input class=INPUT_CLASS>
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{humanize(option)}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        FieldKind::Date => view! {
            <input type="date" name=name prop:value=value on:input=on_input class=INPUT_CLASS />
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {input}
        </div>
    }
}
