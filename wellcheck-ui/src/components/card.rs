//! Record Card Component
//!
//! DOM rendering of a core [`Card`].

use chrono::{Datelike, NaiveDateTime};
use leptos::*;
use wellcheck::Card;

/// One record in a list
#[component]
pub fn CardView(card: Card) -> impl IntoView {
    let right = card
        .date
        .map(locale_date)
        .or_else(|| card.status.map(str::to_string));

    view! {
        <div class=format!("{} bg-gray-800 rounded-lg p-4 border border-gray-700", card.class)>
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{card.heading}</h3>
                {right.map(|label| view! {
                    <span class="text-sm text-gray-400">{label}</span>
                })}
            </div>

            {(!card.badges.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-3 mt-2 text-sm">
                    {card.badges
                        .into_iter()
                        .map(|badge| view! { <span class="badge">{badge}</span> })
                        .collect_view()}
                </div>
            })}

            {card.lines
                .into_iter()
                .map(|line| view! {
                    <p class=format!("{} text-gray-300 mt-2", line.class)>{line.text}</p>
                })
                .collect_view()}

            {(!card.tags.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 mt-3">
                    {card.tags
                        .into_iter()
                        .map(|tag| view! {
                            <span class="tag bg-gray-700 text-xs px-2 py-1 rounded">{tag}</span>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// Calendar date in the browser's locale
fn locale_date(date: NaiveDateTime) -> String {
    let date = date.date();
    // JS months are zero-based
    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
