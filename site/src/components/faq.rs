//! FAQ accordion built on `<details>`, so it works without script

use leptos::prelude::*;

use crate::types::FaqEntry;

/// One collapsible entry per question.
#[component]
pub fn Faq(entries: Vec<FaqEntry>) -> impl IntoView {
    view! {
        <div class="faq">
            {entries.into_iter().map(|entry| view! {
                <details class="faq-item">
                    <summary>{entry.question}</summary>
                    <p>{entry.answer}</p>
                </details>
            }).collect::<Vec<_>>()}
        </div>
    }
}
