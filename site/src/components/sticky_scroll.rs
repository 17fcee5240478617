//! Sticky-scroll showcase: copy scrolls on the left, illustration sticks

use leptos::prelude::*;

use super::{icon_path, Icon};
use crate::types::StickyScrollItem;

/// Steps with a sticky illustration beside the scrolling copy.
#[component]
pub fn StickyScroll(items: Vec<StickyScrollItem>) -> impl IntoView {
    view! {
        <div class="sticky-scroll">
            {items.into_iter().map(|item| view! {
                <div class="sticky-step">
                    <div class="sticky-copy">
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                    </div>
                    <div class="sticky-visual">
                        <Icon path=icon_path(item.icon) size="64" />
                        <span class="sticky-label">{item.label}</span>
                    </div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
