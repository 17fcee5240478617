//! Bento feature grid

use leptos::prelude::*;

use super::{icon_path, Icon};
use crate::types::FeatureItem;

/// Feature tiles in a three-column grid.
#[component]
pub fn BentoGrid(items: Vec<FeatureItem>) -> impl IntoView {
    view! {
        <div class="bento-grid">
            {items.into_iter().enumerate().map(|(idx, item)| {
                // 4th and 7th tiles span two columns
                let class = if idx == 3 || idx == 6 { "bento-item wide" } else { "bento-item" };
                view! {
                    <article class=class>
                        <div class="bento-header"></div>
                        <div class="bento-body">
                            <Icon path=icon_path(item.icon) class="bento-icon" />
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    </article>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
