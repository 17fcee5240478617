//! Link with a hover preview card

use leptos::prelude::*;

use crate::types::LinkPreviewCard;

/// Inline link that reveals a sized preview card on hover.
#[component]
pub fn LinkPreview(card: LinkPreviewCard) -> impl IntoView {
    let style = format!("width:{}px;height:{}px", card.width, card.height);
    let href = card.url.clone();

    view! {
        <span class="link-preview">
            <a class="link-preview-trigger" href=href target="_blank" rel="noopener noreferrer">
                {card.label}
            </a>
            <span class="link-preview-card" style=style>
                <span class="link-preview-url">{card.url}</span>
            </span>
        </span>
    }
}
