//! 3D pin call-out

use leptos::prelude::*;

use crate::types::PinCard;

/// Tilted card that straightens on hover, with its link target shown above the title.
#[component]
pub fn PinContainer(card: PinCard) -> impl IntoView {
    let href = card.href.clone();

    view! {
        <div class="pin">
            <a class="pin-card" href=href>
                <span class="pin-href">{card.href}</span>
                <h3>{card.title}</h3>
                <p>{card.description}</p>
            </a>
            <div class="pin-beam" aria-hidden="true"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn link_target_is_both_href_and_label() {
        let card = PinCard {
            title: "Research Hub".into(),
            href: "#research".into(),
            description: "Shared datasets".into(),
        };
        let html = view! { <PinContainer card=card /> }.to_html();

        assert!(html.contains(r##"href="#research""##));
        assert!(html.contains(r##"<span class="pin-href">#research</span>"##));
        assert!(html.contains("Research Hub"));
    }
}
