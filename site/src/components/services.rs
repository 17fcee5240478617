//! "Our Services" grid - static cards linking to in-page anchors

use leptos::prelude::*;

use crate::types::ServiceCard;

/// The `#services` section.
#[component]
pub fn ServicesSection(cards: Vec<ServiceCard>) -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Our Services"</h2>
                <div class="services-grid">
                    {cards.into_iter().enumerate().map(|(idx, card)| {
                        view! {
                            <a
                                class="service-card"
                                href=card.link
                                data-card=format!("service-card-{}", idx)
                            >
                                <h4>{card.title}</h4>
                                <p>{card.description}</p>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
