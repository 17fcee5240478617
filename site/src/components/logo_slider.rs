//! Infinite partner-logo slider.
//!
//! The logo row is emitted twice so the CSS marquee can loop seamlessly; the
//! second copy is hidden from assistive technology.

use leptos::prelude::*;

use crate::types::PartnerLogo;

/// Looping marquee of partner logos.
#[component]
pub fn InfiniteLogoSlider(logos: Vec<PartnerLogo>) -> impl IntoView {
    let row = |logos: Vec<PartnerLogo>, hidden: bool| {
        let aria_hidden = if hidden { "true" } else { "false" };
        view! {
            <ul class="logo-row" aria-hidden=aria_hidden>
                {logos.into_iter().map(|logo| view! {
                    <li class="logo-item">
                        <img
                            src=logo.src
                            alt=logo.alt
                            width=logo.width.to_string()
                            height=logo.height.to_string()
                            loading="lazy"
                        />
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        }
    };

    view! {
        <div class="logo-slider">
            <div class="logo-track">
                {row(logos.clone(), false)}
                {row(logos, true)}
            </div>
        </div>
    }
}
