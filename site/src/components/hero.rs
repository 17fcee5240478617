//! Hero section - page title, tagline, calls to action

use leptos::prelude::*;

/// Full-height hero with the page title and calls to action.
#[component]
pub fn Hero(page_title: String) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-waves" aria-hidden="true"></div>
            <div class="container hero-content">
                <p class="hero-eyebrow">"Healthcare data platform"</p>
                <h1 class="hero-title">{page_title}</h1>
                <p class="hero-description">
                    "Access high-quality healthcare data to accelerate your research, "
                    "analytics, and ML projects."
                </p>
                <div class="hero-actions">
                    <a href="#services" class="btn btn-primary">"Explore services"</a>
                    <a href="#faq" class="btn btn-secondary">"Read the FAQ"</a>
                </div>
            </div>
        </section>
    }
}
