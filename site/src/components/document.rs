//! Root document component - the complete landing page

use leptos::prelude::*;

use super::{Footer, Hero, SectionSlots, ServicesSection};
use crate::types::{ServiceCard, SocialLink};

/// The complete HTML document.
///
/// `head` is pre-rendered markup (metadata tags, styles, script); the body is
/// composed from static sections and the deferred slots of this render pass.
#[component]
pub fn LandingDocument(
    head: String,
    page_title: String,
    slots: SectionSlots,
    services: Vec<ServiceCard>,
    socials: Vec<SocialLink>,
) -> impl IntoView {
    let SectionSlots {
        logos,
        grid,
        scroll,
        testimonials,
        pin,
        faq,
        preview,
    } = slots;

    view! {
        <html lang="en">
            <head inner_html=head></head>
            <body>
                <div class="page">
                    <Hero page_title=page_title />

                    <section id="partners" class="partners">
                        <div class="container">
                            <p class="section-eyebrow">"Trusted by leading institutions"</p>
                            {logos}
                        </div>
                    </section>

                    <section id="features" class="features">
                        <div class="container">
                            <h2 class="section-title">"Everything your research needs"</h2>
                            {grid}
                        </div>
                    </section>

                    <section id="analytics" class="showcase">
                        <div class="container">{scroll}</div>
                    </section>

                    <section id="testimonials" class="testimonials-section">
                        <div class="container">
                            <h2 class="section-title">"What researchers say"</h2>
                            {testimonials}
                        </div>
                    </section>

                    <ServicesSection cards=services />

                    <section id="research" class="pin-section">
                        <div class="container">{pin}</div>
                    </section>

                    <section id="faq" class="faq-section">
                        <div class="container">
                            <h2 class="section-title">"Frequently asked questions"</h2>
                            {faq}
                        </div>
                    </section>

                    <div id="team" class="developed-by">
                        <p class="developed-by-label">"Developed by"</p>
                        {preview}
                    </div>

                    <Footer links=socials />
                </div>
            </body>
        </html>
    }
}
