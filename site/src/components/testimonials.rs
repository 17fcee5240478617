//! Testimonial carousel.
//!
//! Every quote is rendered; the first one starts active and the page script
//! rotates the `active` class when autoplay is on.

use leptos::prelude::*;

use crate::types::TestimonialEntry;

/// Quote carousel with prev/next controls.
#[component]
pub fn AnimatedTestimonials(
    testimonials: Vec<TestimonialEntry>,
    #[prop(default = true)] autoplay: bool,
) -> impl IntoView {
    let autoplay = if autoplay { "true" } else { "false" };

    view! {
        <div class="testimonials" data-carousel="testimonials" data-autoplay=autoplay>
            <div class="testimonial-track">
                {testimonials.into_iter().enumerate().map(|(idx, entry)| {
                    let class = if idx == 0 { "testimonial active" } else { "testimonial" };
                    view! {
                        <figure class=class data-index=idx.to_string()>
                            <img
                                class="testimonial-photo"
                                src=entry.src
                                alt=entry.name.clone()
                                width="500"
                                height="500"
                                loading="lazy"
                            />
                            <blockquote class="testimonial-quote">{entry.quote}</blockquote>
                            <figcaption>
                                <span class="testimonial-name">{entry.name}</span>
                                <span class="testimonial-role">{entry.designation}</span>
                            </figcaption>
                        </figure>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <div class="carousel-controls">
                <button class="carousel-btn" data-carousel-step="-1" aria-label="Previous testimonial">"←"</button>
                <button class="carousel-btn" data-carousel-step="1" aria-label="Next testimonial">"→"</button>
            </div>
        </div>
    }
}
