//! Placeholder-or-content rendering for deferred sections.
//!
//! [`deferred_slot`] is the only place a [`DeferredSection`] is rendered. It
//! pattern-matches the section's [`Deferred`] view, so a slot holds either the
//! placeholder or the content, never both. Failed sections get an empty,
//! tagged container: the page acts as their error boundary.

use leptos::prelude::*;

use super::{
    AnimatedTestimonials, BentoGrid, Faq, InfiniteLogoSlider, LinkPreview, PinContainer,
    StickyScroll,
};
use crate::deferred::{Deferred, DeferredSection, LoadState};
use crate::sections::LandingSections;

/// Render one deferred section with `ready` producing its content view.
pub fn deferred_slot<T: Send + Sync + 'static>(
    section: &DeferredSection<T>,
    ready: impl FnOnce(&T) -> AnyView,
) -> AnyView {
    let name = section.name();

    if section.state() == LoadState::Failed {
        return view! { <div class="deferred" data-section=name data-state="failed"></div> }
            .into_any();
    }

    match section.render() {
        Deferred::Pending => view! {
            <div class="deferred" data-section=name data-state="pending">
                <p class="deferred-placeholder">{section.placeholder()}</p>
            </div>
        }
        .into_any(),
        Deferred::Ready(content) => view! {
            <div class="deferred" data-section=name data-state="ready">
                {ready(content)}
            </div>
        }
        .into_any(),
    }
}

/// Rendered views of every deferred section, for one render pass.
pub struct SectionSlots {
    /// Partner logo slider
    pub logos: AnyView,
    /// Feature bento grid
    pub grid: AnyView,
    /// Sticky-scroll showcase
    pub scroll: AnyView,
    /// Testimonial carousel
    pub testimonials: AnyView,
    /// Research pin call-out
    pub pin: AnyView,
    /// FAQ list
    pub faq: AnyView,
    /// "Developed by" link preview
    pub preview: AnyView,
}

impl SectionSlots {
    /// Render every section once. Each call counts as a render attempt.
    pub fn render(sections: &LandingSections) -> Self {
        Self {
            logos: deferred_slot(&sections.logos, |logos| {
                view! { <InfiniteLogoSlider logos=logos.clone() /> }.into_any()
            }),
            grid: deferred_slot(&sections.grid, |items| {
                view! { <BentoGrid items=items.clone() /> }.into_any()
            }),
            scroll: deferred_slot(&sections.scroll, |items| {
                view! { <StickyScroll items=items.clone() /> }.into_any()
            }),
            testimonials: deferred_slot(&sections.testimonials, |testimonials| {
                view! { <AnimatedTestimonials testimonials=testimonials.clone() /> }.into_any()
            }),
            pin: deferred_slot(&sections.pin, |card| {
                view! { <PinContainer card=card.clone() /> }.into_any()
            }),
            faq: deferred_slot(&sections.faq, |entries| {
                view! { <Faq entries=entries.clone() /> }.into_any()
            }),
            preview: deferred_slot(&sections.preview, |card| {
                view! { <LinkPreview card=card.clone() /> }.into_any()
            }),
        }
    }
}
