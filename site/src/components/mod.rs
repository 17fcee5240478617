//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── Hero
//! ├── deferred: InfiniteLogoSlider   "Loading logos..."
//! ├── deferred: BentoGrid            "Loading grid..."
//! ├── deferred: StickyScroll         "Loading scroll content..."
//! ├── deferred: AnimatedTestimonials "Loading testimonials..."
//! ├── ServicesSection
//! ├── deferred: PinContainer         "Loading pin..."
//! ├── deferred: Faq                  "Loading FAQ..."
//! ├── deferred: LinkPreview          "Loading preview..."
//! └── Footer
//! ```
//!
//! Deferred sections go through [`deferred_slot`]; the rest render directly.

mod bento_grid;
mod deferred_slot;
mod document;
mod faq;
mod footer;
mod hero;
mod icons;
mod link_preview;
mod logo_slider;
mod pin;
mod services;
mod sticky_scroll;
mod testimonials;

pub use bento_grid::BentoGrid;
pub use deferred_slot::{deferred_slot, SectionSlots};
pub use document::LandingDocument;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use link_preview::LinkPreview;
pub use logo_slider::InfiniteLogoSlider;
pub use pin::PinContainer;
pub use services::ServicesSection;
pub use sticky_scroll::StickyScroll;
pub use testimonials::AnimatedTestimonials;
