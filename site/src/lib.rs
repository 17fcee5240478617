//! # datamaster-site
//!
//! Leptos SSR renderer for the DataMaster landing page.
//!
//! The page is rendered to static HTML in two passes. The first pass (the
//! *shell*) shows a placeholder for every deferred section and requests its
//! content; the requested sections then resolve concurrently; the second pass
//! renders the finished document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datamaster_site::config::{RuntimeMode, SiteConfig};
//! use datamaster_site::render_landing;
//!
//! # async fn build() {
//! let config = SiteConfig::for_mode(RuntimeMode::Development);
//! let page = render_landing(&config).await;
//! std::fs::write("index.html", &page.document).unwrap();
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - base URL, runtime mode and content source, resolved once
//! - [`metadata`] - document title, description and social previews
//! - [`deferred`] - per-section lazy loading state machine
//! - [`sections`] - the page's deferred sections and their loaders
//! - [`types`] / [`content`] - content model and built-in copy
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and client script
//!
//! ## Leptos 0.8 SSR
//!
//! Views are turned into strings with `RenderHtml::to_html`. No reactive
//! runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod deferred;
pub mod metadata;
pub mod sections;
pub mod styles;
pub mod types;

use components::{LandingDocument, SectionSlots};
use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use metadata::{PageMetadata, generate_metadata};
use sections::{LandingSections, SectionOutcome};
use styles::{LANDING_CSS, LANDING_SCRIPT};
use tracing::{debug, info};

/// Head markup: fixed tags, metadata tags, inline CSS and script.
pub fn document_head(meta: &PageMetadata) -> String {
    format!(
        "<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {}\n<style>{}</style>\n<script>{}</script>",
        meta.head_markup(),
        LANDING_CSS,
        LANDING_SCRIPT
    )
}

/// Render the complete HTML document for the sections' current state.
///
/// Rendering counts as a render attempt: every unresolved section is
/// requested and shows its placeholder.
///
/// # Example
///
/// ```rust
/// use datamaster_site::config::{ContentSource, RuntimeMode, SiteConfig};
/// use datamaster_site::metadata::generate_metadata;
/// use datamaster_site::render_document;
/// use datamaster_site::sections::LandingSections;
///
/// let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
/// let sections = LandingSections::new(&ContentSource::Builtin);
/// let html = render_document(&meta, &sections);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Loading testimonials..."));
/// ```
pub fn render_document(meta: &PageMetadata, sections: &LandingSections) -> String {
    let slots = SectionSlots::render(sections);
    let doc = view! {
        <LandingDocument
            head=document_head(meta)
            page_title=meta.page_title.clone()
            slots=slots
            services=content::service_cards()
            socials=content::social_links()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Result of a full two-pass render.
#[derive(Clone, Debug)]
pub struct RenderedLanding {
    /// Metadata the document was rendered with
    pub metadata: PageMetadata,
    /// First pass: placeholders for every deferred section
    pub shell: String,
    /// Second pass: resolved sections, failed ones left empty
    pub document: String,
    /// Per-section state, in page order
    pub outcomes: Vec<SectionOutcome>,
}

impl RenderedLanding {
    /// Sections that ended in the failed state.
    pub fn failed_sections(&self) -> impl Iterator<Item = &SectionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.state == deferred::LoadState::Failed)
    }
}

/// Produce metadata, render the shell, resolve the requested sections and
/// render the final document.
pub async fn render_landing(config: &SiteConfig) -> RenderedLanding {
    let metadata = generate_metadata(config);
    debug!(base_url = %metadata.base_url, "metadata ready");

    let sections = LandingSections::new(&config.content);
    let shell = render_document(&metadata, &sections);

    sections.resolve_requested().await;
    let document = render_document(&metadata, &sections);
    let outcomes = sections.outcomes();

    info!(
        resolved = outcomes
            .iter()
            .filter(|o| o.state == deferred::LoadState::Resolved)
            .count(),
        total = outcomes.len(),
        "landing page rendered"
    );

    RenderedLanding {
        metadata,
        shell,
        document,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentSource, Overrides, RuntimeMode};
    use crate::deferred::LoadState;
    use tempfile::TempDir;

    const PLACEHOLDERS: [&str; 7] = [
        "Loading testimonials...",
        "Loading logos...",
        "Loading FAQ...",
        "Loading pin...",
        "Loading preview...",
        "Loading grid...",
        "Loading scroll content...",
    ];

    #[test]
    fn renders_shell_with_every_placeholder() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Development));
        let sections = LandingSections::new(&ContentSource::Builtin);
        let html = render_document(&meta, &sections);

        assert!(html.starts_with("<!DOCTYPE html>"));
        for placeholder in PLACEHOLDERS {
            assert!(html.contains(placeholder), "missing {placeholder}");
        }
        assert!(!html.contains("Dr. Sarah Johnson"));
        assert!(!html.contains("Cleveland Clinic"));
        assert!(html.contains(r#"data-state="pending""#));
    }

    #[test]
    fn static_sections_render_immediately() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
        let sections = LandingSections::new(&ContentSource::Builtin);
        let html = render_document(&meta, &sections);

        assert!(html.contains("Accelerate Your Medical Research with DataMaster"));
        assert!(html.contains("Our Services"));
        assert!(html.contains("HIPAA Compliance"));
        assert!(html.contains(r##"href="#features""##));
    }

    #[test]
    fn every_service_link_lands_on_the_page() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
        let sections = LandingSections::new(&ContentSource::Builtin);
        let html = render_document(&meta, &sections);

        for card in content::service_cards() {
            let id = card.link.trim_start_matches('#');
            assert!(
                html.contains(&format!(r#"id="{id}""#)),
                "{} links to missing #{id}",
                card.title
            );
        }
    }

    #[test]
    fn head_carries_metadata() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
        let sections = LandingSections::new(&ContentSource::Builtin);
        let html = render_document(&meta, &sections);

        assert!(html.contains("<title>DataMaster - Medical Research Platform</title>"));
        assert!(html.contains(r#"<meta property="og:site_name" content="DataMaster">"#));
        assert!(html.contains(
            "https://datamaster.vercel.app/api/og?title=Accelerate%20Your%20Medical%20Research%20with%20DataMaster"
        ));
        assert!(html.contains(".logo-track"));
    }

    #[tokio::test]
    async fn two_pass_render_swaps_placeholders_for_content() {
        let page = render_landing(&SiteConfig::for_mode(RuntimeMode::Development)).await;

        for placeholder in PLACEHOLDERS {
            assert!(page.shell.contains(placeholder));
            assert!(!page.document.contains(placeholder), "{placeholder} left in document");
        }
        assert!(page.document.contains("Dr. Sarah Johnson"));
        assert!(page.document.contains("Massachusetts General Hospital"));
        assert!(page.document.contains("The Dawn of Innovation"));
        assert!(page.document.contains("Collaboration Network"));
        assert!(page.document.contains("DataMaster Research Hub"));
        assert!(page.document.contains("Is the platform HIPAA compliant?"));
        assert!(page.document.contains("DataMaster Development Team"));
        assert!(!page.document.contains(r#"data-state="pending""#));

        assert!(page.outcomes.iter().all(|o| o.state == LoadState::Resolved));
        assert_eq!(page.failed_sections().count(), 0);
    }

    #[tokio::test]
    async fn failed_section_renders_empty_boundary() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("testimonials.json"), "[{\"name\": 1}]").unwrap();

        let config = SiteConfig::resolve(Overrides {
            content_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        });
        let page = render_landing(&config).await;

        assert!(page.document.contains(r#"data-state="failed""#));
        assert!(page.document.contains(r#"data-section="testimonials""#));
        assert!(!page.document.contains("Loading testimonials..."));
        assert!(!page.document.contains("Dr. Sarah Johnson"));
        // the rest of the page is unaffected
        assert!(page.document.contains("Cleveland Clinic"));

        let failed: Vec<_> = page.failed_sections().map(|o| o.name).collect();
        assert_eq!(failed, vec!["testimonials"]);
    }
}
