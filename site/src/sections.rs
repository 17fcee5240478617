//! The page's deferred sections and their loaders.
//!
//! Each section loads built-in copy, or `<content_dir>/<file>.json` when a
//! content directory is configured. A missing file falls back to the built-in
//! copy; an unreadable or malformed file fails that section only.

use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ContentSource;
use crate::content;
use crate::deferred::{DeferredSection, LoadError, LoadState};
use crate::types::{
    FaqEntry, FeatureItem, LinkPreviewCard, PartnerLogo, PinCard, StickyScrollItem,
    TestimonialEntry,
};

/// Every lazily loaded section of the landing page.
#[derive(Debug)]
pub struct LandingSections {
    /// Testimonial carousel
    pub testimonials: DeferredSection<Vec<TestimonialEntry>>,
    /// Partner logos
    pub logos: DeferredSection<Vec<PartnerLogo>>,
    /// FAQ
    pub faq: DeferredSection<Vec<FaqEntry>>,
    /// Research pin
    pub pin: DeferredSection<PinCard>,
    /// "Developed by" preview
    pub preview: DeferredSection<LinkPreviewCard>,
    /// Bento grid
    pub grid: DeferredSection<Vec<FeatureItem>>,
    /// Sticky-scroll showcase
    pub scroll: DeferredSection<Vec<StickyScrollItem>>,
}

/// Settled state of one section after a resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Section name
    pub name: &'static str,
    /// State after resolution
    pub state: LoadState,
    /// Failure message, if it failed
    pub error: Option<String>,
}

impl LandingSections {
    /// Build unresolved sections loading from `source`.
    pub fn new(source: &ContentSource) -> Self {
        Self {
            testimonials: section(
                "testimonials",
                "Loading testimonials...",
                source,
                "testimonials.json",
                content::testimonials,
            ),
            logos: section(
                "logos",
                "Loading logos...",
                source,
                "logos.json",
                content::partner_logos,
            ),
            faq: section("faq", "Loading FAQ...", source, "faq.json", content::faq_entries),
            pin: section("pin", "Loading pin...", source, "pin.json", content::pin_card),
            preview: section(
                "preview",
                "Loading preview...",
                source,
                "preview.json",
                content::link_preview,
            ),
            grid: section(
                "grid",
                "Loading grid...",
                source,
                "grid.json",
                content::feature_items,
            ),
            scroll: section(
                "scroll",
                "Loading scroll content...",
                source,
                "scroll.json",
                content::sticky_scroll_items,
            ),
        }
    }

    /// Resolve every section a render has requested, concurrently and
    /// independently. Returns once all of them have settled.
    pub async fn resolve_requested(&self) {
        let pending = vec![
            self.testimonials.resolve_if_requested().boxed_local(),
            self.logos.resolve_if_requested().boxed_local(),
            self.faq.resolve_if_requested().boxed_local(),
            self.pin.resolve_if_requested().boxed_local(),
            self.preview.resolve_if_requested().boxed_local(),
            self.grid.resolve_if_requested().boxed_local(),
            self.scroll.resolve_if_requested().boxed_local(),
        ];
        debug!(sections = pending.len(), "resolving requested sections");
        join_all(pending).await;
    }

    /// Per-section state, in page order.
    pub fn outcomes(&self) -> Vec<SectionOutcome> {
        vec![
            outcome(&self.logos),
            outcome(&self.grid),
            outcome(&self.scroll),
            outcome(&self.testimonials),
            outcome(&self.pin),
            outcome(&self.faq),
            outcome(&self.preview),
        ]
    }
}

fn outcome<T: Send + Sync + 'static>(section: &DeferredSection<T>) -> SectionOutcome {
    SectionOutcome {
        name: section.name(),
        state: section.state(),
        error: section.error().map(ToString::to_string),
    }
}

fn section<T>(
    name: &'static str,
    placeholder: &'static str,
    source: &ContentSource,
    file: &'static str,
    builtin: fn() -> T,
) -> DeferredSection<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let path = match source {
        ContentSource::Builtin => None,
        ContentSource::Directory(dir) => Some(dir.join(file)),
    };
    DeferredSection::new(name, placeholder, move || {
        let path = path.clone();
        async move {
            match path {
                Some(path) => load_json_or(&path, builtin).await,
                None => Ok(builtin()),
            }
        }
    })
}

async fn load_json_or<T: DeserializeOwned>(
    path: &Path,
    builtin: fn() -> T,
) -> Result<T, LoadError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found, using built-in content", path.display());
            return Ok(builtin());
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: PathBuf::from(path),
                source,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
