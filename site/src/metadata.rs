//! Page-level metadata: document title, description and social previews.
//!
//! [`generate_metadata`] is a pure function of the resolved [`SiteConfig`]. It
//! cannot fail; the config layer has already replaced bad input with defaults.
//!
//! ```rust
//! use datamaster_site::config::{RuntimeMode, SiteConfig};
//! use datamaster_site::metadata::generate_metadata;
//!
//! let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Development));
//! assert_eq!(meta.base_url, "http://localhost:3000");
//! assert!(meta.open_graph.images[0].url.starts_with("http://localhost:3000/api/og?title="));
//! ```

use serde::Serialize;
use url::Url;

use crate::config::SiteConfig;

/// Site name for OpenGraph.
pub const SITE_NAME: &str = "DataMaster";
/// Hero heading; also the social-card text.
pub const PAGE_TITLE: &str = "Accelerate Your Medical Research with DataMaster";
/// Document `<title>`.
pub const DOCUMENT_TITLE: &str = "DataMaster - Medical Research Platform";
/// Document meta description.
pub const DOCUMENT_DESCRIPTION: &str =
    "Access high-quality healthcare data to accelerate your research, analytics, and ML projects.";
/// Title shared by OpenGraph and Twitter.
pub const SOCIAL_TITLE: &str = "DataMaster - Advancing Medical Research";
/// Description shared by OpenGraph and Twitter.
pub const SOCIAL_DESCRIPTION: &str = "High-quality healthcare data, analytics, and ML projects.";

/// Social-card image generator. External; only the URL is built here.
pub const OG_IMAGE_ENDPOINT: &str = "/api/og";
/// Social-card width in pixels.
pub const OG_IMAGE_WIDTH: u32 = 1200;
/// Social-card height in pixels.
pub const OG_IMAGE_HEIGHT: u32 = 630;
/// Social-card alt text.
pub const OG_IMAGE_ALT: &str = "DataMaster Social Card";

/// Twitter card variant.
pub const TWITTER_CARD: &str = "summary_large_image";
/// Origins the page fetches images from.
pub const PRECONNECT_ORIGINS: &[&str] = &["https://images.unsplash.com"];

/// Everything the document head needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Document title
    pub title: String,
    /// Document description
    pub description: String,
    /// Active base URL without trailing slash
    pub base_url: String,
    /// Absolute URL of the page
    pub canonical_url: String,
    /// Hero heading; also the text rendered on the social card
    pub page_title: String,
    /// OpenGraph block
    pub open_graph: OpenGraph,
    /// Twitter-card block
    pub twitter: TwitterCard,
    /// Origins to preconnect to
    pub preconnect: Vec<String>,
}

/// Social-card image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OgImage {
    /// Absolute URL
    pub url: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Alt text
    pub alt: String,
}

/// OpenGraph (`og:*`) block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    /// Shared social title
    pub title: String,
    /// Shared social description
    pub description: String,
    /// Canonical page URL
    pub url: String,
    /// `og:type`
    #[serde(rename = "type")]
    pub kind: String,
    /// Site name
    pub site_name: String,
    /// Social-card images
    pub images: Vec<OgImage>,
}

/// Twitter card (`twitter:*`) block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    /// Card variant
    pub card: String,
    /// Shared social title
    pub title: String,
    /// Shared social description
    pub description: String,
    /// Absolute image URLs
    pub images: Vec<String>,
}

/// Shared input of the OpenGraph and Twitter blocks.
struct SocialPreview {
    title: String,
    description: String,
    image: OgImage,
}

impl SocialPreview {
    fn open_graph(&self, url: &str) -> OpenGraph {
        OpenGraph {
            title: self.title.clone(),
            description: self.description.clone(),
            url: url.to_string(),
            kind: "website".into(),
            site_name: SITE_NAME.into(),
            images: vec![self.image.clone()],
        }
    }

    fn twitter(&self) -> TwitterCard {
        TwitterCard {
            card: TWITTER_CARD.into(),
            title: self.title.clone(),
            description: self.description.clone(),
            images: vec![self.image.url.clone()],
        }
    }
}

/// Relative social-card path: `/api/og?title=<percent-encoded title>`.
///
/// Only `A-Z a-z 0-9 - _ . ~` pass through unencoded, so `!'()*` are escaped
/// as well. Both forms decode to the same title.
pub fn og_image_path(title: &str) -> String {
    format!("{}?title={}", OG_IMAGE_ENDPOINT, urlencoding::encode(title))
}

/// Resolve a root-relative path against the base URL.
pub fn resolve_against(base_url: &str, path: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base_url.trim_end_matches('/'), path),
    }
}

/// Absolute social-card image URL for `title`.
pub fn og_image_url(base_url: &str, title: &str) -> String {
    resolve_against(base_url, &og_image_path(title))
}

/// Build the page metadata for the given configuration.
pub fn generate_metadata(config: &SiteConfig) -> PageMetadata {
    let base_url = config.base_url.as_str().to_string();
    let canonical_url = resolve_against(&base_url, "/");

    let social = SocialPreview {
        title: SOCIAL_TITLE.into(),
        description: SOCIAL_DESCRIPTION.into(),
        image: OgImage {
            url: og_image_url(&base_url, PAGE_TITLE),
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt: OG_IMAGE_ALT.into(),
        },
    };

    PageMetadata {
        title: DOCUMENT_TITLE.into(),
        description: DOCUMENT_DESCRIPTION.into(),
        open_graph: social.open_graph(&canonical_url),
        twitter: social.twitter(),
        canonical_url,
        base_url,
        page_title: PAGE_TITLE.into(),
        preconnect: PRECONNECT_ORIGINS.iter().map(|o| o.to_string()).collect(),
    }
}

/// One tag in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    /// `<title>`
    Title(String),
    /// `<meta name=.. content=..>`
    Meta {
        /// `name` attribute
        name: String,
        /// `content` attribute
        content: String,
    },
    /// `<meta property=.. content=..>` (OpenGraph)
    Property {
        /// `property` attribute
        property: String,
        /// `content` attribute
        content: String,
    },
    /// `<link rel href>`
    Link {
        /// `rel` attribute
        rel: String,
        /// `href` attribute
        href: String,
    },
}

impl HeadTag {
    fn meta(name: &str, content: impl Into<String>) -> Self {
        Self::Meta {
            name: name.into(),
            content: content.into(),
        }
    }

    fn property(property: &str, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    fn link(rel: &str, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Escaped HTML for this tag.
    pub fn to_html(&self) -> String {
        match self {
            Self::Title(text) => format!("<title>{}</title>", escape_html(text)),
            Self::Meta { name, content } => format!(
                "<meta name=\"{}\" content=\"{}\">",
                escape_html(name),
                escape_html(content)
            ),
            Self::Property { property, content } => format!(
                "<meta property=\"{}\" content=\"{}\">",
                escape_html(property),
                escape_html(content)
            ),
            Self::Link { rel, href } => format!(
                "<link rel=\"{}\" href=\"{}\">",
                escape_html(rel),
                escape_html(href)
            ),
        }
    }
}

impl PageMetadata {
    /// Head tags in emission order.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let og = &self.open_graph;
        let tw = &self.twitter;

        let mut tags = vec![
            HeadTag::Title(self.title.clone()),
            HeadTag::meta("description", &self.description),
            HeadTag::link("canonical", &self.canonical_url),
            HeadTag::property("og:title", &og.title),
            HeadTag::property("og:description", &og.description),
            HeadTag::property("og:url", &og.url),
            HeadTag::property("og:type", &og.kind),
            HeadTag::property("og:site_name", &og.site_name),
        ];
        for image in &og.images {
            tags.push(HeadTag::property("og:image", &image.url));
            tags.push(HeadTag::property("og:image:width", image.width.to_string()));
            tags.push(HeadTag::property("og:image:height", image.height.to_string()));
            tags.push(HeadTag::property("og:image:alt", &image.alt));
        }
        tags.push(HeadTag::meta("twitter:card", &tw.card));
        tags.push(HeadTag::meta("twitter:title", &tw.title));
        tags.push(HeadTag::meta("twitter:description", &tw.description));
        for image in &tw.images {
            tags.push(HeadTag::meta("twitter:image", image));
        }
        for origin in &self.preconnect {
            tags.push(HeadTag::link("preconnect", origin));
        }
        tags
    }

    /// The head tags as HTML, one per line.
    pub fn head_markup(&self) -> String {
        self.head_tags()
            .iter()
            .map(HeadTag::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Overrides, RuntimeMode};
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_title_as_query_parameter() {
        let url = og_image_url("http://localhost:3000", PAGE_TITLE);
        assert!(url.contains("title=Accelerate%20Your%20Medical%20Research%20with%20DataMaster"));
        assert_eq!(
            url,
            "http://localhost:3000/api/og?title=Accelerate%20Your%20Medical%20Research%20with%20DataMaster"
        );
    }

    #[test]
    fn image_url_is_endpoint_plus_encoded_title_for_any_title() {
        for title in ["Hello", "R&D: 100% + more", "Ünïcödé títle", ""] {
            let expected = format!(
                "https://datamaster.vercel.app/api/og?title={}",
                urlencoding::encode(title)
            );
            assert_eq!(og_image_url("https://datamaster.vercel.app", title), expected);
        }
    }

    #[test]
    fn reserved_punctuation_is_percent_encoded() {
        assert_eq!(
            og_image_path("Don't (ever) stop!*"),
            "/api/og?title=Don%27t%20%28ever%29%20stop%21%2A"
        );
        assert_eq!(og_image_path("a-b_c.d~e"), "/api/og?title=a-b_c.d~e");
    }

    #[test]
    fn development_metadata_points_at_localhost() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Development));
        assert_eq!(meta.base_url, "http://localhost:3000");
        assert_eq!(meta.canonical_url, "http://localhost:3000/");
        assert_eq!(
            meta.twitter.images,
            vec![og_image_url("http://localhost:3000", PAGE_TITLE)]
        );
    }

    #[test]
    fn production_metadata_points_at_hosted_domain() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
        assert_eq!(meta.base_url, "https://datamaster.vercel.app");
        assert!(
            meta.open_graph.images[0]
                .url
                .starts_with("https://datamaster.vercel.app/api/og?title=")
        );
    }

    #[test]
    fn always_well_formed() {
        let layers = [
            Overrides::default(),
            Overrides {
                base_url: Some("garbage".into()),
                ..Default::default()
            },
            Overrides {
                base_url: Some("https://example.org/sub/".into()),
                mode: Some(RuntimeMode::Development),
                ..Default::default()
            },
        ];
        for layer in layers {
            let meta = generate_metadata(&SiteConfig::resolve(layer));
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert!(meta.open_graph.images[0].url.starts_with("http"));
        }
    }

    #[test]
    fn social_surfaces_share_one_preview() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Production));
        let og = &meta.open_graph;
        assert_eq!(og.title, meta.twitter.title);
        assert_eq!(og.description, meta.twitter.description);
        assert_eq!(og.images[0].url, meta.twitter.images[0]);
        assert_eq!(og.images[0].width, 1200);
        assert_eq!(og.images[0].height, 630);
        assert_eq!(og.kind, "website");
        assert_eq!(og.site_name, "DataMaster");
        assert_eq!(meta.twitter.card, "summary_large_image");
    }

    #[test]
    fn head_markup_contains_social_tags() {
        let meta = generate_metadata(&SiteConfig::for_mode(RuntimeMode::Development));
        let html = meta.head_markup();

        assert!(html.starts_with("<title>DataMaster - Medical Research Platform</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(r#"<link rel="preconnect" href="https://images.unsplash.com">"#));
        assert!(html.contains(r#"<link rel="canonical" href="http://localhost:3000/">"#));
    }

    #[test]
    fn head_markup_escapes_attribute_values() {
        let tag = HeadTag::meta("description", r#"Fast "and" <safe>"#);
        assert_eq!(
            tag.to_html(),
            r#"<meta name="description" content="Fast &quot;and&quot; &lt;safe&gt;">"#
        );
    }
}
