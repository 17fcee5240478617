//! Content types for the landing page.
//!
//! Every type here is a read-only content descriptor. They're designed to be:
//!
//! - **Serializable** - content directories hold them as JSON
//! - **Clone-friendly** - components take owned props
//!
//! # Example
//!
//! ```rust
//! use datamaster_site::types::ServiceCard;
//!
//! let card = ServiceCard {
//!     title: "Data Analytics".into(),
//!     description: "Turn raw data into insight.".into(),
//!     link: "#analytics".into(),
//! };
//! assert!(card.link.starts_with('#'));
//! ```

use serde::{Deserialize, Serialize};

/// One quote in the testimonial carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialEntry {
    /// Portrait image URL
    pub src: String,
    /// Display name
    pub name: String,
    /// Role and affiliation, e.g. "Data Scientist at Mayo Clinic"
    pub designation: String,
    /// Quote text
    pub quote: String,
}

/// A partner logo in the infinite slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerLogo {
    /// Image path
    pub src: String,
    /// Alt text
    pub alt: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

/// A card in the "Our Services" grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
    /// In-page anchor (`#analytics`) or path
    pub link: String,
}

/// Glyph drawn next to grid and showcase items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Clipboard icon
    #[default]
    Clipboard,
    /// File broken icon
    FileBroken,
    /// Signature icon
    Signature,
    /// Table column icon
    TableColumn,
    /// Arrow wave icon
    ArrowWave,
    /// Box top left icon
    BoxTopLeft,
    /// Box right icon
    BoxRight,
    /// Data library icon
    DataLibrary,
    /// Visual analytics icon
    VisualAnalytics,
    /// Collaboration icon
    Collaboration,
}

/// A tile in the bento feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Tile glyph
    #[serde(default)]
    pub icon: IconKind,
}

/// One step of the sticky-scroll showcase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickyScrollItem {
    /// Step heading
    pub title: String,
    /// Step body
    pub description: String,
    /// Caption under the illustration
    pub label: String,
    /// Illustration glyph
    #[serde(default)]
    pub icon: IconKind,
}

/// A question in the FAQ accordion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
}

/// The 3D pin call-out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinCard {
    /// Card heading
    pub title: String,
    /// Link target
    pub href: String,
    /// Card body
    pub description: String,
}

/// Hover card behind the "Developed by" link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewCard {
    /// Destination URL
    pub url: String,
    /// Link text
    pub label: String,
    /// Preview width in pixels
    pub width: u32,
    /// Preview height in pixels
    pub height: u32,
}

/// A footer social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label; also selects the icon
    pub label: String,
    /// Link target
    pub href: String,
}
