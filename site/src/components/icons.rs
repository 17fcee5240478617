//! Inline SVG icons.
//!
//! Outline glyphs on a 24x24 grid, stroked with `currentColor`.

use leptos::prelude::*;

use crate::types::IconKind;

/// Renders an inline stroked SVG icon from path data.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAIL size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "16")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Clipboard outline
pub const ICON_CLIPBOARD: &str = "M9 5H7a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2h-2M9 3h6v4H9z";
/// Document with a torn edge
pub const ICON_FILE_BROKEN: &str = "M14 3v4a1 1 0 0 0 1 1h4M5 12V5a2 2 0 0 1 2-2h7l5 5v4M5 16h2m4 0h2m4 0h2";
/// Pen stroke signature
pub const ICON_SIGNATURE: &str = "M3 17c3.33-6 5-9 6.67-9 2.5 0 0 9 2.5 9 1.27 0 2.5-3 3.83-3 1 0 1.33 1.5 2 3h2";
/// Table with a highlighted column
pub const ICON_TABLE_COLUMN: &str = "M4 4h16v16H4zM10 10h10M10 14h10M10 18h10M10 4v16";
/// Rising wave with arrow
pub const ICON_ARROW_WAVE: &str = "M17 7h4v4M3 16c1.5-3 3-4 4.5-4s3 2 4.5 2 3-1 4.5-3L21 7";
/// Box with its top-left quadrant marked
pub const ICON_BOX_TOP_LEFT: &str = "M4 4h16v16H4zM4 4h7v7H4z";
/// Box with its right half marked
pub const ICON_BOX_RIGHT: &str = "M4 4h16v16H4zM13 4h7v16h-7z";
/// Document stack
pub const ICON_DATA_LIBRARY: &str = "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8";
/// Dashboard grid
pub const ICON_VISUAL_ANALYTICS: &str = "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM3 9h18M9 21V9";
/// Two people
pub const ICON_COLLABORATION: &str = "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 3a4 4 0 1 1 0 8 4 4 0 0 1 0-8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

/// Twitter bird
pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";
/// LinkedIn logo
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z";
/// GitHub mark
pub const ICON_GITHUB: &str = "M9 19c-4.3 1.4-4.3-2.5-6-3m12 5v-3.5c0-1 .1-1.4-.5-2 2.8-.3 5.5-1.4 5.5-6a4.6 4.6 0 0 0-1.3-3.2 4.2 4.2 0 0 0-.1-3.2s-1.1-.3-3.5 1.3a12.3 12.3 0 0 0-6.2 0C6.5 2.8 5.4 3.1 5.4 3.1a4.2 4.2 0 0 0-.1 3.2A4.6 4.6 0 0 0 4 9.5c0 4.6 2.7 5.7 5.5 6-.6.6-.6 1.2-.5 2V21";
/// Envelope
pub const ICON_MAIL: &str = "M3 5h18v14H3zM3 7l9 6 9-6";
/// Chain link, used for unknown footer links
pub const ICON_LINK: &str = "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71";

/// Path data for a content icon.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Clipboard => ICON_CLIPBOARD,
        IconKind::FileBroken => ICON_FILE_BROKEN,
        IconKind::Signature => ICON_SIGNATURE,
        IconKind::TableColumn => ICON_TABLE_COLUMN,
        IconKind::ArrowWave => ICON_ARROW_WAVE,
        IconKind::BoxTopLeft => ICON_BOX_TOP_LEFT,
        IconKind::BoxRight => ICON_BOX_RIGHT,
        IconKind::DataLibrary => ICON_DATA_LIBRARY,
        IconKind::VisualAnalytics => ICON_VISUAL_ANALYTICS,
        IconKind::Collaboration => ICON_COLLABORATION,
    }
}

/// Path data for a footer link, matched on its label.
pub fn social_icon_path(label: &str) -> &'static str {
    match label.to_ascii_lowercase().as_str() {
        "twitter" | "x" => ICON_TWITTER,
        "linkedin" => ICON_LINKEDIN,
        "github" => ICON_GITHUB,
        "email" | "mail" => ICON_MAIL,
        _ => ICON_LINK,
    }
}
