//! og-card
//!
//! Renders the HTML document behind a social-preview ("Open Graph") image:
//! a brand bar, a row of logos, a heading (plain text or markdown) and an
//! optional caption, themed light or dark. The document is meant to be
//! handed to a headless browser for the actual screenshot.
//!
//! # Features
//!
//! - **Two layouts**: `Centered` (per-image sizes) and `Gradient`
//!   (fixed-size images, gradient heading)
//! - **Sanitized by default**: every free-text field is escaped before it
//!   reaches the markup
//! - **Swappable collaborators**: markdown, sanitization and emoji handling
//!   sit behind traits (`markdown` and `twemoji` features provide defaults)
//! - **Embedded or remote fonts**: chosen once when the font set is built
//!
//! # Example
//!
//! ```
//! use og_card::{FontSet, ParsedRequest, RenderConfig, Renderer, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fonts = FontSet::remote("https://fonts.example.com/og");
//! let renderer = Renderer::new(RenderConfig::default(), fonts)?;
//!
//! let req = ParsedRequest {
//!     theme: Theme::Dark,
//!     images: vec!["https://example.com/logo.svg".to_string()],
//!     caption: Some("Weekly meeting".to_string()),
//!     ..ParsedRequest::new("Hello world")
//! };
//! let html = renderer.render(&req)?;
//! assert!(html.contains("Hello world"));
//! # Ok(())
//! # }
//! ```

pub mod collab;
pub mod document;
pub mod error;
pub mod fonts;
pub mod request;
pub mod style;

pub use document::{render, Renderer};
pub use error::{Error, Result};
pub use fonts::{FontPayloads, FontSet};
pub use request::{Layout, ParsedRequest, Theme};

/// Default brand logo
pub const DEFAULT_BRAND_LOGO: &str = "https://assets.hackclub.com/icon-rounded.svg";
/// Default brand name
pub const DEFAULT_BRAND_NAME: &str = "Purdue Hackers";
/// Caption size used when the heading font size has no numeric part
pub const DEFAULT_FALLBACK_CAPTION_PX: f64 = 36.0;

/// Static brand header shown at the top of every card
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    /// Logo image URL
    pub logo_url: String,
    /// Text shown next to the logo
    pub name: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            logo_url: DEFAULT_BRAND_LOGO.to_string(),
            name: DEFAULT_BRAND_NAME.to_string(),
        }
    }
}

/// Configuration for a [`Renderer`]
///
/// Deployment-time choices live here and are fixed for the renderer's
/// lifetime:
/// - `layout` is used by [`Renderer::render`]; `render_with_layout` overrides it
/// - `fallback_caption_px` replaces a caption size that cannot be derived
/// - `clean_markdown` runs markdown output through `ammonia`
///
/// # Examples
///
/// ```
/// let cfg = og_card::RenderConfig::default();
/// assert_eq!(cfg.layout, og_card::Layout::Centered);
/// assert!(!cfg.clean_markdown);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Layout used by `render`
    pub layout: Layout,
    /// Brand header contents
    pub brand: Brand,
    /// Base URL of the Twemoji SVG set
    pub emoji_base_url: String,
    /// Caption size in px when the font size has no digits
    pub fallback_caption_px: f64,
    /// Whether to clean markdown output with `ammonia`
    pub clean_markdown: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            brand: Brand::default(),
            emoji_base_url: collab::emoji::TWEMOJI_SVG_BASE.to_string(),
            fallback_caption_px: DEFAULT_FALLBACK_CAPTION_PX,
            clean_markdown: false,
        }
    }
}

impl RenderConfig {
    /// Reject values that would produce invalid CSS.
    pub fn validate(&self) -> Result<()> {
        if !self.fallback_caption_px.is_finite() || self.fallback_caption_px <= 0.0 {
            return Err(Error::Config(format!(
                "fallback caption size must be a positive number, got {}",
                self.fallback_caption_px
            )));
        }
        if self.emoji_base_url.trim().is_empty() {
            return Err(Error::Config("emoji base URL is empty".to_string()));
        }
        Ok(())
    }
}
