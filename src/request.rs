//! The parsed request consumed by the renderer
//!
//! A `ParsedRequest` is produced by whatever sits in front of the renderer
//! (an HTTP handler, the CLI) and is only ever read here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width used for an image whose `widths` entry is missing
pub const DEFAULT_IMAGE_WIDTH: &str = "auto";
/// Height used for an image whose `heights` entry is missing
pub const DEFAULT_IMAGE_HEIGHT: &str = "225";
/// Heading font size used when the request carries none
pub const DEFAULT_FONT_SIZE: &str = "96px";

/// Color theme of the card.
///
/// Only the exact token `"dark"` selects [`Theme::Dark`]; every other value,
/// including an empty or missing one, falls back to [`Theme::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a raw theme token. Never fails.
    pub fn from_token(token: &str) -> Self {
        if token == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(token.as_deref().map(Theme::from_token).unwrap_or_default())
    }
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Visual arrangement of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Image row above a centred heading, caption on its own row. Images
    /// honour per-index widths and heights.
    #[default]
    Centered,
    /// Fixed-size image row above a gradient-filled heading. An empty image
    /// list is replaced by a blank spacer.
    Gradient,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Centered => "centered",
            Layout::Gradient => "gradient",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "centered" | "centred" => Ok(Layout::Centered),
            "gradient" => Ok(Layout::Gradient),
            other => Err(crate::Error::Config(format!("unknown layout: {}", other))),
        }
    }
}

/// Everything the renderer needs to know about one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    /// Heading content, plain text or markdown depending on `md`
    pub text: String,
    #[serde(default)]
    pub theme: Theme,
    /// Render `text` as markdown
    #[serde(default)]
    pub md: bool,
    /// CSS length for the heading, e.g. `96px`
    #[serde(default = "default_font_size")]
    pub font_size: String,
    /// Image URLs, in display order
    #[serde(default)]
    pub images: Vec<String>,
    /// Per-image widths, parallel to `images`
    #[serde(default)]
    pub widths: Vec<String>,
    /// Per-image heights, parallel to `images`
    #[serde(default)]
    pub heights: Vec<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

fn default_font_size() -> String {
    DEFAULT_FONT_SIZE.to_string()
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            theme: Theme::default(),
            md: false,
            font_size: default_font_size(),
            images: Vec::new(),
            widths: Vec::new(),
            heights: Vec::new(),
            caption: None,
        }
    }
}

/// One entry of the image row with its size already defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec<'a> {
    pub src: &'a str,
    pub width: &'a str,
    pub height: &'a str,
}

impl ParsedRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Images zipped with their (possibly defaulted) dimensions.
    pub fn image_specs(&self) -> impl Iterator<Item = ImageSpec<'_>> + '_ {
        self.images.iter().enumerate().map(move |(i, src)| ImageSpec {
            src,
            width: self
                .widths
                .get(i)
                .map(String::as_str)
                .unwrap_or(DEFAULT_IMAGE_WIDTH),
            height: self
                .heights
                .get(i)
                .map(String::as_str)
                .unwrap_or(DEFAULT_IMAGE_HEIGHT),
        })
    }

    /// The caption, if one should be shown. Empty strings and the literal
    /// `"undefined"` count as absent.
    pub fn visible_caption(&self) -> Option<&str> {
        match self.caption.as_deref() {
            None | Some("") | Some("undefined") => None,
            Some(c) => Some(c),
        }
    }
}
