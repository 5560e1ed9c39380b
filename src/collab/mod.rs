//! Collaborator seams: markdown rendering, sanitization, emoji substitution
//!
//! The renderer only talks to these through the traits below so that a host
//! application can swap in its own implementations. The defaults are backed
//! by `pulldown-cmark`, `ammonia` and `emojis`.

pub mod emoji;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod sanitize;

#[cfg(feature = "twemoji")]
pub use emoji::Twemoji;
pub use emoji::NoopEmoji;
#[cfg(feature = "markdown")]
pub use markdown::PulldownMarkdown;
pub use sanitize::HtmlEscaper;

use crate::{RenderConfig, Result};
use std::sync::Arc;

/// Turns markdown source into an HTML fragment.
pub trait Markdown: Send + Sync {
    fn to_html(&self, source: &str) -> Result<String>;
}

/// Makes an untrusted string safe to interpolate into HTML text or a
/// double-quoted attribute value.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> String;
}

/// Replaces emoji code points in an HTML fragment with inline image markup.
pub trait Emoji: Send + Sync {
    fn emojify(&self, html: &str) -> Result<String>;
}

/// Markdown collaborator used when markdown support is compiled out: every
/// markdown request is rejected.
pub struct NoMarkdown;

impl Markdown for NoMarkdown {
    fn to_html(&self, _source: &str) -> Result<String> {
        Err(crate::Error::Markdown(
            "markdown support is not enabled".to_string(),
        ))
    }
}

/// The three collaborators a renderer needs, shared by reference.
#[derive(Clone)]
pub struct Collaborators {
    pub markdown: Arc<dyn Markdown>,
    pub sanitizer: Arc<dyn Sanitizer>,
    pub emoji: Arc<dyn Emoji>,
}

impl Collaborators {
    /// Default collaborators configured from `config`.
    ///
    /// Falls back to [`NoMarkdown`] and [`NoopEmoji`] when the `markdown` or
    /// `twemoji` features are disabled.
    pub fn for_config(config: &RenderConfig) -> Self {
        #[cfg(feature = "markdown")]
        let markdown: Arc<dyn Markdown> =
            Arc::new(PulldownMarkdown::new().clean(config.clean_markdown));
        #[cfg(not(feature = "markdown"))]
        let markdown: Arc<dyn Markdown> = Arc::new(NoMarkdown);

        #[cfg(feature = "twemoji")]
        let emoji: Arc<dyn Emoji> = Arc::new(Twemoji::new(config.emoji_base_url.clone()));
        #[cfg(not(feature = "twemoji"))]
        let emoji: Arc<dyn Emoji> = Arc::new(NoopEmoji);

        Self {
            markdown,
            sanitizer: Arc::new(HtmlEscaper),
            emoji,
        }
    }

    pub fn with_markdown(mut self, markdown: impl Markdown + 'static) -> Self {
        self.markdown = Arc::new(markdown);
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Arc::new(sanitizer);
        self
    }

    pub fn with_emoji(mut self, emoji: impl Emoji + 'static) -> Self {
        self.emoji = Arc::new(emoji);
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::for_config(&RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markdown_rejects_input() {
        let err = NoMarkdown.to_html("# hi").unwrap_err();
        assert!(matches!(err, crate::Error::Markdown(_)));
    }

    #[test]
    fn default_collaborators_escape_text() {
        let c = Collaborators::default();
        assert_eq!(c.sanitizer.sanitize("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn collaborators_can_be_swapped() {
        let c = Collaborators::default().with_emoji(NoopEmoji);
        assert_eq!(c.emoji.emojify("🚀").unwrap(), "🚀");
    }
}
