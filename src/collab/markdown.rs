//! Markdown rendering via `pulldown-cmark`

use super::Markdown;
use crate::Result;
use pulldown_cmark::{html, Options, Parser};

/// CommonMark renderer with strikethrough and tables enabled.
///
/// The output is trusted as-is unless `clean` is set, in which case it is
/// passed through `ammonia` to drop scripts, event handlers and the like.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownMarkdown {
    clean: bool,
}

impl PulldownMarkdown {
    pub fn new() -> Self {
        Self { clean: false }
    }

    /// Enable or disable `ammonia` cleaning of the rendered HTML.
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }
}

impl Markdown for PulldownMarkdown {
    fn to_html(&self, source: &str) -> Result<String> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let parser = Parser::new_ext(source, options);
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);

        if self.clean {
            Ok(ammonia::clean(&out))
        } else {
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_inline_markup() {
        let md = PulldownMarkdown::new();
        let html = md.to_html("Hello **world** and `code`").unwrap();
        assert_eq!(
            html,
            "<p>Hello <strong>world</strong> and <code>code</code></p>\n"
        );
    }

    #[test]
    fn raw_html_survives_without_cleaning() {
        let html = PulldownMarkdown::new()
            .to_html("<script>alert(1)</script>")
            .unwrap();
        assert!(html.contains("<script>"));
    }

    #[test]
    fn cleaning_strips_scripts() {
        let html = PulldownMarkdown::new()
            .clean(true)
            .to_html("hi <script>alert(1)</script> ~~old~~")
            .unwrap();
        assert!(!html.contains("<script"));
        assert!(html.contains("<del>old</del>"));
    }
}
