//! Document assembly
//!
//! [`Renderer`] turns a [`ParsedRequest`] into a complete HTML document:
//! stylesheet, brand header, image row, heading and optional caption, in
//! that order. Every free-text field goes through the sanitizer before it
//! is interpolated; markdown output is taken from the markdown collaborator
//! as-is.

pub mod centered;
pub mod gradient;

use crate::collab::Collaborators;
use crate::fonts::FontSet;
use crate::style::StyleBuilder;
use crate::{Layout, ParsedRequest, RenderConfig, Result};
use std::sync::Arc;

/// Separator emitted between consecutive images
pub const PLUS: &str = r#"<div class="plus">+</div>"#;

/// Rendered pieces handed to a layout's `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub images: String,
    pub heading: String,
    pub caption: Option<String>,
}

/// Join image elements with [`PLUS`], never before the first.
pub(crate) fn join_images<I>(images: I) -> String
where
    I: Iterator<Item = String>,
{
    let mut out = String::new();
    for (i, img) in images.enumerate() {
        if i > 0 {
            out.push_str(PLUS);
        }
        out.push_str(&img);
    }
    out
}

/// Renders card documents.
///
/// A renderer holds only read-only state (configuration, the encoded font
/// set and the collaborators) and can be cloned cheaply and shared across
/// threads.
#[derive(Clone)]
pub struct Renderer {
    config: RenderConfig,
    fonts: Arc<FontSet>,
    collab: Collaborators,
}

impl Renderer {
    /// Renderer with the default collaborators for `config`.
    pub fn new(config: RenderConfig, fonts: FontSet) -> Result<Self> {
        let collab = Collaborators::for_config(&config);
        Self::with_collaborators(config, Arc::new(fonts), collab)
    }

    /// Renderer with caller-supplied collaborators and a shared font set.
    pub fn with_collaborators(
        config: RenderConfig,
        fonts: Arc<FontSet>,
        collab: Collaborators,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fonts,
            collab,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn fonts(&self) -> &Arc<FontSet> {
        &self.fonts
    }

    /// Render with the configured layout.
    pub fn render(&self, req: &ParsedRequest) -> Result<String> {
        self.render_with_layout(req, self.config.layout)
    }

    /// Render with an explicit layout.
    pub fn render_with_layout(&self, req: &ParsedRequest, layout: Layout) -> Result<String> {
        log::debug!(
            "rendering card: layout={} theme={} md={} images={}",
            layout,
            req.theme,
            req.md,
            req.images.len()
        );

        let sanitizer = self.collab.sanitizer.as_ref();
        let css = StyleBuilder::new(&self.fonts, sanitizer, self.config.fallback_caption_px)
            .build(req.theme, &req.font_size, layout)?;

        let sections = Sections {
            images: match layout {
                Layout::Centered => centered::image_row(req, sanitizer),
                Layout::Gradient => gradient::image_row(req, sanitizer),
            },
            heading: self.heading(req)?,
            caption: self.caption(req)?,
        };
        let body = match layout {
            Layout::Centered => centered::body(&sections),
            Layout::Gradient => gradient::body(&sections),
        };

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Generated Image</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        {css}
    </style>
</head>
<body>
    <div>
        {brand}{body}
    </div>
</body>
</html>"#,
            css = css,
            brand = self.brand(),
            body = body,
        ))
    }

    fn heading(&self, req: &ParsedRequest) -> Result<String> {
        let html = if req.md {
            self.collab.markdown.to_html(&req.text)?
        } else {
            self.collab.sanitizer.sanitize(&req.text)
        };
        self.collab.emoji.emojify(&html)
    }

    fn caption(&self, req: &ParsedRequest) -> Result<Option<String>> {
        match req.visible_caption() {
            None => Ok(None),
            Some(text) => {
                let html = self.collab.emoji.emojify(&self.collab.sanitizer.sanitize(text))?;
                Ok(Some(format!(r#"<div class="caption">{}</div>"#, html)))
            }
        }
    }

    fn brand(&self) -> String {
        let s = self.collab.sanitizer.as_ref();
        format!(
            r#"<div class="brand">
            <img class="brand-logo" alt="" src="{}">
            {}
        </div>"#,
            s.sanitize(&self.config.brand.logo_url),
            s.sanitize(&self.config.brand.name),
        )
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("faces", &self.fonts.faces().len())
            .finish()
    }
}

/// Render one request with a throwaway renderer.
pub fn render(config: RenderConfig, fonts: FontSet, req: &ParsedRequest) -> Result<String> {
    Renderer::new(config, fonts)?.render(req)
}
