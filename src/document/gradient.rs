//! Gradient layout: fixed-size image row above a gradient heading

use super::{join_images, Sections};
use crate::collab::Sanitizer;
use crate::ParsedRequest;

/// Stand-in for an empty image row
pub const SPACER: &str = r#"<div class="spacer"></div>"#;

/// Image row at the stylesheet's fixed size, or a spacer when there are no
/// images. Widths and heights in the request are ignored.
pub fn image_row(req: &ParsedRequest, sanitizer: &dyn Sanitizer) -> String {
    if req.images.is_empty() {
        return SPACER.to_string();
    }
    let row = join_images(req.images.iter().map(|src| {
        format!(
            r#"<img class="logo" alt="Generated Image" src="{}">"#,
            sanitizer.sanitize(src)
        )
    }));
    format!(r#"<div class="logo-wrapper">{}</div>"#, row)
}

pub fn body(sections: &Sections) -> String {
    format!(
        r#"
        {images}
        <div class="heading">{heading}</div>
        {caption}"#,
        images = sections.images,
        heading = sections.heading,
        caption = sections.caption.as_deref().unwrap_or(""),
    )
}
