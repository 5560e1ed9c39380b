//! Centered layout: sized image row, heading, caption on its own row

use super::{join_images, Sections};
use crate::collab::Sanitizer;
use crate::ParsedRequest;

/// Image row honouring per-index widths and heights.
pub fn image_row(req: &ParsedRequest, sanitizer: &dyn Sanitizer) -> String {
    join_images(req.image_specs().map(|img| {
        format!(
            r#"<img class="logo" alt="Generated Image" src="{}" width="{}" height="{}">"#,
            sanitizer.sanitize(img.src),
            sanitizer.sanitize(img.width),
            sanitizer.sanitize(img.height),
        )
    }))
}

pub fn body(sections: &Sections) -> String {
    format!(
        r#"
        <div class="spacer">
            <div class="logo-wrapper">{images}</div>
        </div>
        <div class="spacer">
            <div class="heading">{heading}</div>
            {caption}
        </div>"#,
        images = sections.images,
        heading = sections.heading,
        caption = sections.caption.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::HtmlEscaper;

    #[test]
    fn separators_only_between_images() {
        let req = ParsedRequest {
            images: vec!["a.svg".into(), "b.svg".into(), "c.svg".into()],
            widths: vec!["300".into()],
            ..ParsedRequest::new("x")
        };
        let row = image_row(&req, &HtmlEscaper);
        assert!(row.starts_with("<img"));
        assert_eq!(row.matches(r#"<div class="plus">+</div>"#).count(), 2);
        assert!(row.contains(r#"width="300" height="225""#));
        assert!(row.contains(r#"width="auto" height="225""#));
    }

    #[test]
    fn empty_images_render_nothing() {
        assert_eq!(image_row(&ParsedRequest::new("x"), &HtmlEscaper), "");
    }

    #[test]
    fn image_attributes_are_sanitized() {
        let req = ParsedRequest {
            images: vec![r#"x" onerror="alert(1)"#.into()],
            heights: vec![r#"1"><script>"#.into()],
            ..ParsedRequest::new("x")
        };
        let row = image_row(&req, &HtmlEscaper);
        assert!(!row.contains(r#"" onerror"#));
        assert!(!row.contains("<script>"));
    }
}
