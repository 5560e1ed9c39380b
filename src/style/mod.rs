//! Stylesheet construction
//!
//! The stylesheet is plain CSS text: font faces from the injected
//! [`FontSet`], a dotted background in the theme's colors and the fixed
//! layout classes (`.brand`, `.logo-wrapper`, `.logo`, `.plus`, `.spacer`,
//! `.heading`, `.caption`, `.emoji`). The heading font size is the sanitized
//! request value; the caption size is derived from it.

pub mod palette;

pub use palette::Palette;

use crate::collab::Sanitizer;
use crate::fonts::{FontSet, HEADING_FAMILY, MONO_FAMILY, SANS_FAMILY};
use crate::{Layout, Result, Theme};
use std::fmt::Write as _;

/// Caption size relative to the heading size
pub const CAPTION_SCALE: f64 = 0.375;

/// Derive the caption font size from a (sanitized) heading font size.
///
/// Takes the first run of ASCII digits outside of character references,
/// scales it by [`CAPTION_SCALE`] and appends `px`. References such as
/// `&#x2F;` or `&#39;` come from the sanitizer and their digits are not part
/// of the size. Returns `None` when there are no digits to scale.
pub fn caption_font_size(font_size: &str) -> Option<String> {
    let digits = first_digit_run(font_size)?;
    let value = digits.parse::<f64>().ok()? * CAPTION_SCALE;
    if value.is_finite() {
        Some(format_px(value))
    } else {
        None
    }
}

fn first_digit_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'&' => {
                let name_len = bytes[i + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_alphanumeric() || **b == b'#')
                    .count();
                if name_len > 0 && bytes.get(i + 1 + name_len) == Some(&b';') {
                    i += name_len + 2;
                } else {
                    i += 1;
                }
            }
            b if b.is_ascii_digit() => {
                let len = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
                return Some(&s[i..i + len]);
            }
            _ => i += 1,
        }
    }
    None
}

fn format_px(value: f64) -> String {
    // f64's Display drops a trailing ".0"
    format!("{}px", value)
}

/// Builds stylesheets against a fixed font set and sanitizer.
pub struct StyleBuilder<'a> {
    fonts: &'a FontSet,
    sanitizer: &'a dyn Sanitizer,
    fallback_caption_px: f64,
}

impl<'a> StyleBuilder<'a> {
    pub fn new(fonts: &'a FontSet, sanitizer: &'a dyn Sanitizer, fallback_caption_px: f64) -> Self {
        Self {
            fonts,
            sanitizer,
            fallback_caption_px,
        }
    }

    /// Full stylesheet for one card.
    pub fn build(&self, theme: Theme, font_size: &str, layout: Layout) -> Result<String> {
        let palette = Palette::resolve(theme, layout);
        let heading_size = self.sanitizer.sanitize(font_size);
        let caption_size = match caption_font_size(&heading_size) {
            Some(size) => size,
            None => {
                log::warn!(
                    "font size {:?} has no numeric part; caption falls back to {}px",
                    heading_size,
                    self.fallback_caption_px
                );
                format_px(self.fallback_caption_px)
            }
        };

        let mut css = self.fonts.to_css()?;
        write_base_rules(&mut css, &palette)?;
        match layout {
            Layout::Centered => write_centered_rules(&mut css, &palette, &heading_size, &caption_size)?,
            Layout::Gradient => write_gradient_rules(&mut css, &palette, &heading_size, &caption_size)?,
        }
        Ok(css)
    }
}

fn write_base_rules(css: &mut String, p: &Palette) -> Result<()> {
    write!(
        css,
        r#"
    body {{
        font-family: '{sans}', sans-serif;
        background: {background};
        background-image: radial-gradient(circle at 25px 25px, {dot} 2%, transparent 0%), radial-gradient(circle at 75px 75px, {dot} 2%, transparent 0%);
        background-size: 100px 100px;
        height: 100vh;
        margin: 0;
        display: flex;
        text-align: center;
        align-items: center;
        justify-content: center;
    }}

    code {{
        color: #D400FF;
        font-family: '{mono}';
        white-space: pre-wrap;
        letter-spacing: -5px;
    }}

    code:before, code:after {{
        content: '`';
    }}

    .brand {{
        font-size: 105px;
        padding: 50px;
        text-align: center;
        font-weight: bold;
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        box-sizing: border-box;
        color: {accent};
        display: flex;
        justify-content: center;
        align-items: center;
    }}

    .brand-logo {{
        width: 125px;
        margin: 0 50px;
    }}

    .logo-wrapper {{
        display: flex;
        align-items: center;
        align-content: center;
        justify-content: center;
        justify-items: center;
    }}

    .plus {{
        color: #BBB;
        font-family: Times New Roman, Verdana;
        font-size: 100px;
    }}

    .emoji {{
        height: 1em;
        width: 1em;
        margin: 0 .05em 0 .1em;
        vertical-align: -0.1em;
    }}
"#,
        sans = SANS_FAMILY,
        mono = MONO_FAMILY,
        background = p.background,
        dot = p.dot,
        accent = p.accent,
    )?;
    Ok(())
}

fn write_centered_rules(css: &mut String, p: &Palette, heading_size: &str, caption_size: &str) -> Result<()> {
    write!(
        css,
        r#"
    .logo {{
        margin: 0 50px;
    }}

    .spacer {{
        margin: 150px;
    }}

    .caption {{
        font-size: {caption_size};
        text-transform: uppercase;
        color: {caption};
        letter-spacing: 0;
    }}

    .heading {{
        font-family: '{heading}', sans-serif;
        font-size: {heading_size};
        font-style: normal;
        color: {accent};
        line-height: 1.8;
    }}
"#,
        caption_size = caption_size,
        caption = p.caption,
        heading = HEADING_FAMILY,
        heading_size = heading_size,
        accent = p.accent,
    )?;
    Ok(())
}

fn write_gradient_rules(css: &mut String, p: &Palette, heading_size: &str, caption_size: &str) -> Result<()> {
    write!(
        css,
        r#"
    .logo {{
        height: 225px;
        width: auto;
        margin: 0 75px;
    }}

    .spacer {{
        margin: 150px;
    }}

    .caption {{
        font-size: {caption_size};
        text-transform: uppercase;
        color: {caption};
        letter-spacing: 0;
        margin-top: 25px;
    }}

    .heading {{
        font-family: '{heading}', sans-serif;
        font-size: {heading_size};
        font-style: normal;
        font-weight: bold;
        margin-top: 50px;
        line-height: 1.4;
        background-image: linear-gradient(90deg, {accent}, {gradient_end});
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }}
"#,
        caption_size = caption_size,
        caption = p.caption,
        heading = HEADING_FAMILY,
        heading_size = heading_size,
        accent = p.accent,
        gradient_end = palette::GRADIENT_END,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::HtmlEscaper;

    fn fonts() -> FontSet {
        FontSet::remote("https://fonts.example.com")
    }

    #[test]
    fn caption_size_scales_leading_digits() {
        assert_eq!(caption_font_size("96px").as_deref(), Some("36px"));
        assert_eq!(caption_font_size("100px").as_deref(), Some("37.5px"));
        assert_eq!(caption_font_size("1.5em").as_deref(), Some("0.375px"));
    }

    #[test]
    fn caption_size_ignores_digits_in_character_references() {
        assert_eq!(caption_font_size("&#x2F;96").as_deref(), Some("36px"));
        assert_eq!(caption_font_size("&#39;96px&#39;").as_deref(), Some("36px"));
        assert_eq!(caption_font_size("&amp;80px").as_deref(), Some("30px"));
        assert_eq!(caption_font_size("&#39;&#39;"), None);
        // a bare ampersand is not a reference
        assert_eq!(caption_font_size("& 8px").as_deref(), Some("3px"));
    }

    #[test]
    fn stylesheet_caption_size_from_quoted_font_size() {
        let fonts = fonts();
        let s = HtmlEscaper;
        let css = StyleBuilder::new(&fonts, &s, 36.0)
            .build(Theme::Light, "'96px'", Layout::Centered)
            .unwrap();
        assert!(css.contains("font-size: &#39;96px&#39;;"));
        assert!(css.contains("font-size: 36px;"));
        assert!(!css.contains("14.625px"));
    }

    #[test]
    fn caption_size_is_none_without_digits() {
        assert_eq!(caption_font_size("large"), None);
        assert_eq!(caption_font_size(""), None);
    }

    #[test]
    fn stylesheet_uses_heading_size_verbatim() {
        let fonts = fonts();
        let s = HtmlEscaper;
        let css = StyleBuilder::new(&fonts, &s, 36.0)
            .build(Theme::Light, "96px", Layout::Centered)
            .unwrap();
        assert!(css.contains("font-size: 96px;"));
        assert!(css.contains("font-size: 36px;"));
        assert!(css.contains("background: white;"));
        assert!(css.contains("color: #fbbf24;"));
        assert!(css.contains("radial-gradient(circle at 25px 25px, lightgray 2%"));
        assert!(css.contains("background-size: 100px 100px;"));
    }

    #[test]
    fn invalid_font_size_falls_back_for_caption() {
        let fonts = fonts();
        let s = HtmlEscaper;
        let css = StyleBuilder::new(&fonts, &s, 42.0)
            .build(Theme::Dark, "huge", Layout::Gradient)
            .unwrap();
        assert!(css.contains("font-size: 42px;"));
        assert!(!css.contains("NaN"));
        assert!(css.contains("background: black;"));
        assert!(css.contains("dimgray 2%"));
    }

    #[test]
    fn font_size_is_sanitized_before_interpolation() {
        let fonts = fonts();
        let s = HtmlEscaper;
        let css = StyleBuilder::new(&fonts, &s, 36.0)
            .build(Theme::Light, "96px}</style><script>", Layout::Centered)
            .unwrap();
        assert!(!css.contains("</style>"));
        assert!(!css.contains("<script>"));
        assert!(css.contains("font-size: 96px}&lt;&#x2F;style&gt;&lt;script&gt;;"));
    }

    #[test]
    fn gradient_heading_is_text_clipped() {
        let fonts = fonts();
        let s = HtmlEscaper;
        let css = StyleBuilder::new(&fonts, &s, 36.0)
            .build(Theme::Dark, "80px", Layout::Gradient)
            .unwrap();
        assert!(css.contains("linear-gradient(90deg, #fbbf24, #f97316)"));
        assert!(css.contains("background-clip: text;"));
        assert!(css.contains("font-size: 30px;"));
    }
}
