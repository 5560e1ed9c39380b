//! Entity-escaping sanitizer for text and attribute contexts

use super::Sanitizer;

/// Escapes `& < > " ' /` as character references.
///
/// The output is safe both as element text and inside a double- or
/// single-quoted attribute value, and contains no `<` so it cannot close a
/// `<style>` block either.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl HtmlEscaper {
    pub fn new() -> Self {
        HtmlEscaper
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

impl Sanitizer for HtmlEscaper {
    fn sanitize(&self, input: &str) -> String {
        escape_html(input)
    }
}
