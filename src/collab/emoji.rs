//! Emoji-to-image substitution

use super::Emoji;
use crate::Result;

/// Leaves its input untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmoji;

impl Emoji for NoopEmoji {
    fn emojify(&self, html: &str) -> Result<String> {
        Ok(html.to_string())
    }
}

/// Default Twemoji SVG location
pub const TWEMOJI_SVG_BASE: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/";

/// Longest emoji sequence considered, in code points (ZWJ families, tag flags)
#[cfg(feature = "twemoji")]
const MAX_SEQUENCE_CHARS: usize = 10;

/// Twemoji-style substitution: every emoji sequence in text content becomes
/// `<img class="emoji" draggable="false" alt="…" src="{base}{code}.svg"/>`.
///
/// Tags and character references are copied through verbatim, so attribute
/// values and escaped text are never rewritten.
#[cfg(feature = "twemoji")]
#[derive(Debug, Clone)]
pub struct Twemoji {
    base_url: String,
}

#[cfg(feature = "twemoji")]
impl Default for Twemoji {
    fn default() -> Self {
        Self::new(TWEMOJI_SVG_BASE)
    }
}

#[cfg(feature = "twemoji")]
impl Twemoji {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn push_image(&self, out: &mut String, sequence: &str) {
        out.push_str(r#"<img class="emoji" draggable="false" alt=""#);
        out.push_str(sequence);
        out.push_str(r#"" src=""#);
        out.push_str(&self.base_url);
        out.push_str(&icon_code(sequence));
        out.push_str(r#".svg"/>"#);
    }
}

#[cfg(feature = "twemoji")]
impl Emoji for Twemoji {
    fn emojify(&self, html: &str) -> Result<String> {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(c) = rest.chars().next() {
            let consumed = match c {
                '<' => {
                    let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                    out.push_str(&rest[..end]);
                    end
                }
                '&' => {
                    let end = char_reference_len(rest).unwrap_or(1);
                    out.push_str(&rest[..end]);
                    end
                }
                _ => match longest_emoji(rest) {
                    Some(end) => {
                        self.push_image(&mut out, &rest[..end]);
                        end
                    }
                    None => {
                        out.push(c);
                        c.len_utf8()
                    }
                },
            };
            rest = &rest[consumed..];
        }

        Ok(out)
    }
}

/// Byte length of a character reference (`&amp;`, `&#39;`, `&#x2F;`) at the
/// start of `s`.
#[cfg(feature = "twemoji")]
fn char_reference_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let name_len = body
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'#')
        .count();
    if name_len > 0 && body.as_bytes().get(name_len) == Some(&b';') {
        Some(name_len + 2)
    } else {
        None
    }
}

/// Byte length of the longest emoji sequence at the start of `s`.
#[cfg(feature = "twemoji")]
fn longest_emoji(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let first = chars.next()?;
    // ASCII only starts an emoji as a keycap base
    if first.is_ascii() && !matches!(chars.next(), Some('\u{FE0F}') | Some('\u{20E3}')) {
        return None;
    }

    let ends: Vec<usize> = s
        .char_indices()
        .take(MAX_SEQUENCE_CHARS)
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    ends.into_iter()
        .rev()
        .find(|end| emojis::get(&s[..*end]).is_some())
}

/// Twemoji file name for a sequence: lowercase hex code points joined by
/// `-`, with U+FE0F dropped unless the sequence is ZWJ-joined.
#[cfg(feature = "twemoji")]
fn icon_code(sequence: &str) -> String {
    let keep_fe0f = sequence.contains('\u{200D}');
    sequence
        .chars()
        .filter(|c| keep_fe0f || *c != '\u{FE0F}')
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(all(test, feature = "twemoji"))]
mod tests {
    use super::*;

    #[test]
    fn replaces_single_emoji() {
        let t = Twemoji::new("https://cdn.example.com/svg");
        let out = t.emojify("Launch 🚀 day").unwrap();
        assert_eq!(
            out,
            "Launch <img class=\"emoji\" draggable=\"false\" alt=\"🚀\" src=\"https://cdn.example.com/svg/1f680.svg\"/> day"
        );
    }

    #[test]
    fn keeps_zwj_sequences_whole() {
        let t = Twemoji::default();
        let out = t.emojify("👩\u{200D}💻").unwrap();
        assert_eq!(out.matches("<img").count(), 1);
        assert!(out.contains("1f469-200d-1f4bb.svg"));
    }

    #[test]
    fn drops_variation_selector_outside_zwj_sequences() {
        assert_eq!(icon_code("\u{2764}\u{FE0F}"), "2764");
        assert_eq!(icon_code("🚀"), "1f680");
    }

    #[test]
    fn skips_tags_and_character_references() {
        let t = Twemoji::default();
        let input = r#"<a title="🚀">&#39;x&#39;</a>"#;
        assert_eq!(t.emojify(input).unwrap(), input);
    }

    #[test]
    fn plain_ascii_is_untouched() {
        let t = Twemoji::default();
        assert_eq!(t.emojify("Hello # 1 * 2").unwrap(), "Hello # 1 * 2");
    }

    #[test]
    fn noop_returns_input() {
        assert_eq!(NoopEmoji.emojify("🚀").unwrap(), "🚀");
    }

    #[test]
    fn char_reference_detection() {
        assert_eq!(char_reference_len("&amp; rest"), Some(5));
        assert_eq!(char_reference_len("&#x2F;"), Some(6));
        assert_eq!(char_reference_len("& alone"), None);
    }
}
