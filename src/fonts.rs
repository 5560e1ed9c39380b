//! Font faces declared by the stylesheet
//!
//! A `FontSet` is built once at startup, either from raw font payloads (which
//! are base64-encoded up front and embedded as `data:` URLs) or from a remote
//! base URL. After construction it is read-only and shared by every render.

use crate::{Error, Result};
use base64::Engine as Base64Engine;
use std::fmt::Write as _;

/// Body sans-serif family
pub const SANS_FAMILY: &str = "Inter";
/// Monospace family used for inline code
pub const MONO_FAMILY: &str = "Vera";
/// Heading family
pub const HEADING_FAMILY: &str = "IBM Plex Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Woff2,
    TrueType,
}

impl FontFormat {
    fn mime(&self) -> &'static str {
        match self {
            FontFormat::Woff2 => "font/woff2",
            FontFormat::TrueType => "font/ttf",
        }
    }

    fn css_format(&self) -> &'static str {
        match self {
            FontFormat::Woff2 => "woff2",
            FontFormat::TrueType => "truetype",
        }
    }
}

/// Where a face's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSrc {
    /// Base64 payload embedded in the stylesheet
    Embedded(String),
    /// URL fetched by the browser
    Remote(String),
}

/// One `@font-face` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub family: &'static str,
    pub weight: FontWeight,
    pub format: FontFormat,
    pub src: FontSrc,
}

impl FontFace {
    /// Append this face's `@font-face` rule to `out`.
    pub fn write_css(&self, out: &mut String) -> Result<()> {
        let src = match &self.src {
            FontSrc::Embedded(b64) => format!(
                "url(data:{};charset=utf-8;base64,{}) format('{}')",
                self.format.mime(),
                b64,
                self.format.css_format()
            ),
            FontSrc::Remote(url) => {
                format!("url('{}') format('{}')", url, self.format.css_format())
            }
        };
        write!(
            out,
            "
    @font-face {{
        font-family: '{}';
        font-style: normal;
        font-weight: {};
        src: {};
    }}
",
            self.family,
            self.weight.as_css(),
            src
        )?;
        Ok(())
    }
}

/// Raw font file contents, one per declared face.
///
/// Loading these from disk (or anywhere else) is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct FontPayloads {
    pub sans_regular: Vec<u8>,
    pub sans_bold: Vec<u8>,
    pub mono: Vec<u8>,
    pub heading_regular: Vec<u8>,
    pub heading_bold: Vec<u8>,
}

/// Face catalogue: family, weight, format and conventional file name.
pub const FACE_FILES: [(&str, FontWeight, FontFormat, &str); 5] = [
    (SANS_FAMILY, FontWeight::Normal, FontFormat::Woff2, "Inter-Regular.woff2"),
    (SANS_FAMILY, FontWeight::Bold, FontFormat::Woff2, "Inter-Bold.woff2"),
    (MONO_FAMILY, FontWeight::Normal, FontFormat::Woff2, "Vera-Mono.woff2"),
    (HEADING_FAMILY, FontWeight::Normal, FontFormat::TrueType, "IBMPlexSans-Regular.ttf"),
    (HEADING_FAMILY, FontWeight::Bold, FontFormat::TrueType, "IBMPlexSans-Bold.ttf"),
];

impl FontPayloads {
    fn in_catalogue_order(&self) -> [&[u8]; 5] {
        [
            &self.sans_regular,
            &self.sans_bold,
            &self.mono,
            &self.heading_regular,
            &self.heading_bold,
        ]
    }

    /// Fill the payloads by asking `load` for each catalogue file name.
    pub fn load_with<F>(mut load: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Vec<u8>>,
    {
        Ok(Self {
            sans_regular: load(FACE_FILES[0].3)?,
            sans_bold: load(FACE_FILES[1].3)?,
            mono: load(FACE_FILES[2].3)?,
            heading_regular: load(FACE_FILES[3].3)?,
            heading_bold: load(FACE_FILES[4].3)?,
        })
    }
}

/// The complete set of faces a stylesheet declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    faces: Vec<FontFace>,
}

impl FontSet {
    /// Encode every payload once. Empty payloads are rejected.
    pub fn embedded(payloads: &FontPayloads) -> Result<Self> {
        let engine = &base64::engine::general_purpose::STANDARD;
        let mut faces = Vec::with_capacity(FACE_FILES.len());
        for ((family, weight, format, file), bytes) in
            FACE_FILES.iter().zip(payloads.in_catalogue_order())
        {
            if bytes.is_empty() {
                return Err(Error::Font(format!("empty payload for {}", file)));
            }
            faces.push(FontFace {
                family: *family,
                weight: *weight,
                format: *format,
                src: FontSrc::Embedded(Base64Engine::encode(engine, bytes)),
            });
        }
        log::debug!("built embedded font set with {} faces", faces.len());
        Ok(Self { faces })
    }

    /// Reference every face under `base_url` by its catalogue file name.
    pub fn remote(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let faces: Vec<FontFace> = FACE_FILES
            .iter()
            .map(|(family, weight, format, file)| FontFace {
                family: *family,
                weight: *weight,
                format: *format,
                src: FontSrc::Remote(format!("{}/{}", base, file)),
            })
            .collect();
        log::debug!("built remote font set under {}", base);
        Self { faces }
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// All `@font-face` rules, in catalogue order.
    pub fn to_css(&self) -> Result<String> {
        let mut out = String::new();
        for face in &self.faces {
            face.write_css(&mut out)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads() -> FontPayloads {
        FontPayloads {
            sans_regular: b"inter-r".to_vec(),
            sans_bold: b"inter-b".to_vec(),
            mono: b"vera".to_vec(),
            heading_regular: b"plex-r".to_vec(),
            heading_bold: b"plex-b".to_vec(),
        }
    }

    #[test]
    fn embedded_set_declares_five_faces_as_data_urls() {
        let set = FontSet::embedded(&payloads()).unwrap();
        assert_eq!(set.faces().len(), 5);
        let css = set.to_css().unwrap();
        assert_eq!(css.matches("@font-face").count(), 5);
        // "vera" in base64
        assert!(css.contains("data:font/woff2;charset=utf-8;base64,dmVyYQ=="));
        assert!(css.contains("data:font/ttf;charset=utf-8;base64,"));
        assert!(css.contains("format('truetype')"));
        assert!(css.contains("font-family: 'IBM Plex Sans';"));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let mut p = payloads();
        p.mono.clear();
        let err = FontSet::embedded(&p).unwrap_err();
        assert!(err.to_string().contains("Vera-Mono.woff2"));
    }

    #[test]
    fn remote_set_points_at_base_url() {
        let set = FontSet::remote("https://fonts.example.com/og/");
        let css = set.to_css().unwrap();
        assert!(css.contains("url('https://fonts.example.com/og/Inter-Bold.woff2') format('woff2')"));
        assert!(!css.contains("base64"));
    }

    #[test]
    fn load_with_asks_for_every_file() {
        let mut asked = Vec::new();
        let p = FontPayloads::load_with(|name| {
            asked.push(name.to_string());
            Ok(name.as_bytes().to_vec())
        })
        .unwrap();
        assert_eq!(asked.len(), 5);
        assert_eq!(p.mono, b"Vera-Mono.woff2".to_vec());
    }
}
