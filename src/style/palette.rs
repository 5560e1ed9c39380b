//! Theme palettes, resolved once per render

use crate::{Layout, Theme};

/// Accent used by both layouts in the light theme
pub const AMBER: &str = "#fbbf24";
/// Darker accent used by the centered layout in the dark theme
pub const DEEP_AMBER: &str = "#f59e0b";
/// End stop of the gradient heading
pub const GRADIENT_END: &str = "#f97316";
/// Caption text, same in every theme
pub const CAPTION_GRAY: &str = "#7a8c97";

/// Colors a stylesheet is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    /// Brand and heading color
    pub accent: &'static str,
    /// Color of the decorative background dots
    pub dot: &'static str,
    pub caption: &'static str,
}

impl Palette {
    /// Palette for a theme under a layout. The centered layout darkens its
    /// accent in the dark theme; the gradient layout keeps the light accent.
    pub fn resolve(theme: Theme, layout: Layout) -> Self {
        match (theme, layout) {
            (Theme::Light, _) => Palette {
                background: "white",
                accent: AMBER,
                dot: "lightgray",
                caption: CAPTION_GRAY,
            },
            (Theme::Dark, Layout::Centered) => Palette {
                background: "black",
                accent: DEEP_AMBER,
                dot: "dimgray",
                caption: CAPTION_GRAY,
            },
            (Theme::Dark, Layout::Gradient) => Palette {
                background: "black",
                accent: AMBER,
                dot: "dimgray",
                caption: CAPTION_GRAY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_is_shared_by_layouts() {
        let a = Palette::resolve(Theme::Light, Layout::Centered);
        let b = Palette::resolve(Theme::Light, Layout::Gradient);
        assert_eq!(a, b);
        assert_eq!(a.background, "white");
        assert_eq!(a.accent, "#fbbf24");
        assert_eq!(a.dot, "lightgray");
    }

    #[test]
    fn dark_accent_depends_on_layout() {
        let centered = Palette::resolve(Theme::Dark, Layout::Centered);
        let gradient = Palette::resolve(Theme::Dark, Layout::Gradient);
        assert_eq!(centered.background, "black");
        assert_eq!(centered.dot, "dimgray");
        assert_eq!(centered.accent, "#f59e0b");
        assert_eq!(gradient.accent, "#fbbf24");
    }
}
