//! Color palette definitions for the storefront TUI.
//!
//! Two fixed palettes, light and dark, mirroring the web storefront's themes.
//! Colors are grouped into backgrounds, text tiers, and accents; the tomato
//! accent carries the brand color across both modes.

use ratatui::style::Color;

/// Presentation mode selected by the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl ThemeMode {
    /// What: Return the other presentation mode.
    ///
    /// Inputs:
    /// - `self`: Current mode.
    ///
    /// Output:
    /// - `Dark` for `Light` and vice versa; applying twice is the identity.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What: Parse a theme mode from a settings or CLI value.
    ///
    /// Inputs:
    /// - `s`: Config string (case-insensitive).
    ///
    /// Output:
    /// - `Some(ThemeMode)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Palette used by rendering code, all colors as [`ratatui::style::Color`].
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly offset background layer behind panels.
    pub mantle: Color,
    /// Component surface color (cards, bars).
    pub surface: Color,
    /// Border and divider color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Brand accent (tomato) for headings, prices, and highlights.
    pub tomato: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// The light palette: white canvas, slate text.
const fn light() -> Theme {
    Theme {
        base: hex((0xff, 0xff, 0xff)),
        mantle: hex((0xf8, 0xfa, 0xfc)),
        surface: hex((0xf1, 0xf5, 0xf9)),
        overlay: hex((0xe2, 0xe8, 0xf0)),
        text: hex((0x0f, 0x17, 0x2a)),
        subtext: hex((0x47, 0x55, 0x69)),
        tomato: hex((0xff, 0x63, 0x47)),
        green: hex((0x16, 0xa3, 0x4a)),
        yellow: hex((0xca, 0x8a, 0x04)),
    }
}

/// The dark palette: near-black slate canvas, light text.
const fn dark() -> Theme {
    Theme {
        base: hex((0x02, 0x06, 0x17)),
        mantle: hex((0x0f, 0x17, 0x2a)),
        surface: hex((0x1e, 0x29, 0x3b)),
        overlay: hex((0x33, 0x41, 0x55)),
        text: hex((0xf8, 0xfa, 0xfc)),
        subtext: hex((0x94, 0xa3, 0xb8)),
        tomato: hex((0xff, 0x63, 0x47)),
        green: hex((0x4a, 0xde, 0x80)),
        yellow: hex((0xfa, 0xcc, 0x15)),
    }
}

/// What: Return the palette for a presentation mode.
///
/// Inputs:
/// - `mode`: Active theme mode.
///
/// Output:
/// - The light or dark [`Theme`] palette.
#[must_use]
pub const fn theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Theme flip is an involution
    ///
    /// - Input: Both presentation modes
    /// - Output: Flipping twice restores the original value
    #[test]
    fn theme_mode_flip_involution() {
        assert_eq!(ThemeMode::Light.flip(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.flip().flip(), ThemeMode::Dark);
    }

    /// What: Config parsing accepts the two known modes only
    ///
    /// - Input: Known values in mixed case; an unknown value
    /// - Output: Correct variants; `None` for unknown
    #[test]
    fn theme_mode_config_parsing() {
        assert_eq!(ThemeMode::from_config_key("Light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_config_key(" dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_config_key("solarized"), None);
    }

    /// What: The brand accent is identical across palettes
    ///
    /// - Input: Both palettes
    /// - Output: Same tomato color; differing base colors
    #[test]
    fn theme_palettes_share_brand_accent() {
        let l = theme(ThemeMode::Light);
        let d = theme(ThemeMode::Dark);
        assert_eq!(l.tomato, d.tomato);
        assert_ne!(l.base, d.base);
    }
}
