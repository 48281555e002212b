//! Color definitions and the semantic color table
//!
//! Colors are stored in RGB565, the format the catalog renders to.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use core::fmt;
use core::str::FromStr;

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::error::ThemeError;

/// Build an RGB565 color from 8-bit channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// ============================================================================
// Base Colors
// ============================================================================

pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Medium gray, also the color returned for missing theme entries
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

pub const BRAND_BLUE: Rgb565 = rgb(0x1E, 0x5E, 0xD6);
pub const BRAND_BLUE_LIGHT: Rgb565 = rgb(0xA9, 0xC7, 0xFF);
pub const TEAL: Rgb565 = rgb(0x0A, 0x6B, 0x6E);
pub const TEAL_LIGHT: Rgb565 = rgb(0x7F, 0xD4, 0xD6);
pub const CRIMSON: Rgb565 = rgb(0xC6, 0x28, 0x28);
pub const CRIMSON_LIGHT: Rgb565 = rgb(0xFF, 0xB4, 0xAB);

/// Color used by [`ColorPalette::get_or_fallback`] when an entry is missing.
pub const FALLBACK_COLOR: Rgb565 = GRAY;

// ============================================================================
// Semantic color names
// ============================================================================

/// Closed set of semantic color roles a theme provides.
///
/// Names are written in camelCase in configuration files (`onSurface`,
/// `disabledContent`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    Background,
    Surface,
    SurfaceVariant,
    OnSurface,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    SuccessContainer,
    OnSuccessContainer,
    WarningContainer,
    OnWarningContainer,
    InfoContainer,
    OnInfoContainer,
    DisabledContainer,
    DisabledContent,
    Scrim,
    Badge,
    OnBadge,
}

impl ColorName {
    pub const COUNT: usize = 26;

    pub const ALL: [ColorName; Self::COUNT] = [
        ColorName::Primary,
        ColorName::OnPrimary,
        ColorName::Secondary,
        ColorName::OnSecondary,
        ColorName::Background,
        ColorName::Surface,
        ColorName::SurfaceVariant,
        ColorName::OnSurface,
        ColorName::OnSurfaceVariant,
        ColorName::Outline,
        ColorName::OutlineVariant,
        ColorName::Error,
        ColorName::OnError,
        ColorName::ErrorContainer,
        ColorName::OnErrorContainer,
        ColorName::SuccessContainer,
        ColorName::OnSuccessContainer,
        ColorName::WarningContainer,
        ColorName::OnWarningContainer,
        ColorName::InfoContainer,
        ColorName::OnInfoContainer,
        ColorName::DisabledContainer,
        ColorName::DisabledContent,
        ColorName::Scrim,
        ColorName::Badge,
        ColorName::OnBadge,
    ];

    /// The camelCase name used in configuration files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorName::Primary => "primary",
            ColorName::OnPrimary => "onPrimary",
            ColorName::Secondary => "secondary",
            ColorName::OnSecondary => "onSecondary",
            ColorName::Background => "background",
            ColorName::Surface => "surface",
            ColorName::SurfaceVariant => "surfaceVariant",
            ColorName::OnSurface => "onSurface",
            ColorName::OnSurfaceVariant => "onSurfaceVariant",
            ColorName::Outline => "outline",
            ColorName::OutlineVariant => "outlineVariant",
            ColorName::Error => "error",
            ColorName::OnError => "onError",
            ColorName::ErrorContainer => "errorContainer",
            ColorName::OnErrorContainer => "onErrorContainer",
            ColorName::SuccessContainer => "successContainer",
            ColorName::OnSuccessContainer => "onSuccessContainer",
            ColorName::WarningContainer => "warningContainer",
            ColorName::OnWarningContainer => "onWarningContainer",
            ColorName::InfoContainer => "infoContainer",
            ColorName::OnInfoContainer => "onInfoContainer",
            ColorName::DisabledContainer => "disabledContainer",
            ColorName::DisabledContent => "disabledContent",
            ColorName::Scrim => "scrim",
            ColorName::Badge => "badge",
            ColorName::OnBadge => "onBadge",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownColor(crate::error::truncated(s)))
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Table from semantic color name to concrete color.
///
/// Entries may be missing when a palette is built from a partial
/// configuration; lookups through [`get_or_fallback`](Self::get_or_fallback)
/// then degrade to [`FALLBACK_COLOR`] instead of failing the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    entries: [Option<Rgb565>; ColorName::COUNT],
}

impl Default for ColorPalette {
    /// Returns the light palette
    fn default() -> Self {
        Self::light()
    }
}

impl ColorPalette {
    /// A palette with no entries; every lookup falls back.
    pub const fn empty() -> Self {
        Self {
            entries: [None; ColorName::COUNT],
        }
    }

    /// Build a complete palette from colors listed in [`ColorName::ALL`] order.
    pub const fn from_entries(colors: [Rgb565; ColorName::COUNT]) -> Self {
        let mut entries = [None; ColorName::COUNT];
        let mut i = 0;
        while i < ColorName::COUNT {
            entries[i] = Some(colors[i]);
            i += 1;
        }
        Self { entries }
    }

    /// Light palette used by the catalog by default.
    pub const fn light() -> Self {
        Self::from_entries([
            BRAND_BLUE,               // primary
            WHITE,                    // onPrimary
            TEAL,                     // secondary
            WHITE,                    // onSecondary
            rgb(0xFA, 0xFA, 0xFC),    // background
            WHITE,                    // surface
            rgb(0xE7, 0xE9, 0xEF),    // surfaceVariant
            rgb(0x1A, 0x1C, 0x20),    // onSurface
            rgb(0x44, 0x47, 0x4E),    // onSurfaceVariant
            rgb(0x74, 0x77, 0x7F),    // outline
            rgb(0xC4, 0xC6, 0xCF),    // outlineVariant
            CRIMSON,                  // error
            WHITE,                    // onError
            rgb(0xFF, 0xDA, 0xD6),    // errorContainer
            rgb(0x41, 0x00, 0x02),    // onErrorContainer
            rgb(0xC8, 0xF0, 0xD2),    // successContainer
            rgb(0x00, 0x39, 0x1A),    // onSuccessContainer
            rgb(0xFF, 0xE0, 0xB2),    // warningContainer
            rgb(0x4A, 0x28, 0x00),    // onWarningContainer
            rgb(0xD6, 0xE3, 0xFF),    // infoContainer
            rgb(0x00, 0x1B, 0x3E),    // onInfoContainer
            rgb(0xE3, 0xE3, 0xE6),    // disabledContainer
            rgb(0x9E, 0x9F, 0xA3),    // disabledContent
            rgb(0x20, 0x20, 0x24),    // scrim
            CRIMSON,                  // badge
            WHITE,                    // onBadge
        ])
    }

    /// Dark palette: light content on dark surfaces.
    pub const fn dark() -> Self {
        Self::from_entries([
            BRAND_BLUE_LIGHT,         // primary
            rgb(0x00, 0x2E, 0x69),    // onPrimary
            TEAL_LIGHT,               // secondary
            rgb(0x00, 0x37, 0x38),    // onSecondary
            rgb(0x11, 0x13, 0x18),    // background
            rgb(0x1A, 0x1C, 0x20),    // surface
            rgb(0x2D, 0x30, 0x38),    // surfaceVariant
            rgb(0xE2, 0xE2, 0xE9),    // onSurface
            rgb(0xC4, 0xC6, 0xD0),    // onSurfaceVariant
            rgb(0x8E, 0x90, 0x99),    // outline
            rgb(0x44, 0x47, 0x4E),    // outlineVariant
            CRIMSON_LIGHT,            // error
            rgb(0x69, 0x00, 0x05),    // onError
            rgb(0x93, 0x00, 0x0A),    // errorContainer
            rgb(0xFF, 0xDA, 0xD6),    // onErrorContainer
            rgb(0x0F, 0x52, 0x2C),    // successContainer
            rgb(0xC8, 0xF0, 0xD2),    // onSuccessContainer
            rgb(0x6A, 0x3C, 0x00),    // warningContainer
            rgb(0xFF, 0xE0, 0xB2),    // onWarningContainer
            rgb(0x00, 0x45, 0x8F),    // infoContainer
            rgb(0xD6, 0xE3, 0xFF),    // onInfoContainer
            rgb(0x2A, 0x2B, 0x2F),    // disabledContainer
            rgb(0x5E, 0x5F, 0x63),    // disabledContent
            BLACK,                    // scrim
            CRIMSON_LIGHT,            // badge
            rgb(0x69, 0x00, 0x05),    // onBadge
        ])
    }

    /// Look up an entry, `None` when the palette does not define it.
    pub const fn get(&self, name: ColorName) -> Option<Rgb565> {
        self.entries[name.index()]
    }

    /// Look up an entry, degrading to [`FALLBACK_COLOR`] when missing.
    pub fn get_or_fallback(&self, name: ColorName) -> Rgb565 {
        match self.get(name) {
            Some(color) => color,
            None => {
                log::trace!("palette has no entry for {}, using fallback", name);
                FALLBACK_COLOR
            }
        }
    }

    /// Returns a copy with `name` set to `color`.
    pub const fn with(mut self, name: ColorName, color: Rgb565) -> Self {
        self.entries[name.index()] = Some(color);
        self
    }

    /// Number of defined entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Color arithmetic
// ============================================================================

/// Darken a color for pressed feedback.
pub fn darken(color: Rgb565) -> Rgb565 {
    Rgb565::new(
        color.r().saturating_sub(4),
        color.g().saturating_sub(8),
        color.b().saturating_sub(4),
    )
}

/// Blend `color` over `backdrop` at `percent` opacity (0-100).
///
/// RGB565 has no alpha channel, so reduced opacity is rendered by mixing
/// against the surface the element sits on.
pub fn blend(color: Rgb565, backdrop: Rgb565, percent: u8) -> Rgb565 {
    let p = percent.min(100) as u16;
    let mix = |fg: u8, bg: u8| -> u8 { ((fg as u16 * p + bg as u16 * (100 - p)) / 100) as u8 };
    Rgb565::new(
        mix(color.r(), backdrop.r()),
        mix(color.g(), backdrop.g()),
        mix(color.b(), backdrop.b()),
    )
}

/// Parse `#RRGGBB` (leading `#` optional) into RGB565.
pub fn parse_hex(s: &str) -> Result<Rgb565, ThemeError> {
    let invalid = || ThemeError::InvalidHex(crate::error::truncated(s));
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_strings() {
        for name in ColorName::ALL {
            assert_eq!(name.as_str().parse::<ColorName>(), Ok(name));
        }
        assert_eq!(ColorName::ALL[ColorName::OnBadge as usize], ColorName::OnBadge);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(matches!(
            "secondaryTUI".parse::<ColorName>(),
            Err(ThemeError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_builtin_palettes_are_complete() {
        assert_eq!(ColorPalette::light().len(), ColorName::COUNT);
        assert_eq!(ColorPalette::dark().len(), ColorName::COUNT);
        assert_ne!(
            ColorPalette::light().get(ColorName::Surface),
            ColorPalette::dark().get(ColorName::Surface)
        );
    }

    #[test]
    fn test_missing_entry_falls_back() {
        let palette = ColorPalette::empty().with(ColorName::Primary, WHITE);
        assert_eq!(palette.get_or_fallback(ColorName::Primary), WHITE);
        assert_eq!(palette.get_or_fallback(ColorName::Outline), FALLBACK_COLOR);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FFFFFF"), Ok(WHITE));
        assert_eq!(parse_hex("000000"), Ok(BLACK));
        assert!(parse_hex("#FFF").is_err());
        assert!(parse_hex("#GG0000").is_err());
        // Sign characters are not hex digits
        assert!(matches!(parse_hex("#+1+2+3"), Err(ThemeError::InvalidHex(_))));
        assert!(matches!(parse_hex("-1ffff"), Err(ThemeError::InvalidHex(_))));
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(WHITE, BLACK, 100), WHITE);
        assert_eq!(blend(WHITE, BLACK, 0), BLACK);
        let half = blend(WHITE, BLACK, 50);
        assert_eq!(half.r(), 15);
    }

    #[test]
    fn test_darken_saturates() {
        assert_eq!(darken(BLACK), BLACK);
        assert_eq!(darken(WHITE), Rgb565::new(27, 55, 27));
    }
}
