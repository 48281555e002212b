//! Style primitives shared by components
//!
//! Resolvers produce these inside a
//! [`ResolvedLayout`](super::resolver::ResolvedLayout); drawables only read them.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13, FONT_9X15};
use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Text size
// ============================================================================

/// Font scale selected by a component's size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font
    Small,
    /// 7x13 font
    Medium,
    /// 9x15 font
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_7X13,
            TextSize::Large => &FONT_9X15,
        }
    }

    /// Pixel width of `text` rendered in this size.
    pub fn text_width(&self, text: &str) -> u32 {
        let font = self.font();
        let advance = font.character_size.width + font.character_spacing;
        (text.chars().count() as u32 * advance).saturating_sub(font.character_spacing)
    }

    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }
}

// ============================================================================
// Border and opacity
// ============================================================================

/// Stroke drawn around an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgb565,
    pub width: u32,
}

impl Border {
    pub const fn new(color: Rgb565, width: u32) -> Self {
        Self { color, width }
    }
}

/// Element opacity in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(100);

    /// Opacity applied to disabled controls
    pub const DISABLED: Opacity = Opacity(38);

    pub const fn percent(value: u8) -> Self {
        if value > 100 { Opacity(100) } else { Opacity(value) }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub const fn is_opaque(&self) -> bool {
        self.0 == 100
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_uses_glyph_advance() {
        assert_eq!(TextSize::Small.text_width(""), 0);
        assert_eq!(TextSize::Small.text_width("Tag"), 18);
        assert_eq!(TextSize::Medium.text_width("Tag"), 21);
    }

    #[test]
    fn test_opacity_clamps() {
        assert_eq!(Opacity::percent(140), Opacity::OPAQUE);
        assert!(!Opacity::DISABLED.is_opaque());
    }
}
