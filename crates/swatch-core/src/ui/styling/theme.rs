//! Theme configuration and the theme provider
//!
//! A [`Theme`] wraps the semantic color table. Geometry never depends on the
//! theme. Resolvers and drawables receive it by reference on every render
//! pass; nothing in the catalog reads a theme from global state.
//!
//! [`ThemeProvider`] is the single shared, swappable slot a host keeps the
//! current theme in. A swap replaces the whole table at once, and every read
//! after [`ThemeProvider::set`] returns observes the new table.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use super::colors::{ColorName, ColorPalette, parse_hex};
use crate::error::ThemeError;

// ============================================================================
// Theme
// ============================================================================

/// Colors applied to every component in a render pass
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::light();
/// let layout = chip_style.resolve(&theme);
/// let title = theme.color(ColorName::OnSurface);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: ColorPalette,
}

impl Default for Theme {
    /// Returns the light theme
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
        }
    }

    /// Resolve a semantic color; missing entries degrade to the fallback color.
    pub fn color(&self, name: ColorName) -> Rgb565 {
        self.palette.get_or_fallback(name)
    }

    /// Build a theme from configuration.
    ///
    /// With a `base`, listed colors override the base palette. Without one
    /// the palette contains only the listed colors.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut palette = match config.base {
            Some(ThemeBase::Light) => ColorPalette::light(),
            Some(ThemeBase::Dark) => ColorPalette::dark(),
            None => ColorPalette::empty(),
        };

        for (name, hex) in &config.colors {
            let name: ColorName = name.parse()?;
            palette = palette.with(name, parse_hex(hex)?);
        }

        if palette.len() < ColorName::COUNT {
            log::warn!(
                "theme defines {} of {} colors; missing entries use the fallback color",
                palette.len(),
                ColorName::COUNT
            );
        }

        Ok(Self { palette })
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Built-in palette a configuration starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeBase {
    Light,
    Dark,
}

/// Serializable theme description
///
/// ```toml
/// base = "dark"
///
/// [colors]
/// primary = "#FFB000"
/// onPrimary = "#201000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub base: Option<ThemeBase>,
    /// camelCase color name to `#RRGGBB`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

// ============================================================================
// Theme provider
// ============================================================================

/// Shared slot holding the current theme
///
/// Reads copy the whole table out under the lock and writes replace it under
/// the lock, so a render pass never sees a half-updated theme.
///
/// ```ignore
/// static THEME: ThemeProvider = ThemeProvider::new(Theme::light());
///
/// THEME.set(Theme::dark());
/// let theme = THEME.get();
/// ```
pub struct ThemeProvider {
    current: Mutex<CriticalSectionRawMutex, Cell<Theme>>,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeProvider {
    pub const fn new(theme: Theme) -> Self {
        Self {
            current: Mutex::new(Cell::new(theme)),
        }
    }

    /// Snapshot of the current theme.
    pub fn get(&self) -> Theme {
        self.current.lock(|cell| cell.get())
    }

    /// Resolve one color from the current theme.
    pub fn color(&self, name: ColorName) -> Rgb565 {
        self.get().color(name)
    }

    /// Replace the whole theme. Last writer wins.
    pub fn set(&self, theme: Theme) {
        self.current.lock(|cell| cell.set(theme));
        log::debug!("theme replaced ({} colors)", theme.palette.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::chip::{ChipStyle, ChipVariant, FilterStyle};
    use crate::ui::styling::colors::{FALLBACK_COLOR, WHITE};
    use crate::ui::styling::resolve;

    #[test]
    fn test_set_is_visible_to_next_get() {
        let provider = ThemeProvider::new(Theme::light());
        assert_eq!(provider.get(), Theme::light());

        provider.set(Theme::dark());
        assert_eq!(provider.get(), Theme::dark());
        assert_eq!(
            provider.color(ColorName::Surface),
            Theme::dark().color(ColorName::Surface)
        );

        provider.set(Theme::light());
        assert_eq!(provider.get(), Theme::light());
    }

    #[test]
    fn test_next_resolve_after_set_uses_new_theme() {
        let provider = ThemeProvider::new(Theme::light());
        let chip = ChipStyle::new(ChipVariant::Filter(FilterStyle::OnlyTitle)).selected(true);

        let before = resolve(&chip, &provider.get());
        assert_eq!(before.background, Some(Theme::light().color(ColorName::Secondary)));

        provider.set(Theme::dark());
        let after = resolve(&chip, &provider.get());
        assert_eq!(after.background, Some(Theme::dark().color(ColorName::Secondary)));
        assert_eq!(after.foreground, Theme::dark().color(ColorName::OnSecondary));
        assert_ne!(before.background, after.background);
        assert_ne!(before.foreground, after.foreground);
        // Geometry does not depend on the theme
        assert_eq!(before.leading_padding, after.leading_padding);
        assert_eq!(before.height, after.height);
    }

    #[test]
    fn test_set_replaces_whole_table() {
        let provider = ThemeProvider::default();
        let sparse = Theme {
            palette: ColorPalette::empty().with(ColorName::Primary, WHITE),
        };
        provider.set(sparse);

        assert_eq!(provider.color(ColorName::Primary), WHITE);
        // No merge with the previous table
        assert_eq!(provider.color(ColorName::Surface), FALLBACK_COLOR);
    }

    #[test]
    fn test_config_overrides_base() {
        let mut colors = BTreeMap::new();
        colors.insert(String::from("primary"), String::from("#FFFFFF"));
        let config = ThemeConfig {
            base: Some(ThemeBase::Dark),
            colors,
        };

        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.color(ColorName::Primary), WHITE);
        assert_eq!(
            theme.color(ColorName::Surface),
            Theme::dark().color(ColorName::Surface)
        );
    }

    #[test]
    fn test_config_without_base_is_sparse() {
        let mut colors = BTreeMap::new();
        colors.insert(String::from("onSurface"), String::from("#FFFFFF"));
        let theme = Theme::from_config(&ThemeConfig { base: None, colors }).unwrap();

        assert_eq!(theme.palette.len(), 1);
        assert_eq!(theme.color(ColorName::DisabledContent), FALLBACK_COLOR);
    }

    #[test]
    fn test_config_errors() {
        let mut colors = BTreeMap::new();
        colors.insert(String::from("brandPink"), String::from("#FF00FF"));
        let err = Theme::from_config(&ThemeConfig { base: None, colors }).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColor(_)));

        let mut colors = BTreeMap::new();
        colors.insert(String::from("primary"), String::from("blue"));
        let err = Theme::from_config(&ThemeConfig { base: None, colors }).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidHex(_)));
    }
}
