//! Styling system for catalog components
//!
//! - [`colors`] - RGB565 constants and the semantic color table
//! - [`layout`] - Spacing and radius tokens, padding
//! - [`style`] - Borders, opacity, and text sizes
//! - [`theme`] - Theme, theme configuration, and the theme provider
//! - [`resolver`] - The style resolution contract shared by all components
//!
//! # Examples
//!
//! ```ignore
//! use swatch_core::ui::styling::*;
//! use swatch_core::ui::components::chip::{ChipStyle, ChipVariant, FilterStyle};
//!
//! let theme = Theme::light();
//! let layout = ChipStyle::new(ChipVariant::Filter(FilterStyle::OnlyTitle))
//!     .selected(true)
//!     .resolve(&theme);
//! ```

pub mod colors;
pub mod layout;
pub mod resolver;
pub mod style;
pub mod theme;

pub use colors::{ColorName, ColorPalette, FALLBACK_COLOR};
pub use layout::{BorderRadius, Padding, RADIUS, SPACING, Spacing};
pub use resolver::{Metrics, Paint, ResolvedLayout, StyleResolver, resolve};
pub use style::{Border, Opacity, TextSize};
pub use theme::{Theme, ThemeBase, ThemeConfig, ThemeProvider};
