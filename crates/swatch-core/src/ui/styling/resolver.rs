//! Style resolution
//!
//! Every component describes its appearance as a small record of orthogonal
//! style axes (variant, size class, selection or interaction state). A
//! [`StyleResolver`] maps one point of that product space, together with the
//! active [`Theme`], to a [`ResolvedLayout`]: the complete set of geometry
//! and color values a renderer consumes.
//!
//! Resolution is pure. The same style and theme always produce the same
//! layout, nothing is cached between render passes, and every combination
//! of axes has a defined result. Resolvers match on their enums without
//! wildcard arms so a new variant fails the build until it is handled.

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::style::{Border, Opacity, TextSize};
use super::theme::Theme;

/// Geometry of one component state
///
/// Metrics never depend on theme colors, so components can size and
/// hit-test themselves without a theme at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub height: u32,
    pub leading_padding: u32,
    pub trailing_padding: u32,
    pub spacing: u32,
    pub icon_size: Size,
    pub corner_radius: u32,
    pub text_size: TextSize,
    pub show_badge: bool,
}

impl Metrics {
    /// Width of a row holding `content_width` pixels of elements.
    pub fn outer_width(&self, content_width: u32) -> u32 {
        self.leading_padding + content_width + self.trailing_padding
    }
}

/// Colors of one component state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub foreground: Rgb565,
    pub background: Option<Rgb565>,
    pub border: Option<Border>,
    pub opacity: Opacity,
}

/// Fully computed appearance of one component for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Overall height of the component (pixels)
    pub height: u32,

    /// Space before the first element (pixels)
    pub leading_padding: u32,

    /// Space after the last element (pixels)
    pub trailing_padding: u32,

    /// Gap between adjacent elements (pixels)
    pub spacing: u32,

    /// Box reserved for each icon
    pub icon_size: Size,

    pub corner_radius: u32,

    pub text_size: TextSize,

    /// Text and glyph color
    pub foreground: Rgb565,

    /// Container fill, `None` for transparent components
    pub background: Option<Rgb565>,

    pub border: Option<Border>,

    pub opacity: Opacity,

    /// Whether an attached badge is rendered
    pub show_badge: bool,
}

impl ResolvedLayout {
    pub fn new(metrics: Metrics, paint: Paint) -> Self {
        Self {
            height: metrics.height,
            leading_padding: metrics.leading_padding,
            trailing_padding: metrics.trailing_padding,
            spacing: metrics.spacing,
            icon_size: metrics.icon_size,
            corner_radius: metrics.corner_radius,
            text_size: metrics.text_size,
            foreground: paint.foreground,
            background: paint.background,
            border: paint.border,
            opacity: paint.opacity,
            show_badge: metrics.show_badge,
        }
    }

    /// Primitive style for the component's container shape.
    pub fn container_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border
            && border.width > 0
        {
            builder = builder
                .stroke_color(border.color)
                .stroke_width(border.width);
        }

        builder.build()
    }

    /// Width of a row holding `content_width` pixels of elements.
    pub fn outer_width(&self, content_width: u32) -> u32 {
        self.leading_padding + content_width + self.trailing_padding
    }
}

/// A style record that can be resolved against a theme
///
/// Implementors provide geometry and colors separately; [`resolve`]
/// combines them.
///
/// [`resolve`]: StyleResolver::resolve
pub trait StyleResolver {
    fn metrics(&self) -> Metrics;

    fn paint(&self, theme: &Theme) -> Paint;

    fn resolve(&self, theme: &Theme) -> ResolvedLayout {
        ResolvedLayout::new(self.metrics(), self.paint(theme))
    }
}

/// Resolve `style` against `theme`.
pub fn resolve<S: StyleResolver + ?Sized>(style: &S, theme: &Theme) -> ResolvedLayout {
    style.resolve(theme)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared assertions for resolver tests.

    use super::*;

    /// Every numeric field of a resolved layout is usable by a renderer.
    pub fn assert_well_formed(layout: &ResolvedLayout) {
        assert!(layout.height > 0, "height must be positive: {:?}", layout);
        assert!(layout.icon_size.width > 0 && layout.icon_size.height > 0);
        assert!(layout.icon_size.height <= layout.height);
        assert!(layout.corner_radius <= layout.height);
        assert!(layout.opacity.value() <= 100);
        if let Some(border) = layout.border {
            assert!(border.width > 0);
        }
    }

    /// Resolving twice yields identical output.
    pub fn assert_idempotent<S: StyleResolver>(style: &S, theme: &Theme) {
        assert_eq!(style.resolve(theme), style.resolve(theme));
    }
}
