//! Notification badge: a dot or a small count pill

use core::fmt::Write;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::Alignment;

use super::text::draw_label;
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{DirtyRegion, Drawable};
use crate::ui::styling::{ColorName, Metrics, Opacity, Paint, StyleResolver, TextSize, Theme};

/// Counts above this render as `99+`
pub const MAX_DISPLAYED_COUNT: u32 = 99;

/// What the badge shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Dot,
    Count(u32),
}

/// Style axes of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub kind: BadgeKind,
}

impl BadgeStyle {
    pub const fn new(kind: BadgeKind) -> Self {
        Self { kind }
    }

    /// A count badge with nothing to count is hidden.
    pub const fn is_visible(&self) -> bool {
        match self.kind {
            BadgeKind::Dot => true,
            BadgeKind::Count(n) => n > 0,
        }
    }

    /// Text shown inside the badge, empty for dots.
    pub fn label(&self) -> heapless::String<4> {
        let mut out = heapless::String::new();
        match self.kind {
            BadgeKind::Dot => {}
            BadgeKind::Count(n) if n > MAX_DISPLAYED_COUNT => {
                let _ = write!(out, "{}+", MAX_DISPLAYED_COUNT);
            }
            BadgeKind::Count(n) => {
                let _ = write!(out, "{}", n);
            }
        }
        out
    }

    /// Rendered size: dots are square, counts grow with their label.
    pub fn size(&self) -> Size {
        let metrics = self.metrics();
        match self.kind {
            BadgeKind::Dot => metrics.icon_size,
            BadgeKind::Count(_) => {
                let text = metrics.text_size.text_width(&self.label());
                Size::new(metrics.outer_width(text).max(metrics.height), metrics.height)
            }
        }
    }
}

impl StyleResolver for BadgeStyle {
    fn metrics(&self) -> Metrics {
        let (height, padding) = match self.kind {
            BadgeKind::Dot => (8, 0),
            BadgeKind::Count(_) => (16, 4),
        };

        Metrics {
            height,
            leading_padding: padding,
            trailing_padding: padding,
            spacing: 0,
            icon_size: Size::new(height, height),
            corner_radius: height / 2,
            text_size: TextSize::Small,
            show_badge: self.is_visible(),
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        Paint {
            foreground: theme.color(ColorName::OnBadge),
            background: Some(theme.color(ColorName::Badge)),
            border: None,
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Draw a badge of `style` into `area`.
pub(crate) fn draw_badge<D: DrawTarget<Color = Rgb565>>(
    style: &BadgeStyle,
    area: Rectangle,
    theme: &Theme,
    display: &mut D,
) -> Result<(), D::Error> {
    let layout = style.resolve(theme);
    if !layout.show_badge {
        return Ok(());
    }

    let radius = Size::new(layout.corner_radius, layout.corner_radius);
    RoundedRectangle::with_equal_corners(area, radius)
        .into_styled(layout.container_style())
        .draw(display)?;

    draw_label(
        &style.label(),
        area,
        layout.text_size,
        layout.foreground,
        Alignment::Center,
        display,
    )
}

/// Standalone badge centered on an anchor point
pub struct Badge {
    anchor: Point,
    style: BadgeStyle,
    dirty: bool,
}

impl Badge {
    pub fn new(anchor: Point, kind: BadgeKind) -> Self {
        Self {
            anchor,
            style: BadgeStyle::new(kind),
            dirty: true,
        }
    }

    pub fn style(&self) -> BadgeStyle {
        self.style
    }

    pub fn set_kind(&mut self, kind: BadgeKind) {
        if self.style.kind != kind {
            self.style.kind = kind;
            self.dirty = true;
        }
    }

    fn area(&self) -> Rectangle {
        Rectangle::with_center(self.anchor, self.style.size())
    }
}

impl Drawable for Badge {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_badge(&self.style, self.area(), theme, display)
    }

    fn bounds(&self) -> Rectangle {
        self.area()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        self.dirty.then(|| DirtyRegion::new(self.area()))
    }
}

impl Accessible for Badge {
    fn accessibility_elements(&self) -> AccessibilityElements {
        let mut elements = AccessibilityElements::new();
        if self.style.is_visible() {
            let area = self.area();
            accessibility::push(&mut elements, accessibility::badge::CONTAINER, area);
            if matches!(self.style.kind, BadgeKind::Count(_)) {
                accessibility::push(&mut elements, accessibility::badge::COUNT, area);
            }
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    #[test]
    fn test_count_label_caps() {
        assert_eq!(BadgeStyle::new(BadgeKind::Count(7)).label().as_str(), "7");
        assert_eq!(BadgeStyle::new(BadgeKind::Count(99)).label().as_str(), "99");
        assert_eq!(BadgeStyle::new(BadgeKind::Count(100)).label().as_str(), "99+");
        assert_eq!(BadgeStyle::new(BadgeKind::Dot).label().as_str(), "");
    }

    #[test]
    fn test_zero_count_is_hidden() {
        let theme = Theme::light();
        assert!(!BadgeStyle::new(BadgeKind::Count(0)).resolve(&theme).show_badge);
        assert!(BadgeStyle::new(BadgeKind::Count(1)).resolve(&theme).show_badge);
        assert!(BadgeStyle::new(BadgeKind::Dot).resolve(&theme).show_badge);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(BadgeStyle::new(BadgeKind::Dot).size(), Size::new(8, 8));
        // Single digit stays round
        assert_eq!(BadgeStyle::new(BadgeKind::Count(3)).size(), Size::new(16, 16));
        // "99+" is 18px of text plus 4px either side
        assert_eq!(BadgeStyle::new(BadgeKind::Count(250)).size(), Size::new(26, 16));
    }

    #[test]
    fn test_resolution_is_well_formed() {
        let theme = Theme::dark();
        for kind in [BadgeKind::Dot, BadgeKind::Count(0), BadgeKind::Count(12)] {
            let style = BadgeStyle::new(kind);
            assert_well_formed(&style.resolve(&theme));
            assert_idempotent(&style, &theme);
        }
    }

    #[test]
    fn test_hidden_badge_reports_no_elements() {
        let badge = Badge::new(Point::new(20, 20), BadgeKind::Count(0));
        assert!(badge.accessibility_elements().is_empty());

        let badge = Badge::new(Point::new(20, 20), BadgeKind::Count(4));
        let elements = badge.accessibility_elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].id.as_str(), "badge.count");
    }
}
