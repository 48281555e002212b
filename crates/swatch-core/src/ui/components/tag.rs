//! Tags: static, tonal labels for status and categories

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::Alignment as TextAlignment;

use super::glyph::{Glyph, IconSlots, slot_for};
use super::text::{draw_label, label_size};
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{Drawable, IconHandle};
use crate::ui::layouts::{Alignment, Container, Direction, SizeConstraint};
use crate::ui::styling::layout::SPACING;
use crate::ui::styling::{
    ColorName, Metrics, Opacity, Padding, Paint, StyleResolver, TextSize, Theme,
};

pub const MAX_TAG_LEN: usize = 24;

/// Semantic tone of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl TagTone {
    /// (container, content) color pair.
    const fn colors(&self) -> (ColorName, ColorName) {
        match self {
            TagTone::Neutral => (ColorName::SurfaceVariant, ColorName::OnSurfaceVariant),
            TagTone::Info => (ColorName::InfoContainer, ColorName::OnInfoContainer),
            TagTone::Success => (ColorName::SuccessContainer, ColorName::OnSuccessContainer),
            TagTone::Warning => (ColorName::WarningContainer, ColorName::OnWarningContainer),
            TagTone::Error => (ColorName::ErrorContainer, ColorName::OnErrorContainer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSize {
    Small,
    Medium,
}

/// Style axes of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyle {
    pub tone: TagTone,
    pub size: TagSize,
    pub icon: Option<IconHandle>,
}

impl TagStyle {
    pub const fn new(tone: TagTone) -> Self {
        Self {
            tone,
            size: TagSize::Small,
            icon: None,
        }
    }

    pub const fn with_size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_icon(mut self, icon: Option<IconHandle>) -> Self {
        self.icon = icon;
        self
    }
}

impl StyleResolver for TagStyle {
    fn metrics(&self) -> Metrics {
        let (height, padding, icon, corner_radius, text_size) = match self.size {
            TagSize::Small => (24, 8, 12, 4, TextSize::Small),
            TagSize::Medium => (32, 12, 16, 6, TextSize::Medium),
        };
        // An icon sits closer to the edge than text does
        let leading_padding = match self.icon {
            Some(_) => padding - 2,
            None => padding,
        };

        Metrics {
            height,
            leading_padding,
            trailing_padding: padding,
            spacing: SPACING.small,
            icon_size: Size::new(icon, icon),
            corner_radius,
            text_size,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        let (container, content) = self.tone.colors();
        Paint {
            foreground: theme.color(content),
            background: Some(theme.color(container)),
            border: None,
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Non-interactive tag
pub struct Tag {
    origin: Point,
    title: heapless::String<MAX_TAG_LEN>,
    style: TagStyle,
    dirty: bool,
}

impl Tag {
    pub fn new(origin: Point, title: &str, tone: TagTone) -> Result<Self, CatalogError> {
        Ok(Self {
            origin,
            title: bounded(title)?,
            style: TagStyle::new(tone),
            dirty: true,
        })
    }

    pub fn with_size(mut self, size: TagSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.style.icon = Some(icon);
        self
    }

    pub fn style(&self) -> TagStyle {
        self.style
    }

    pub fn set_tone(&mut self, tone: TagTone) {
        if self.style.tone != tone {
            self.style.tone = tone;
            self.dirty = true;
        }
    }

    /// Returns (bounds, icon, title) rectangles.
    fn slots(&self) -> (Rectangle, Option<Rectangle>, Rectangle) {
        let metrics = self.style.metrics();
        let mut row: Container<2> = Container::new(
            Rectangle::new(self.origin, Size::new(0, metrics.height)),
            Direction::Horizontal,
        )
        .with_alignment(Alignment::Center)
        .with_padding(Padding::inline(metrics.leading_padding, metrics.trailing_padding))
        .with_spacing(metrics.spacing);

        let icon = self
            .style
            .icon
            .and_then(|_| row.add_child(metrics.icon_size, SizeConstraint::Fit).ok());
        let title = row
            .add_child(label_size(&self.title, metrics.text_size), SizeConstraint::Fit)
            .ok();

        let bounds = Rectangle::new(self.origin, Size::new(row.natural_extent(), metrics.height));
        row.set_bounds(bounds);

        let rect = |index: Option<usize>| index.and_then(|i| row.child_bounds(i));
        (bounds, rect(icon), rect(title).unwrap_or(bounds))
    }

    pub fn icon_slots(&self, theme: &Theme) -> IconSlots {
        let mut out = IconSlots::new();
        let (_, area, _) = self.slots();
        if let (Some(icon), Some(area)) = (self.style.icon, area)
            && let Some(slot) =
                slot_for(Glyph::Custom(icon), area, self.style.paint(theme).foreground)
        {
            let _ = out.push(slot);
        }
        out
    }
}

impl Drawable for Tag {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = self.style.resolve(theme);
        let (bounds, _, title) = self.slots();

        let radius = Size::new(layout.corner_radius, layout.corner_radius);
        RoundedRectangle::with_equal_corners(bounds, radius)
            .into_styled(layout.container_style())
            .draw(display)?;

        draw_label(
            &self.title,
            title,
            layout.text_size,
            layout.foreground,
            TextAlignment::Left,
            display,
        )
    }

    fn bounds(&self) -> Rectangle {
        self.slots().0
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
}

impl Accessible for Tag {
    fn accessibility_elements(&self) -> AccessibilityElements {
        use accessibility::tag;

        let (bounds, icon, title) = self.slots();
        let mut elements = AccessibilityElements::new();
        accessibility::push(&mut elements, tag::CONTAINER, bounds);
        if let Some(area) = icon {
            accessibility::push(&mut elements, tag::ICON, area);
        }
        accessibility::push(&mut elements, tag::TITLE, title);
        elements
    }
}
