//! Chips: compact elements for filtering, input and suggestions
//!
//! Chip geometry is a fixed lookup over variant × size × selection. The
//! paddings are design values, not a formula: a selected filter chip trades
//! leading padding for its checkmark so it keeps roughly the width it had
//! unselected, and each size class has its own pair of values.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::Alignment as TextAlignment;

use super::badge::{BadgeKind, BadgeStyle, draw_badge};
use super::glyph::{Glyph, IconSlots, draw_glyph, slot_for};
use super::text::{draw_label, label_size};
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{
    Action, ComponentId, Drawable, IconHandle, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::layouts::{Alignment, Container, Direction, SizeConstraint};
use crate::ui::styling::{
    Border, ColorName, Metrics, Opacity, Padding, Paint, StyleResolver, TextSize, Theme,
};

/// Longest chip title in bytes
pub const MAX_TITLE_LEN: usize = 32;

/// Layout of a filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStyle {
    /// Title only; a checkmark appears when selected
    OnlyTitle,
    /// Leading icon, replaced by a checkmark when selected
    WithIcon(IconHandle),
    /// Title with a trailing dropdown chevron and optional count badge
    WithButton,
}

/// Chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant {
    /// Suggests an action, always shows its icon
    Assist(IconHandle),
    /// Represents entered information, removable via its close glyph
    Input { avatar: Option<IconHandle> },
    /// Suggested value, title only
    Suggestion,
    /// Toggles a filter on and off
    Filter(FilterStyle),
}

/// Chip height class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipSize {
    Size32,
    Size40,
}

impl ChipSize {
    pub const fn height(&self) -> u32 {
        match self {
            ChipSize::Size32 => 32,
            ChipSize::Size40 => 40,
        }
    }
}

/// Style axes of a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    pub variant: ChipVariant,
    pub size: ChipSize,
    pub selected: bool,
    pub badge_count: Option<u32>,
}

impl ChipStyle {
    /// Unselected, size 32, no badge.
    pub const fn new(variant: ChipVariant) -> Self {
        Self {
            variant,
            size: ChipSize::Size32,
            selected: false,
            badge_count: None,
        }
    }

    pub const fn with_size(mut self, size: ChipSize) -> Self {
        self.size = size;
        self
    }

    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub const fn with_badge_count(mut self, count: Option<u32>) -> Self {
        self.badge_count = count;
        self
    }

    /// Only filter chips toggle their selection on touch.
    pub const fn is_selectable(&self) -> bool {
        matches!(self.variant, ChipVariant::Filter(_))
    }

    /// The badge shows only on a selected `WithButton` filter with a positive count.
    pub const fn badge_visible(&self) -> bool {
        matches!(self.variant, ChipVariant::Filter(FilterStyle::WithButton))
            && self.selected
            && matches!(self.badge_count, Some(n) if n > 0)
    }

    /// Badge style when [`badge_visible`](Self::badge_visible).
    pub fn badge(&self) -> Option<BadgeStyle> {
        match self.badge_count {
            Some(n) if self.badge_visible() => Some(BadgeStyle::new(BadgeKind::Count(n))),
            _ => None,
        }
    }

    pub const fn leading_glyph(&self) -> Option<Glyph> {
        match (self.variant, self.selected) {
            (ChipVariant::Filter(_), true) => Some(Glyph::Checkmark),
            (ChipVariant::Filter(FilterStyle::WithIcon(icon)), false) => Some(Glyph::Custom(icon)),
            (ChipVariant::Filter(FilterStyle::OnlyTitle | FilterStyle::WithButton), false) => None,
            (ChipVariant::Assist(icon), _) => Some(Glyph::Custom(icon)),
            (ChipVariant::Input { avatar: Some(icon) }, _) => Some(Glyph::Custom(icon)),
            (ChipVariant::Input { avatar: None }, _) => None,
            (ChipVariant::Suggestion, _) => None,
        }
    }

    pub const fn trailing_glyph(&self) -> Option<Glyph> {
        match self.variant {
            ChipVariant::Filter(FilterStyle::WithButton) => Some(Glyph::Chevron),
            ChipVariant::Input { .. } => Some(Glyph::Close),
            ChipVariant::Filter(FilterStyle::OnlyTitle | FilterStyle::WithIcon(_))
            | ChipVariant::Assist(_)
            | ChipVariant::Suggestion => None,
        }
    }

    /// (leading, trailing) padding for this variant, size and selection.
    const fn insets(&self) -> (u32, u32) {
        use ChipSize::{Size32, Size40};
        use ChipVariant::{Assist, Filter, Input, Suggestion};
        use FilterStyle::{OnlyTitle, WithButton, WithIcon};

        match (self.variant, self.size, self.selected) {
            (Filter(OnlyTitle), Size32, true) => (6, 12),
            (Filter(OnlyTitle), Size32, false) => (20, 20),
            (Filter(OnlyTitle), Size40, true) => (12, 18),
            (Filter(OnlyTitle), Size40, false) => (28, 28),
            (Filter(WithIcon(_)), Size32, _) => (8, 12),
            (Filter(WithIcon(_)), Size40, _) => (12, 16),
            (Filter(WithButton), Size32, true) => (6, 8),
            (Filter(WithButton), Size32, false) => (12, 8),
            (Filter(WithButton), Size40, true) => (8, 10),
            (Filter(WithButton), Size40, false) => (16, 10),
            (Assist(_), Size32, _) => (8, 16),
            (Assist(_), Size40, _) => (12, 20),
            (Input { avatar: None }, Size32, _) => (12, 8),
            (Input { avatar: None }, Size40, _) => (16, 10),
            (Input { avatar: Some(_) }, Size32, _) => (4, 8),
            (Input { avatar: Some(_) }, Size40, _) => (6, 10),
            (Suggestion, Size32, _) => (16, 16),
            (Suggestion, Size40, _) => (20, 20),
        }
    }
}

impl StyleResolver for ChipStyle {
    fn metrics(&self) -> Metrics {
        let (leading_padding, trailing_padding) = self.insets();
        let (icon, spacing, corner_radius, text_size) = match self.size {
            ChipSize::Size32 => (16, 4, 8, TextSize::Small),
            ChipSize::Size40 => (20, 6, 10, TextSize::Medium),
        };

        Metrics {
            height: self.size.height(),
            leading_padding,
            trailing_padding,
            spacing,
            icon_size: Size::new(icon, icon),
            corner_radius,
            text_size,
            show_badge: self.badge_visible(),
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        if self.selected {
            Paint {
                foreground: theme.color(ColorName::OnSecondary),
                background: Some(theme.color(ColorName::Secondary)),
                border: None,
                opacity: Opacity::OPAQUE,
            }
        } else {
            Paint {
                foreground: theme.color(ColorName::OnSurface),
                background: Some(theme.color(ColorName::Surface)),
                border: Some(Border::new(theme.color(ColorName::Outline), 1)),
                opacity: Opacity::OPAQUE,
            }
        }
    }
}

/// Rectangles of a chip's sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlots {
    pub bounds: Rectangle,
    pub leading: Option<(Glyph, Rectangle)>,
    pub title: Rectangle,
    pub badge: Option<(BadgeStyle, Rectangle)>,
    pub trailing: Option<(Glyph, Rectangle)>,
}

/// Chip component sized from its style and title
///
/// # Examples
/// ```ignore
/// let mut chip = Chip::new(
///     ComponentId(1),
///     Point::new(16, 80),
///     "Vegan",
///     ChipVariant::Filter(FilterStyle::OnlyTitle),
/// )?
/// .with_size(ChipSize::Size40);
///
/// chip.draw(&theme, &mut display)?;
/// ```
pub struct Chip {
    id: ComponentId,
    origin: Point,
    title: heapless::String<MAX_TITLE_LEN>,
    style: ChipStyle,
    dirty: bool,
}

impl Chip {
    pub fn new(
        id: ComponentId,
        origin: Point,
        title: &str,
        variant: ChipVariant,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            origin,
            title: bounded(title)?,
            style: ChipStyle::new(variant),
            dirty: true,
        })
    }

    pub fn with_size(mut self, size: ChipSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.style.selected = selected;
        self
    }

    pub fn with_badge_count(mut self, count: Option<u32>) -> Self {
        self.style.badge_count = count;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> ChipStyle {
        self.style
    }

    pub fn is_selected(&self) -> bool {
        self.style.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.style.selected != selected {
            self.style.selected = selected;
            self.dirty = true;
        }
    }

    pub fn set_badge_count(&mut self, count: Option<u32>) {
        if self.style.badge_count != count {
            self.style.badge_count = count;
            self.dirty = true;
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.dirty = true;
        }
    }

    /// Size of the chip in its current state.
    pub fn size(&self) -> Size {
        self.slots().bounds.size
    }

    /// Lay out the chip's sub-elements.
    pub fn slots(&self) -> ChipSlots {
        let metrics = self.style.metrics();
        let icon = metrics.icon_size;
        let leading = self.style.leading_glyph();
        let trailing = self.style.trailing_glyph();
        let badge = self.style.badge();

        let mut row: Container<4> = Container::new(
            Rectangle::new(self.origin, Size::new(0, metrics.height)),
            Direction::Horizontal,
        )
        .with_alignment(Alignment::Center)
        .with_padding(Padding::inline(metrics.leading_padding, metrics.trailing_padding))
        .with_spacing(metrics.spacing);

        // Four slots fit in Container<4>, so add_child cannot fail here
        let mut add = |size: Size| row.add_child(size, SizeConstraint::Fit).ok();
        let leading_index = leading.and_then(|_| add(icon));
        let title_index = add(label_size(&self.title, metrics.text_size));
        let badge_index = badge.and_then(|b| add(b.size()));
        let trailing_index = trailing.and_then(|_| add(icon));

        let bounds = Rectangle::new(self.origin, Size::new(row.natural_extent(), metrics.height));
        row.set_bounds(bounds);

        let rect = |index: Option<usize>| index.and_then(|i| row.child_bounds(i));
        ChipSlots {
            bounds,
            leading: leading.zip(rect(leading_index)),
            title: rect(title_index).unwrap_or(bounds),
            badge: badge.zip(rect(badge_index)),
            trailing: trailing.zip(rect(trailing_index)),
        }
    }

    /// Custom icons the host should paint over the drawn chip.
    pub fn icon_slots(&self, theme: &Theme) -> IconSlots {
        let color = self.style.paint(theme).foreground;
        let slots = self.slots();
        let mut out = IconSlots::new();
        for (glyph, area) in [slots.leading, slots.trailing].into_iter().flatten() {
            if let Some(slot) = slot_for(glyph, area, color) {
                let _ = out.push(slot);
            }
        }
        out
    }
}

impl Drawable for Chip {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = self.style.resolve(theme);
        let slots = self.slots();

        let radius = Size::new(layout.corner_radius, layout.corner_radius);
        RoundedRectangle::with_equal_corners(slots.bounds, radius)
            .into_styled(layout.container_style())
            .draw(display)?;

        if let Some((glyph, area)) = slots.leading {
            draw_glyph(glyph, area, layout.foreground, display)?;
        }

        draw_label(
            &self.title,
            slots.title,
            layout.text_size,
            layout.foreground,
            TextAlignment::Left,
            display,
        )?;

        if let Some((badge, area)) = slots.badge {
            draw_badge(&badge, area, theme, display)?;
        }

        if let Some((glyph, area)) = slots.trailing {
            draw_glyph(glyph, area, layout.foreground, display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.slots().bounds
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

impl Touchable for Chip {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let TouchEvent::Press(point) = event else {
            return TouchResult::NotHandled;
        };
        if !self.contains_point(point) {
            return TouchResult::NotHandled;
        }

        match self.style.variant {
            ChipVariant::Filter(_) => {
                let selected = !self.style.selected;
                self.set_selected(selected);
                TouchResult::Action(Action::Toggled {
                    id: self.id,
                    selected,
                })
            }
            ChipVariant::Input { .. } => {
                let on_close = self
                    .slots()
                    .trailing
                    .is_some_and(|(_, area)| area.contains(point.to_point()));
                if on_close {
                    TouchResult::Action(Action::Removed(self.id))
                } else {
                    TouchResult::Action(Action::Pressed(self.id))
                }
            }
            ChipVariant::Assist(_) | ChipVariant::Suggestion => {
                TouchResult::Action(Action::Pressed(self.id))
            }
        }
    }
}

impl Accessible for Chip {
    fn accessibility_elements(&self) -> AccessibilityElements {
        use accessibility::chip;

        let slots = self.slots();
        let mut elements = AccessibilityElements::new();
        accessibility::push(&mut elements, chip::CONTAINER, slots.bounds);
        if let Some((_, area)) = slots.leading {
            accessibility::push(&mut elements, chip::LEADING_ICON, area);
        }
        accessibility::push(&mut elements, chip::TITLE, slots.title);
        if let Some((_, area)) = slots.badge {
            accessibility::push(&mut elements, chip::BADGE, area);
        }
        if let Some((_, area)) = slots.trailing {
            accessibility::push(&mut elements, chip::TRAILING_ICON, area);
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    const ICON: IconHandle = IconHandle(7);

    fn all_variants() -> [ChipVariant; 7] {
        [
            ChipVariant::Assist(ICON),
            ChipVariant::Input { avatar: None },
            ChipVariant::Input { avatar: Some(ICON) },
            ChipVariant::Suggestion,
            ChipVariant::Filter(FilterStyle::OnlyTitle),
            ChipVariant::Filter(FilterStyle::WithIcon(ICON)),
            ChipVariant::Filter(FilterStyle::WithButton),
        ]
    }

    fn insets(variant: ChipVariant, size: ChipSize, selected: bool) -> (u32, u32) {
        let m = ChipStyle::new(variant).with_size(size).selected(selected).metrics();
        (m.leading_padding, m.trailing_padding)
    }

    #[test]
    fn test_selected_filter_size32_scenario() {
        let theme = Theme::light();
        let layout = ChipStyle::new(ChipVariant::Filter(FilterStyle::OnlyTitle))
            .with_size(ChipSize::Size32)
            .selected(true)
            .resolve(&theme);

        assert_eq!(layout.leading_padding, 6);
        assert_eq!(layout.trailing_padding, 12);
        assert_eq!(layout.icon_size, Size::new(16, 16));
        assert_eq!(layout.foreground, theme.color(ColorName::OnSecondary));
        assert_eq!(layout.background, Some(theme.color(ColorName::Secondary)));
        assert_eq!(layout.border, None);
    }

    #[test]
    fn test_filter_padding_table() {
        let only_title = ChipVariant::Filter(FilterStyle::OnlyTitle);
        assert_eq!(insets(only_title, ChipSize::Size32, true), (6, 12));
        assert_eq!(insets(only_title, ChipSize::Size32, false), (20, 20));
        assert_eq!(insets(only_title, ChipSize::Size40, true), (12, 18));
        assert_eq!(insets(only_title, ChipSize::Size40, false), (28, 28));

        let with_icon = ChipVariant::Filter(FilterStyle::WithIcon(ICON));
        assert_eq!(insets(with_icon, ChipSize::Size32, true), (8, 12));
        assert_eq!(insets(with_icon, ChipSize::Size32, false), (8, 12));
        assert_eq!(insets(with_icon, ChipSize::Size40, false), (12, 16));

        let with_button = ChipVariant::Filter(FilterStyle::WithButton);
        assert_eq!(insets(with_button, ChipSize::Size32, true), (6, 8));
        assert_eq!(insets(with_button, ChipSize::Size32, false), (12, 8));
        assert_eq!(insets(with_button, ChipSize::Size40, true), (8, 10));
        assert_eq!(insets(with_button, ChipSize::Size40, false), (16, 10));
    }

    #[test]
    fn test_other_variant_padding_table() {
        assert_eq!(insets(ChipVariant::Assist(ICON), ChipSize::Size32, false), (8, 16));
        assert_eq!(insets(ChipVariant::Assist(ICON), ChipSize::Size40, false), (12, 20));
        assert_eq!(
            insets(ChipVariant::Input { avatar: None }, ChipSize::Size32, false),
            (12, 8)
        );
        assert_eq!(
            insets(ChipVariant::Input { avatar: Some(ICON) }, ChipSize::Size40, false),
            (6, 10)
        );
        assert_eq!(insets(ChipVariant::Suggestion, ChipSize::Size32, false), (16, 16));
        assert_eq!(insets(ChipVariant::Suggestion, ChipSize::Size40, true), (20, 20));
    }

    #[test]
    fn test_badge_visibility_cube() {
        for with_button in [false, true] {
            for selected in [false, true] {
                for count in [None, Some(3)] {
                    let variant = if with_button {
                        ChipVariant::Filter(FilterStyle::WithButton)
                    } else {
                        ChipVariant::Filter(FilterStyle::OnlyTitle)
                    };
                    let style = ChipStyle::new(variant)
                        .selected(selected)
                        .with_badge_count(count);

                    let expected = with_button && selected && count.is_some();
                    assert_eq!(
                        style.badge_visible(),
                        expected,
                        "with_button={} selected={} count={:?}",
                        with_button,
                        selected,
                        count
                    );
                    assert_eq!(style.metrics().show_badge, expected);
                    assert_eq!(style.badge().is_some(), expected);
                }
            }
        }
    }

    #[test]
    fn test_zero_badge_count_is_hidden() {
        let style = ChipStyle::new(ChipVariant::Filter(FilterStyle::WithButton))
            .selected(true)
            .with_badge_count(Some(0));
        assert!(!style.badge_visible());
    }

    #[test]
    fn test_product_space_is_total_and_deterministic() {
        for theme in [Theme::light(), Theme::dark()] {
            for variant in all_variants() {
                for size in [ChipSize::Size32, ChipSize::Size40] {
                    for selected in [false, true] {
                        for count in [None, Some(0), Some(5)] {
                            let style = ChipStyle::new(variant)
                                .with_size(size)
                                .selected(selected)
                                .with_badge_count(count);
                            let layout = style.resolve(&theme);
                            assert_well_formed(&layout);
                            assert_idempotent(&style, &theme);
                            assert_eq!(layout.height, size.height());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_unselected_colors() {
        let theme = Theme::dark();
        let layout = ChipStyle::new(ChipVariant::Suggestion).resolve(&theme);
        assert_eq!(layout.foreground, theme.color(ColorName::OnSurface));
        assert_eq!(layout.background, Some(theme.color(ColorName::Surface)));
        assert_eq!(layout.border, Some(Border::new(theme.color(ColorName::Outline), 1)));
    }

    #[test]
    fn test_selected_chip_width_tracks_unselected() {
        let mut chip = Chip::new(
            ComponentId(1),
            Point::zero(),
            "Vegan",
            ChipVariant::Filter(FilterStyle::OnlyTitle),
        )
        .unwrap();
        // 20 + 30 + 20
        assert_eq!(chip.size(), Size::new(70, 32));

        chip.set_selected(true);
        // 6 + 16 + 4 + 30 + 12
        assert_eq!(chip.size(), Size::new(68, 32));
    }

    #[test]
    fn test_slots_for_selected_with_button() {
        let chip = Chip::new(
            ComponentId(2),
            Point::new(10, 10),
            "Sort",
            ChipVariant::Filter(FilterStyle::WithButton),
        )
        .unwrap()
        .with_selected(true)
        .with_badge_count(Some(2));

        let slots = chip.slots();
        let (glyph, leading) = slots.leading.unwrap();
        assert_eq!(glyph, Glyph::Checkmark);
        assert_eq!(leading, Rectangle::new(Point::new(16, 18), Size::new(16, 16)));
        assert!(slots.badge.is_some());
        assert_eq!(slots.trailing.unwrap().0, Glyph::Chevron);
        // 6 + 16 + 4 + 24 + 4 + 16 + 4 + 16 + 8
        assert_eq!(slots.bounds.size.width, 98);
    }

    #[test]
    fn test_touch_toggles_filter() {
        let mut chip = Chip::new(
            ComponentId(3),
            Point::zero(),
            "Open now",
            ChipVariant::Filter(FilterStyle::OnlyTitle),
        )
        .unwrap();

        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert_eq!(
            result,
            TouchResult::Action(Action::Toggled {
                id: ComponentId(3),
                selected: true
            })
        );
        assert!(chip.is_selected());

        let outside = chip.handle_touch(TouchEvent::Press(TouchPoint::new(500, 5)));
        assert_eq!(outside, TouchResult::NotHandled);
        assert!(chip.is_selected());
    }

    #[test]
    fn test_input_chip_close_glyph_removes() {
        let mut chip = Chip::new(
            ComponentId(4),
            Point::zero(),
            "Ada",
            ChipVariant::Input { avatar: None },
        )
        .unwrap();
        let (_, close) = chip.slots().trailing.unwrap();
        let center = close.center();

        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(
            center.x as u16,
            center.y as u16,
        )));
        assert_eq!(result, TouchResult::Action(Action::Removed(ComponentId(4))));

        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(13, 16)));
        assert_eq!(result, TouchResult::Action(Action::Pressed(ComponentId(4))));
    }

    #[test]
    fn test_icon_slots_report_custom_icons_only() {
        let theme = Theme::light();
        let chip = Chip::new(
            ComponentId(5),
            Point::zero(),
            "Directions",
            ChipVariant::Assist(ICON),
        )
        .unwrap();
        let slots = chip.icon_slots(&theme);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].icon, ICON);
        assert_eq!(slots[0].area.size, Size::new(16, 16));

        let selected = Chip::new(
            ComponentId(6),
            Point::zero(),
            "Nearby",
            ChipVariant::Filter(FilterStyle::WithIcon(ICON)),
        )
        .unwrap()
        .with_selected(true);
        // The checkmark replaces the custom icon
        assert!(selected.icon_slots(&theme).is_empty());
    }

    #[test]
    fn test_accessibility_elements() {
        let chip = Chip::new(
            ComponentId(7),
            Point::zero(),
            "Sort",
            ChipVariant::Filter(FilterStyle::WithButton),
        )
        .unwrap()
        .with_selected(true)
        .with_badge_count(Some(1));

        let elements = chip.accessibility_elements();
        let ids: heapless::Vec<&str, 8> = elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids.as_slice(),
            &[
                "chip",
                "chip.leadingIcon",
                "chip.title",
                "chip.badge",
                "chip.trailingIcon"
            ]
        );
    }

    #[test]
    fn test_title_capacity() {
        let long = "a title that is far too long for a chip";
        assert_eq!(
            Chip::new(ComponentId(8), Point::zero(), long, ChipVariant::Suggestion).err(),
            Some(CatalogError::LabelTooLong(MAX_TITLE_LEN))
        );
    }
}
