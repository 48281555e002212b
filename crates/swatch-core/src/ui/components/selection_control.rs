//! Radio buttons and checkboxes
//!
//! Both controls share one resolver. Enabled/disabled crossed with
//! selected/unselected gives four distinct appearances; disabled controls
//! render at 38% opacity against the page background.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::Alignment as TextAlignment;

use super::glyph::{Glyph, draw_glyph};
use super::text::{draw_label, label_size};
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{
    Action, ComponentId, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::layouts::{Alignment, Container, Direction, SizeConstraint};
use crate::ui::styling::colors::blend;
use crate::ui::styling::layout::SPACING;
use crate::ui::styling::{
    Border, ColorName, Metrics, Opacity, Padding, Paint, ResolvedLayout, StyleResolver, TextSize,
    Theme,
};

pub const MAX_LABEL_LEN: usize = 32;

/// Side of the square control box
const CONTROL_SIZE: u32 = 20;
/// Diameter of a selected radio's inner dot
const DOT_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    /// Checkbox only: some but not all children are checked
    Indeterminate,
}

impl CheckState {
    pub const fn is_selected(&self) -> bool {
        match self {
            CheckState::Unchecked => false,
            CheckState::Checked | CheckState::Indeterminate => true,
        }
    }
}

/// Mark drawn inside the control box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMark {
    None,
    Dot,
    Check,
    Dash,
}

/// Style axes of a radio or checkbox
///
/// Radios have no mixed state; an indeterminate radio resolves as checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionControlStyle {
    pub kind: ControlKind,
    pub state: CheckState,
    pub enabled: bool,
}

impl SelectionControlStyle {
    pub const fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            state: CheckState::Unchecked,
            enabled: true,
        }
    }

    pub const fn with_state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn mark(&self) -> ControlMark {
        match (self.kind, self.state) {
            (ControlKind::Radio | ControlKind::Checkbox, CheckState::Unchecked) => {
                ControlMark::None
            }
            (ControlKind::Radio, CheckState::Checked | CheckState::Indeterminate) => {
                ControlMark::Dot
            }
            (ControlKind::Checkbox, CheckState::Checked) => ControlMark::Check,
            (ControlKind::Checkbox, CheckState::Indeterminate) => ControlMark::Dash,
        }
    }

    /// Label color before opacity is applied.
    pub fn label_color(&self, theme: &Theme) -> Rgb565 {
        theme.color(ColorName::OnSurface)
    }
}

impl StyleResolver for SelectionControlStyle {
    fn metrics(&self) -> Metrics {
        let corner_radius = match self.kind {
            ControlKind::Radio => CONTROL_SIZE / 2,
            ControlKind::Checkbox => 4,
        };

        Metrics {
            height: 24,
            leading_padding: 0,
            trailing_padding: 0,
            spacing: SPACING.medium,
            icon_size: Size::new(CONTROL_SIZE, CONTROL_SIZE),
            corner_radius,
            text_size: TextSize::Medium,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        let c = |name: ColorName| theme.color(name);
        let selected = self.state.is_selected();

        let (mark, fill, border, opacity) = match (self.enabled, selected, self.kind) {
            (true, true, ControlKind::Checkbox) => (
                c(ColorName::OnPrimary),
                c(ColorName::Primary),
                c(ColorName::Primary),
                Opacity::OPAQUE,
            ),
            (true, true, ControlKind::Radio) => (
                c(ColorName::Primary),
                c(ColorName::Surface),
                c(ColorName::Primary),
                Opacity::OPAQUE,
            ),
            (true, false, ControlKind::Checkbox | ControlKind::Radio) => (
                c(ColorName::OnSurfaceVariant),
                c(ColorName::Surface),
                c(ColorName::OnSurfaceVariant),
                Opacity::OPAQUE,
            ),
            (false, true, ControlKind::Checkbox) => (
                c(ColorName::Surface),
                c(ColorName::OnSurface),
                c(ColorName::OnSurface),
                Opacity::DISABLED,
            ),
            (false, true, ControlKind::Radio) => (
                c(ColorName::OnSurface),
                c(ColorName::Surface),
                c(ColorName::OnSurface),
                Opacity::DISABLED,
            ),
            (false, false, ControlKind::Checkbox | ControlKind::Radio) => (
                c(ColorName::Surface),
                c(ColorName::Surface),
                c(ColorName::OnSurface),
                Opacity::DISABLED,
            ),
        };

        Paint {
            foreground: mark,
            background: Some(fill),
            border: Some(Border::new(border, 2)),
            opacity,
        }
    }
}

/// Apply the layout's opacity to `color` over the page background.
fn faded(layout: &ResolvedLayout, color: Rgb565, theme: &Theme) -> Rgb565 {
    if layout.opacity.is_opaque() {
        color
    } else {
        blend(color, theme.color(ColorName::Background), layout.opacity.value())
    }
}

/// Labelled radio button or checkbox
///
/// # Examples
/// ```ignore
/// let origin = Point::new(16, 300);
/// let mut terms = SelectionControl::checkbox(ComponentId(4), origin, "Accept terms")?;
/// terms.set_state(CheckState::Indeterminate);
/// ```
pub struct SelectionControl {
    id: ComponentId,
    origin: Point,
    label: heapless::String<MAX_LABEL_LEN>,
    style: SelectionControlStyle,
    dirty: bool,
}

impl SelectionControl {
    pub fn new(
        id: ComponentId,
        origin: Point,
        label: &str,
        kind: ControlKind,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            origin,
            label: bounded(label)?,
            style: SelectionControlStyle::new(kind),
            dirty: true,
        })
    }

    pub fn radio(id: ComponentId, origin: Point, label: &str) -> Result<Self, CatalogError> {
        Self::new(id, origin, label, ControlKind::Radio)
    }

    pub fn checkbox(id: ComponentId, origin: Point, label: &str) -> Result<Self, CatalogError> {
        Self::new(id, origin, label, ControlKind::Checkbox)
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn style(&self) -> SelectionControlStyle {
        self.style
    }

    pub fn is_selected(&self) -> bool {
        self.style.state.is_selected()
    }

    pub fn set_state(&mut self, state: CheckState) {
        let state = match (self.style.kind, state) {
            (ControlKind::Radio, CheckState::Indeterminate) => {
                log::warn!("radio {} has no indeterminate state", self.id.0);
                CheckState::Checked
            }
            (ControlKind::Radio | ControlKind::Checkbox, state) => state,
        };
        if self.style.state != state {
            self.style.state = state;
            self.dirty = true;
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.set_state(if selected {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        });
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.style.enabled != enabled {
            self.style.enabled = enabled;
            self.dirty = true;
        }
    }

    /// Returns (bounds, control, label) rectangles.
    fn slots(&self) -> (Rectangle, Rectangle, Rectangle) {
        let metrics = self.style.metrics();
        let mut row: Container<2> = Container::new(
            Rectangle::new(self.origin, Size::new(0, metrics.height)),
            Direction::Horizontal,
        )
        .with_alignment(Alignment::Center)
        .with_padding(Padding::inline(metrics.leading_padding, metrics.trailing_padding))
        .with_spacing(metrics.spacing);

        let control = row.add_child(metrics.icon_size, SizeConstraint::Fit).ok();
        let label = row
            .add_child(label_size(&self.label, metrics.text_size), SizeConstraint::Fit)
            .ok();

        let bounds = Rectangle::new(self.origin, Size::new(row.natural_extent(), metrics.height));
        row.set_bounds(bounds);

        let rect = |index: Option<usize>| index.and_then(|i| row.child_bounds(i)).unwrap_or(bounds);
        (bounds, rect(control), rect(label))
    }

    fn draw_control<D: DrawTarget<Color = Rgb565>>(
        &self,
        area: Rectangle,
        layout: &ResolvedLayout,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let mark = faded(layout, layout.foreground, theme);
        let mut builder = PrimitiveStyleBuilder::new();
        if let Some(fill) = layout.background {
            builder = builder.fill_color(faded(layout, fill, theme));
        }
        if let Some(border) = layout.border {
            builder = builder
                .stroke_color(faded(layout, border.color, theme))
                .stroke_width(border.width);
        }
        let box_style = builder.build();

        match self.style.kind {
            ControlKind::Radio => {
                Circle::new(area.top_left, area.size.width)
                    .into_styled(box_style)
                    .draw(display)?;
            }
            ControlKind::Checkbox => {
                let radius = Size::new(layout.corner_radius, layout.corner_radius);
                RoundedRectangle::with_equal_corners(area, radius)
                    .into_styled(box_style)
                    .draw(display)?;
            }
        }

        match self.style.mark() {
            ControlMark::None => {}
            ControlMark::Dot => {
                Circle::with_center(area.center(), DOT_SIZE)
                    .into_styled(PrimitiveStyle::with_fill(mark))
                    .draw(display)?;
            }
            ControlMark::Check => {
                draw_glyph(Glyph::Checkmark, area, mark, display)?;
            }
            ControlMark::Dash => {
                let center = area.center();
                let half = (area.size.width / 4) as i32;
                Line::new(center - Point::new(half, 0), center + Point::new(half, 0))
                    .into_styled(PrimitiveStyle::with_stroke(mark, 2))
                    .draw(display)?;
            }
        }

        Ok(())
    }
}

impl Drawable for SelectionControl {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = self.style.resolve(theme);
        let (_, control, label) = self.slots();

        self.draw_control(control, &layout, theme, display)?;
        draw_label(
            &self.label,
            label,
            layout.text_size,
            faded(&layout, self.style.label_color(theme), theme),
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

impl Touchable for SelectionControl {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.style.enabled && self.contains_point(point) => {
                let next = match (self.style.kind, self.style.state) {
                    // Radios select; the group deselects the others
                    (ControlKind::Radio, _) => CheckState::Checked,
                    (ControlKind::Checkbox, CheckState::Checked) => CheckState::Unchecked,
                    (ControlKind::Checkbox, CheckState::Unchecked | CheckState::Indeterminate) => {
                        CheckState::Checked
                    }
                };
                self.set_state(next);
                TouchResult::Action(Action::Toggled {
                    id: self.id,
                    selected: next.is_selected(),
                })
            }
            TouchEvent::Press(_) | TouchEvent::Drag(_) => TouchResult::NotHandled,
        }
    }
}

impl Accessible for SelectionControl {
    fn accessibility_elements(&self) -> AccessibilityElements {
        let (container, control, label) = match self.style.kind {
            ControlKind::Radio => (
                accessibility::radio::CONTAINER,
                accessibility::radio::CONTROL,
                accessibility::radio::LABEL,
            ),
            ControlKind::Checkbox => (
                accessibility::checkbox::CONTAINER,
                accessibility::checkbox::CONTROL,
                accessibility::checkbox::LABEL,
            ),
        };

        let (bounds, control_area, label_area) = self.slots();
        let mut elements = AccessibilityElements::new();
        accessibility::push(&mut elements, container, bounds);
        accessibility::push(&mut elements, control, control_area);
        accessibility::push(&mut elements, label, label_area);
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    fn paint(kind: ControlKind, enabled: bool, state: CheckState) -> Paint {
        SelectionControlStyle::new(kind)
            .enabled(enabled)
            .with_state(state)
            .paint(&Theme::light())
    }

    #[test]
    fn test_four_distinct_outcomes() {
        for kind in [ControlKind::Radio, ControlKind::Checkbox] {
            let outcomes = [
                paint(kind, true, CheckState::Checked),
                paint(kind, true, CheckState::Unchecked),
                paint(kind, false, CheckState::Checked),
                paint(kind, false, CheckState::Unchecked),
            ];
            for i in 0..outcomes.len() {
                for j in (i + 1)..outcomes.len() {
                    assert_ne!(outcomes[i], outcomes[j], "{:?} outcomes {} and {}", kind, i, j);
                }
            }
        }
    }

    #[test]
    fn test_disabled_opacity() {
        for state in [CheckState::Checked, CheckState::Unchecked] {
            assert_eq!(paint(ControlKind::Checkbox, true, state).opacity.value(), 100);
            assert_eq!(paint(ControlKind::Checkbox, false, state).opacity.value(), 38);
        }
    }

    #[test]
    fn test_marks() {
        let mark = |kind, state| SelectionControlStyle::new(kind).with_state(state).mark();
        assert_eq!(mark(ControlKind::Checkbox, CheckState::Checked), ControlMark::Check);
        assert_eq!(mark(ControlKind::Checkbox, CheckState::Indeterminate), ControlMark::Dash);
        assert_eq!(mark(ControlKind::Radio, CheckState::Checked), ControlMark::Dot);
        assert_eq!(mark(ControlKind::Radio, CheckState::Unchecked), ControlMark::None);
    }

    #[test]
    fn test_product_space_is_well_formed() {
        let theme = Theme::dark();
        for kind in [ControlKind::Radio, ControlKind::Checkbox] {
            for state in [CheckState::Unchecked, CheckState::Checked, CheckState::Indeterminate] {
                for enabled in [true, false] {
                    let style = SelectionControlStyle::new(kind).with_state(state).enabled(enabled);
                    assert_well_formed(&style.resolve(&theme));
                    assert_idempotent(&style, &theme);
                }
            }
        }
    }

    #[test]
    fn test_checkbox_touch_cycle() {
        let mut checkbox =
            SelectionControl::checkbox(ComponentId(30), Point::zero(), "Wifi").unwrap();
        checkbox.set_state(CheckState::Indeterminate);

        let result = checkbox.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert_eq!(
            result,
            TouchResult::Action(Action::Toggled {
                id: ComponentId(30),
                selected: true
            })
        );
        assert_eq!(checkbox.style().state, CheckState::Checked);

        checkbox.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert!(!checkbox.is_selected());
    }

    #[test]
    fn test_radio_stays_selected_and_rejects_mixed_state() {
        let mut radio = SelectionControl::radio(ComponentId(31), Point::zero(), "Daily").unwrap();
        radio.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        radio.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert!(radio.is_selected());

        radio.set_selected(false);
        radio.set_state(CheckState::Indeterminate);
        assert_eq!(radio.style().state, CheckState::Checked);
    }

    #[test]
    fn test_disabled_ignores_touch() {
        let mut radio = SelectionControl::radio(ComponentId(32), Point::zero(), "Weekly").unwrap();
        radio.set_enabled(false);
        assert_eq!(
            radio.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5))),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_layout_and_identifiers() {
        let radio = SelectionControl::radio(ComponentId(33), Point::new(10, 10), "On").unwrap();
        // 20 + 8 + 14
        assert_eq!(radio.bounds().size, Size::new(42, 24));

        let elements = radio.accessibility_elements();
        assert_eq!(elements[1].id.as_str(), "radio.control");
        assert_eq!(
            elements[1].bounds,
            Rectangle::new(Point::new(10, 12), Size::new(20, 20))
        );
    }
}
