//! Single-line text input field with optional icon, trailing action and helper text
//!
//! The field only renders and tracks focus; text editing is driven by the
//! host through [`InputField::set_text`].

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::Alignment as TextAlignment;

use super::glyph::{Glyph, IconSlots, draw_glyph, slot_for};
use super::text::draw_label;
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{
    Action, ComponentId, Drawable, IconHandle, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::layouts::{Alignment, Container, Direction, SizeConstraint};
use crate::ui::styling::layout::{RADIUS, SPACING};
use crate::ui::styling::{
    Border, ColorName, Metrics, Opacity, Padding, Paint, StyleResolver, TextSize, Theme,
};

pub const MAX_TEXT_LEN: usize = 64;
pub const MAX_PLACEHOLDER_LEN: usize = 32;
pub const MAX_HELPER_LEN: usize = 48;

/// Gap between the field and its helper line
const HELPER_GAP: u32 = SPACING.small;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    Focused,
    Error,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSize {
    Medium,
    Large,
}

/// Control at the trailing edge of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingAction {
    /// Built-in close glyph that clears the text
    Clear,
    /// Host icon reported as a press
    Icon(IconHandle),
}

impl TrailingAction {
    const fn glyph(&self) -> Glyph {
        match self {
            TrailingAction::Clear => Glyph::Close,
            TrailingAction::Icon(icon) => Glyph::Custom(*icon),
        }
    }
}

/// Style axes of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFieldStyle {
    pub state: InputState,
    pub size: InputSize,
    pub leading_icon: Option<IconHandle>,
    pub trailing_action: Option<TrailingAction>,
}

impl InputFieldStyle {
    pub const fn new() -> Self {
        Self {
            state: InputState::Idle,
            size: InputSize::Medium,
            leading_icon: None,
            trailing_action: None,
        }
    }

    pub const fn with_state(mut self, state: InputState) -> Self {
        self.state = state;
        self
    }

    pub const fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_leading_icon(mut self, icon: Option<IconHandle>) -> Self {
        self.leading_icon = icon;
        self
    }

    pub const fn with_trailing_action(mut self, action: Option<TrailingAction>) -> Self {
        self.trailing_action = action;
        self
    }

    /// Color of the helper line under the field.
    pub fn helper_color(&self, theme: &Theme) -> Rgb565 {
        match self.state {
            InputState::Error => theme.color(ColorName::Error),
            InputState::Disabled => theme.color(ColorName::DisabledContent),
            InputState::Idle | InputState::Focused => theme.color(ColorName::OnSurfaceVariant),
        }
    }

    /// Color of the placeholder shown while the field is empty.
    pub fn placeholder_color(&self, theme: &Theme) -> Rgb565 {
        match self.state {
            InputState::Disabled => theme.color(ColorName::DisabledContent),
            InputState::Idle | InputState::Focused | InputState::Error => {
                theme.color(ColorName::OnSurfaceVariant)
            }
        }
    }
}

impl Default for InputFieldStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleResolver for InputFieldStyle {
    fn metrics(&self) -> Metrics {
        let (height, padding, icon, text_size) = match self.size {
            InputSize::Medium => (40, 12, 20, TextSize::Medium),
            InputSize::Large => (48, 16, 24, TextSize::Large),
        };

        Metrics {
            height,
            leading_padding: padding,
            trailing_padding: padding,
            spacing: SPACING.medium,
            icon_size: Size::new(icon, icon),
            corner_radius: RADIUS.medium,
            text_size,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        let (foreground, background, border) = match self.state {
            InputState::Idle => (
                ColorName::OnSurface,
                ColorName::Surface,
                (ColorName::Outline, 1),
            ),
            InputState::Focused => (
                ColorName::OnSurface,
                ColorName::Surface,
                (ColorName::Primary, 2),
            ),
            InputState::Error => (
                ColorName::OnSurface,
                ColorName::Surface,
                (ColorName::Error, 1),
            ),
            InputState::Disabled => (
                ColorName::DisabledContent,
                ColorName::DisabledContainer,
                (ColorName::OutlineVariant, 1),
            ),
        };

        Paint {
            foreground: theme.color(foreground),
            background: Some(theme.color(background)),
            border: Some(Border::new(theme.color(border.0), border.1)),
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Rectangles of an input field's sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFieldSlots {
    pub field: Rectangle,
    pub leading: Option<Rectangle>,
    pub text: Rectangle,
    pub trailing: Option<Rectangle>,
    pub helper: Option<Rectangle>,
}

/// Text input field of fixed width
pub struct InputField {
    id: ComponentId,
    origin: Point,
    width: u32,
    text: heapless::String<MAX_TEXT_LEN>,
    placeholder: heapless::String<MAX_PLACEHOLDER_LEN>,
    helper: Option<heapless::String<MAX_HELPER_LEN>>,
    style: InputFieldStyle,
    dirty: bool,
}

impl InputField {
    pub fn new(
        id: ComponentId,
        origin: Point,
        width: u32,
        placeholder: &str,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            origin,
            width,
            text: heapless::String::new(),
            placeholder: bounded(placeholder)?,
            helper: None,
            style: InputFieldStyle::new(),
            dirty: true,
        })
    }

    pub fn with_size(mut self, size: InputSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn with_leading_icon(mut self, icon: IconHandle) -> Self {
        self.style.leading_icon = Some(icon);
        self
    }

    pub fn with_trailing_action(mut self, action: TrailingAction) -> Self {
        self.style.trailing_action = Some(action);
        self
    }

    pub fn with_helper(mut self, helper: &str) -> Result<Self, CatalogError> {
        self.helper = Some(bounded(helper)?);
        Ok(self)
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn style(&self) -> InputFieldStyle {
        self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), CatalogError> {
        let text = bounded(text)?;
        if self.text != text {
            self.text = text;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn is_focused(&self) -> bool {
        self.style.state == InputState::Focused
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.style.state) {
            (false, _) => self.set_state(InputState::Disabled),
            (true, InputState::Disabled) => self.set_state(InputState::Idle),
            (true, InputState::Idle | InputState::Focused | InputState::Error) => {}
        }
    }

    /// Show or clear the error state. Disabled fields stay disabled.
    pub fn set_error(&mut self, error: bool) {
        match (error, self.style.state) {
            (_, InputState::Disabled) => {}
            (true, _) => self.set_state(InputState::Error),
            (false, InputState::Error) => self.set_state(InputState::Idle),
            (false, InputState::Idle | InputState::Focused) => {}
        }
    }

    /// Focus or blur the field. An error state survives focus changes.
    pub fn set_focused(&mut self, focused: bool) {
        match (focused, self.style.state) {
            (true, InputState::Idle) => self.set_state(InputState::Focused),
            (false, InputState::Focused) => self.set_state(InputState::Idle),
            (true, InputState::Focused | InputState::Error | InputState::Disabled)
            | (false, InputState::Idle | InputState::Error | InputState::Disabled) => {}
        }
    }

    fn set_state(&mut self, state: InputState) {
        if self.style.state != state {
            self.style.state = state;
            self.dirty = true;
        }
    }

    pub fn slots(&self) -> InputFieldSlots {
        let metrics = self.style.metrics();
        let field = Rectangle::new(self.origin, Size::new(self.width, metrics.height));

        let mut row: Container<3> = Container::new(field, Direction::Horizontal)
            .with_alignment(Alignment::Center)
            .with_padding(Padding::inline(metrics.leading_padding, metrics.trailing_padding))
            .with_spacing(metrics.spacing);

        let leading = self
            .style
            .leading_icon
            .and_then(|_| row.add_child(metrics.icon_size, SizeConstraint::Fit).ok());
        let text = row
            .add_child(
                Size::new(0, metrics.text_size.line_height()),
                SizeConstraint::Expand,
            )
            .ok();
        let trailing = self
            .style
            .trailing_action
            .and_then(|_| row.add_child(metrics.icon_size, SizeConstraint::Fit).ok());

        let helper = self.helper.as_ref().map(|_| {
            Rectangle::new(
                self.origin
                    + Point::new(
                        metrics.leading_padding as i32,
                        (metrics.height + HELPER_GAP) as i32,
                    ),
                Size::new(
                    self.width.saturating_sub(metrics.leading_padding),
                    TextSize::Small.line_height(),
                ),
            )
        });

        let rect = |index: Option<usize>| index.and_then(|i| row.child_bounds(i));
        InputFieldSlots {
            field,
            leading: rect(leading),
            text: rect(text).unwrap_or(field),
            trailing: rect(trailing),
            helper,
        }
    }

    pub fn icon_slots(&self, theme: &Theme) -> IconSlots {
        let color = self.style.paint(theme).foreground;
        let slots = self.slots();
        let leading = self.style.leading_icon.map(Glyph::Custom).zip(slots.leading);
        let trailing = self.style.trailing_action.map(|a| a.glyph()).zip(slots.trailing);

        let mut out = IconSlots::new();
        for (glyph, area) in [leading, trailing].into_iter().flatten() {
            if let Some(slot) = slot_for(glyph, area, color) {
                let _ = out.push(slot);
            }
        }
        out
    }
}

impl Drawable for InputField {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = self.style.resolve(theme);
        let slots = self.slots();

        let radius = Size::new(layout.corner_radius, layout.corner_radius);
        RoundedRectangle::with_equal_corners(slots.field, radius)
            .into_styled(layout.container_style())
            .draw(display)?;

        if let (Some(icon), Some(area)) = (self.style.leading_icon, slots.leading) {
            draw_glyph(Glyph::Custom(icon), area, layout.foreground, display)?;
        }

        let (text, color) = if self.text.is_empty() {
            (self.placeholder.as_str(), self.style.placeholder_color(theme))
        } else {
            (self.text.as_str(), layout.foreground)
        };
        draw_label(text, slots.text, layout.text_size, color, TextAlignment::Left, display)?;

        if let (Some(action), Some(area)) = (self.style.trailing_action, slots.trailing) {
            draw_glyph(action.glyph(), area, layout.foreground, display)?;
        }

        if let (Some(helper), Some(area)) = (&self.helper, slots.helper) {
            draw_label(
                helper,
                area,
                TextSize::Small,
                self.style.helper_color(theme),
                TextAlignment::Left,
                display,
            )?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        let slots = self.slots();
        match slots.helper {
            Some(helper) => Rectangle::new(
                slots.field.top_left,
                Size::new(
                    slots.field.size.width,
                    slots.field.size.height + HELPER_GAP + helper.size.height,
                ),
            ),
            None => slots.field,
        }
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

impl Touchable for InputField {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.slots().field.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let TouchEvent::Press(point) = event else {
            return TouchResult::NotHandled;
        };
        if self.style.state == InputState::Disabled {
            return TouchResult::NotHandled;
        }
        if !self.contains_point(point) {
            self.set_focused(false);
            return TouchResult::NotHandled;
        }

        let slots = self.slots();
        let on_trailing = slots
            .trailing
            .is_some_and(|area| area.contains(point.to_point()));

        match self.style.trailing_action {
            Some(TrailingAction::Clear) if on_trailing => {
                if !self.text.is_empty() {
                    self.text.clear();
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            Some(TrailingAction::Icon(_)) if on_trailing => {
                TouchResult::Action(Action::Pressed(self.id))
            }
            Some(_) | None => {
                self.set_focused(true);
                TouchResult::Action(Action::Pressed(self.id))
            }
        }
    }
}

impl Accessible for InputField {
    fn accessibility_elements(&self) -> AccessibilityElements {
        use accessibility::input_field;

        let slots = self.slots();
        let mut elements = AccessibilityElements::new();
        accessibility::push(&mut elements, input_field::CONTAINER, slots.field);
        if let Some(area) = slots.leading {
            accessibility::push(&mut elements, input_field::LEADING_ICON, area);
        }
        if self.text.is_empty() {
            accessibility::push(&mut elements, input_field::PLACEHOLDER, slots.text);
        } else {
            accessibility::push(&mut elements, input_field::TEXT, slots.text);
        }
        if let Some(area) = slots.trailing {
            accessibility::push(&mut elements, input_field::TRAILING_ACTION, area);
        }
        if let Some(area) = slots.helper {
            accessibility::push(&mut elements, input_field::HELPER, area);
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    fn field() -> InputField {
        InputField::new(ComponentId(20), Point::new(0, 0), 200, "Search")
            .unwrap()
            .with_leading_icon(IconHandle(1))
            .with_trailing_action(TrailingAction::Clear)
    }

    #[test]
    fn test_product_space_is_well_formed() {
        let theme = Theme::light();
        let states = [
            InputState::Idle,
            InputState::Focused,
            InputState::Error,
            InputState::Disabled,
        ];
        for state in states {
            for size in [InputSize::Medium, InputSize::Large] {
                for icon in [None, Some(IconHandle(1))] {
                    for action in [None, Some(TrailingAction::Clear)] {
                        let style = InputFieldStyle::new()
                            .with_state(state)
                            .with_size(size)
                            .with_leading_icon(icon)
                            .with_trailing_action(action);
                        assert_well_formed(&style.resolve(&theme));
                        assert_idempotent(&style, &theme);
                    }
                }
            }
        }
    }

    #[test]
    fn test_focus_raises_border_width() {
        let theme = Theme::light();
        let idle = InputFieldStyle::new().resolve(&theme);
        let focused = InputFieldStyle::new()
            .with_state(InputState::Focused)
            .resolve(&theme);
        assert_eq!(idle.border, Some(Border::new(theme.color(ColorName::Outline), 1)));
        assert_eq!(focused.border, Some(Border::new(theme.color(ColorName::Primary), 2)));
    }

    #[test]
    fn test_error_colors_border_and_helper() {
        let theme = Theme::dark();
        let style = InputFieldStyle::new().with_state(InputState::Error);
        assert_eq!(style.resolve(&theme).border.unwrap().color, theme.color(ColorName::Error));
        assert_eq!(style.helper_color(&theme), theme.color(ColorName::Error));
        assert_eq!(
            InputFieldStyle::new().helper_color(&theme),
            theme.color(ColorName::OnSurfaceVariant)
        );
    }

    #[test]
    fn test_text_slot_expands_between_icons() {
        let slots = field().slots();
        assert_eq!(
            slots.leading,
            Some(Rectangle::new(Point::new(12, 10), Size::new(20, 20)))
        );
        // 200 - 12 - 20 - 8 - 8 - 20 - 12
        assert_eq!(slots.text.size.width, 120);
        assert_eq!(slots.trailing.unwrap().top_left.x, 168);
        assert_eq!(slots.helper, None);
    }

    #[test]
    fn test_helper_extends_bounds() {
        let f = field().with_helper("Required").unwrap();
        assert_eq!(f.bounds().size, Size::new(200, 40 + 4 + 10));
    }

    #[test]
    fn test_press_focuses_and_clear_empties() {
        let mut f = field();
        f.set_text("rust").unwrap();

        let result = f.handle_touch(TouchEvent::Press(TouchPoint::new(60, 20)));
        assert_eq!(result, TouchResult::Action(Action::Pressed(ComponentId(20))));
        assert!(f.is_focused());

        let result = f.handle_touch(TouchEvent::Press(TouchPoint::new(178, 20)));
        assert_eq!(result, TouchResult::Handled);
        assert_eq!(f.text(), "");

        f.handle_touch(TouchEvent::Press(TouchPoint::new(300, 300)));
        assert!(!f.is_focused());
    }

    #[test]
    fn test_error_survives_focus() {
        let mut f = field();
        f.set_error(true);
        f.set_focused(true);
        assert_eq!(f.style().state, InputState::Error);
        f.set_error(false);
        assert_eq!(f.style().state, InputState::Idle);

        f.set_enabled(false);
        f.set_error(true);
        assert_eq!(f.style().state, InputState::Disabled);
    }

    #[test]
    fn test_placeholder_identifier_when_empty() {
        let mut f = field();
        let ids = |f: &InputField| {
            f.accessibility_elements()
                .iter()
                .any(|e| e.id.as_str() == "inputField.placeholder")
        };
        assert!(ids(&f));
        f.set_text("x").unwrap();
        assert!(!ids(&f));
    }
}
