// src/ui/components/button.rs
//! Button component with variants, size classes and states

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::Alignment as TextAlignment;

use super::glyph::{Glyph, IconSlots, draw_glyph, slot_for};
use super::text::{draw_label, label_size};
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{
    Action, ComponentId, DirtyRegion, Drawable, IconHandle, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
use crate::ui::layouts::{Alignment, Container, Direction, SizeConstraint};
use crate::ui::styling::colors::darken;
use crate::ui::styling::{
    Border, ColorName, Metrics, Opacity, Padding, Paint, StyleResolver, TextSize, Theme,
};

/// Longest button label in bytes
pub const MAX_LABEL_LEN: usize = 32;

/// Button color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary color
    Primary,
    /// Filled with the secondary color
    Secondary,
    /// Transparent with an outline
    Outlined,
    /// Transparent, text only
    Ghost,
    /// Filled with the error color, for destructive actions
    Danger,
}

/// Button height class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    pub const fn height(&self) -> u32 {
        match self {
            ButtonSize::Small => 32,
            ButtonSize::Medium => 40,
            ButtonSize::Large => 48,
        }
    }
}

/// Button interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Pressed,
    Disabled,
}

/// Where the button's icon sits relative to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPlacement {
    None,
    Leading(IconHandle),
    Trailing(IconHandle),
    /// Square button showing only the icon
    Only(IconHandle),
}

impl IconPlacement {
    pub const fn icon(&self) -> Option<IconHandle> {
        match self {
            IconPlacement::None => None,
            IconPlacement::Leading(icon)
            | IconPlacement::Trailing(icon)
            | IconPlacement::Only(icon) => Some(*icon),
        }
    }
}

/// Style axes of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub state: ButtonState,
    pub icon: IconPlacement,
}

impl ButtonStyle {
    pub const fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            size: ButtonSize::Medium,
            state: ButtonState::Normal,
            icon: IconPlacement::None,
        }
    }

    pub const fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    pub const fn with_icon(mut self, icon: IconPlacement) -> Self {
        self.icon = icon;
        self
    }
}

impl StyleResolver for ButtonStyle {
    fn metrics(&self) -> Metrics {
        let height = self.size.height();
        let (padding, spacing, icon, corner_radius, text_size) = match self.size {
            ButtonSize::Small => (12, 4, 16, 8, TextSize::Small),
            ButtonSize::Medium => (16, 6, 20, 10, TextSize::Medium),
            ButtonSize::Large => (20, 8, 24, 12, TextSize::Large),
        };
        // Icon-only buttons are square
        let padding = match self.icon {
            IconPlacement::Only(_) => (height - icon) / 2,
            IconPlacement::None | IconPlacement::Leading(_) | IconPlacement::Trailing(_) => padding,
        };

        Metrics {
            height,
            leading_padding: padding,
            trailing_padding: padding,
            spacing,
            icon_size: Size::new(icon, icon),
            corner_radius,
            text_size,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        let filled =
            |fg: ColorName, bg: ColorName| (theme.color(fg), Some(theme.color(bg)), None::<Border>);

        let (foreground, background, border) = match (self.variant, self.state) {
            (ButtonVariant::Primary, ButtonState::Normal) => {
                filled(ColorName::OnPrimary, ColorName::Primary)
            }
            (ButtonVariant::Secondary, ButtonState::Normal) => {
                filled(ColorName::OnSecondary, ColorName::Secondary)
            }
            (ButtonVariant::Danger, ButtonState::Normal) => {
                filled(ColorName::OnError, ColorName::Error)
            }
            (ButtonVariant::Outlined, ButtonState::Normal) => (
                theme.color(ColorName::Primary),
                None,
                Some(Border::new(theme.color(ColorName::Outline), 1)),
            ),
            (ButtonVariant::Ghost, ButtonState::Normal) => {
                (theme.color(ColorName::Primary), None, None)
            }

            (ButtonVariant::Primary, ButtonState::Pressed) => (
                theme.color(ColorName::OnPrimary),
                Some(darken(theme.color(ColorName::Primary))),
                None,
            ),
            (ButtonVariant::Secondary, ButtonState::Pressed) => (
                theme.color(ColorName::OnSecondary),
                Some(darken(theme.color(ColorName::Secondary))),
                None,
            ),
            (ButtonVariant::Danger, ButtonState::Pressed) => (
                theme.color(ColorName::OnError),
                Some(darken(theme.color(ColorName::Error))),
                None,
            ),
            (ButtonVariant::Outlined, ButtonState::Pressed) => (
                theme.color(ColorName::Primary),
                Some(theme.color(ColorName::SurfaceVariant)),
                Some(Border::new(theme.color(ColorName::Outline), 1)),
            ),
            (ButtonVariant::Ghost, ButtonState::Pressed) => (
                theme.color(ColorName::Primary),
                Some(theme.color(ColorName::SurfaceVariant)),
                None,
            ),

            (
                ButtonVariant::Primary | ButtonVariant::Secondary | ButtonVariant::Danger,
                ButtonState::Disabled,
            ) => filled(ColorName::DisabledContent, ColorName::DisabledContainer),
            (ButtonVariant::Outlined, ButtonState::Disabled) => (
                theme.color(ColorName::DisabledContent),
                None,
                Some(Border::new(theme.color(ColorName::DisabledContainer), 1)),
            ),
            (ButtonVariant::Ghost, ButtonState::Disabled) => {
                (theme.color(ColorName::DisabledContent), None, None)
            }
        };

        Paint {
            foreground,
            background,
            border,
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Rectangles of a button's sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlots {
    pub bounds: Rectangle,
    pub icon: Option<Rectangle>,
    /// `None` for icon-only buttons
    pub title: Option<Rectangle>,
}

/// Button component with label and action
///
/// Sizes itself from its style and label. A minimum width stretches the
/// button and keeps the content centered.
///
/// # Touch Behavior
/// - Reports [`Action::Pressed`] immediately on press
/// - Shows the pressed state until released or dragged away
/// - Disabled buttons ignore touches
///
/// # Examples
/// ```ignore
/// let button = Button::new(ComponentId(1), Point::new(20, 50), "Settings")?
///     .with_variant(ButtonVariant::Outlined)
///     .with_size(ButtonSize::Large)
///     .with_min_width(200);
/// ```
pub struct Button {
    id: ComponentId,
    origin: Point,
    label: heapless::String<MAX_LABEL_LEN>,
    style: ButtonStyle,
    min_width: u32,
    dirty: bool,
}

impl Button {
    /// Primary, medium, no icon.
    pub fn new(id: ComponentId, origin: Point, label: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            origin,
            label: bounded(label)?,
            style: ButtonStyle::new(ButtonVariant::Primary),
            min_width: 0,
            dirty: true,
        })
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.style.variant = variant;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn with_icon(mut self, icon: IconPlacement) -> Self {
        self.style.icon = icon;
        self
    }

    pub fn with_min_width(mut self, width: u32) -> Self {
        self.min_width = width;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.dirty = true;
        }
    }

    /// Enable or disable the button.
    ///
    /// Disabled buttons don't respond to touch and use the disabled tokens.
    pub fn set_enabled(&mut self, enabled: bool) {
        let state = if enabled {
            ButtonState::Normal
        } else {
            ButtonState::Disabled
        };
        self.set_state(state);
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.style.state, ButtonState::Disabled)
    }

    /// Return a pressed button to normal once the touch ends.
    pub fn release(&mut self) {
        if self.style.state == ButtonState::Pressed {
            self.set_state(ButtonState::Normal);
        }
    }

    fn set_state(&mut self, state: ButtonState) {
        if self.style.state != state {
            self.style.state = state;
            self.dirty = true;
        }
    }

    pub fn size(&self) -> Size {
        self.slots().bounds.size
    }

    pub fn slots(&self) -> ButtonSlots {
        let metrics = self.style.metrics();
        let icon = metrics.icon_size;
        let title = label_size(&self.label, metrics.text_size);

        let mut order: heapless::Vec<(bool, Size), 2> = heapless::Vec::new();
        // At most two entries, within capacity
        let _ = match self.style.icon {
            IconPlacement::None => order.push((false, title)),
            IconPlacement::Leading(_) => order
                .push((true, icon))
                .and_then(|_| order.push((false, title))),
            IconPlacement::Trailing(_) => order
                .push((false, title))
                .and_then(|_| order.push((true, icon))),
            IconPlacement::Only(_) => order.push((true, icon)),
        };

        let content: u32 = order.iter().map(|(_, s)| s.width).sum::<u32>()
            + metrics.spacing * (order.len() as u32).saturating_sub(1);
        let natural = metrics.outer_width(content);
        let width = natural.max(self.min_width);
        let extra = width - natural;

        let bounds = Rectangle::new(self.origin, Size::new(width, metrics.height));
        let mut row: Container<2> = Container::new(bounds, Direction::Horizontal)
            .with_alignment(Alignment::Center)
            .with_padding(Padding::inline(
                metrics.leading_padding + extra / 2,
                metrics.trailing_padding + extra - extra / 2,
            ))
            .with_spacing(metrics.spacing);

        let mut slots = ButtonSlots {
            bounds,
            icon: None,
            title: None,
        };
        for (is_icon, size) in order {
            let Ok(index) = row.add_child(size, SizeConstraint::Fit) else {
                break;
            };
            let rect = row.child_bounds(index);
            if is_icon {
                slots.icon = rect;
            } else {
                slots.title = rect;
            }
        }
        slots
    }

    /// Custom icon the host should paint over the drawn button.
    pub fn icon_slots(&self, theme: &Theme) -> IconSlots {
        let mut out = IconSlots::new();
        if let (Some(icon), Some(area)) = (self.style.icon.icon(), self.slots().icon)
            && let Some(slot) =
                slot_for(Glyph::Custom(icon), area, self.style.paint(theme).foreground)
        {
            let _ = out.push(slot);
        }
        out
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = self.style.resolve(theme);
        let slots = self.slots();

        let corner_radius = Size::new(layout.corner_radius, layout.corner_radius);
        RoundedRectangle::with_equal_corners(slots.bounds, corner_radius)
            .into_styled(layout.container_style())
            .draw(display)?;

        if let (Some(icon), Some(area)) = (self.style.icon.icon(), slots.icon) {
            draw_glyph(Glyph::Custom(icon), area, layout.foreground, display)?;
        }

        if let Some(area) = slots.title {
            draw_label(
                &self.label,
                area,
                layout.text_size,
                layout.foreground,
                TextAlignment::Left,
                display,
            )?;
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

    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.is_enabled() {
            return TouchResult::NotHandled;
        }

        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.set_state(ButtonState::Pressed);
                TouchResult::Action(Action::Pressed(self.id))
            }
            TouchEvent::Drag(point) => {
                // Pressed while the drag stays over the button
                let state = if self.contains_point(point) {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };
                self.set_state(state);
                TouchResult::Handled
            }
            TouchEvent::Press(_) => TouchResult::NotHandled,
        }
    }
}

impl Accessible for Button {
    fn accessibility_elements(&self) -> AccessibilityElements {
        use accessibility::button;

        let slots = self.slots();
        let mut elements = AccessibilityElements::new();
        accessibility::push(&mut elements, button::CONTAINER, slots.bounds);
        if let Some(area) = slots.icon {
            accessibility::push(&mut elements, button::ICON, area);
        }
        if let Some(area) = slots.title {
            accessibility::push(&mut elements, button::TITLE, area);
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    const ICON: IconHandle = IconHandle(3);

    const VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outlined,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
    ];

    #[test]
    fn test_product_space_is_well_formed() {
        let theme = Theme::light();
        for variant in VARIANTS {
            for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
                for state in [ButtonState::Normal, ButtonState::Pressed, ButtonState::Disabled] {
                    for icon in [
                        IconPlacement::None,
                        IconPlacement::Leading(ICON),
                        IconPlacement::Trailing(ICON),
                        IconPlacement::Only(ICON),
                    ] {
                        let style = ButtonStyle::new(variant)
                            .with_size(size)
                            .with_state(state)
                            .with_icon(icon);
                        assert_well_formed(&style.resolve(&theme));
                        assert_idempotent(&style, &theme);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pressed_darkens_filled_background() {
        let theme = Theme::light();
        let normal = ButtonStyle::new(ButtonVariant::Primary).resolve(&theme);
        let pressed = ButtonStyle::new(ButtonVariant::Primary)
            .with_state(ButtonState::Pressed)
            .resolve(&theme);
        assert_eq!(normal.background, Some(theme.color(ColorName::Primary)));
        assert_eq!(pressed.background, Some(darken(theme.color(ColorName::Primary))));
        assert_eq!(pressed.foreground, normal.foreground);
    }

    #[test]
    fn test_disabled_uses_disabled_tokens() {
        let theme = Theme::dark();
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Danger] {
            let layout = ButtonStyle::new(variant)
                .with_state(ButtonState::Disabled)
                .resolve(&theme);
            assert_eq!(layout.foreground, theme.color(ColorName::DisabledContent));
            assert_eq!(layout.background, Some(theme.color(ColorName::DisabledContainer)));
        }
    }

    #[test]
    fn test_outlined_and_ghost_are_transparent() {
        let theme = Theme::light();
        let outlined = ButtonStyle::new(ButtonVariant::Outlined).resolve(&theme);
        assert_eq!(outlined.background, None);
        assert_eq!(outlined.border, Some(Border::new(theme.color(ColorName::Outline), 1)));

        let ghost = ButtonStyle::new(ButtonVariant::Ghost).resolve(&theme);
        assert_eq!(ghost.background, None);
        assert_eq!(ghost.border, None);
    }

    #[test]
    fn test_icon_only_is_square() {
        for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
            let button = Button::new(ComponentId(1), Point::zero(), "Search")
                .unwrap()
                .with_size(size)
                .with_icon(IconPlacement::Only(ICON));
            let s = button.size();
            assert_eq!(s.width, s.height);
            assert_eq!(button.slots().title, None);
        }
    }

    #[test]
    fn test_leading_icon_layout() {
        let button = Button::new(ComponentId(1), Point::new(0, 0), "Save")
            .unwrap()
            .with_size(ButtonSize::Small)
            .with_icon(IconPlacement::Leading(ICON));
        let slots = button.slots();
        // 12 + 16 + 4 + 24 + 12
        assert_eq!(slots.bounds.size, Size::new(68, 32));
        assert_eq!(
            slots.icon,
            Some(Rectangle::new(Point::new(12, 8), Size::new(16, 16)))
        );
        assert_eq!(slots.title.unwrap().top_left.x, 32);
    }

    #[test]
    fn test_min_width_centers_content() {
        let button = Button::new(ComponentId(1), Point::zero(), "OK")
            .unwrap()
            .with_size(ButtonSize::Small)
            .with_min_width(100);
        let slots = button.slots();
        assert_eq!(slots.bounds.size.width, 100);
        // "OK" is 12px wide: (100 - 12) / 2
        assert_eq!(slots.title.unwrap().top_left.x, 44);
    }

    #[test]
    fn test_press_and_release() {
        let mut button = Button::new(ComponentId(9), Point::zero(), "Go").unwrap();
        let result = button.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert_eq!(result, TouchResult::Action(Action::Pressed(ComponentId(9))));
        assert_eq!(button.style().state, ButtonState::Pressed);

        button.handle_touch(TouchEvent::Drag(TouchPoint::new(400, 5)));
        assert_eq!(button.style().state, ButtonState::Normal);

        button.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        button.release();
        assert_eq!(button.style().state, ButtonState::Normal);
    }

    #[test]
    fn test_disabled_ignores_touch() {
        let mut button = Button::new(ComponentId(9), Point::zero(), "Go").unwrap();
        button.set_enabled(false);
        let result = button.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5)));
        assert_eq!(result, TouchResult::NotHandled);
        assert!(!button.is_enabled());
    }
}
