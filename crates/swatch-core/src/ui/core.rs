// src/ui/core.rs
//! Core UI traits and types shared by every catalog component

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::styling::Theme;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Identifies a component instance to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u16);

/// Opaque icon reference supplied by the host
///
/// The catalog never loads or decodes icon data. It reserves a box for the
/// icon and hands the handle back to the host to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// Actions that components report to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A button, assist chip or field was pressed
    Pressed(ComponentId),
    /// A selectable component changed its selection
    Toggled { id: ComponentId, selected: bool },
    /// A menu row was chosen
    ItemSelected { menu: ComponentId, index: usize },
    /// The footer action of an overlay was pressed
    FooterAction(ComponentId),
    /// An overlay was dismissed by tapping outside it
    Dismissed(ComponentId),
    /// The close glyph of an input chip was pressed
    Removed(ComponentId),
}

/// Dirty region tracking for partial redraws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}

/// Trait for UI elements that can be drawn
pub trait Drawable {
    /// Draw the element to the display, resolving styles against `theme`
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_region_is_dirty() {
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(10, 10));
        let region = DirtyRegion::new(bounds);
        assert!(region.is_dirty());
        assert_eq!(region.bounds, bounds);
    }

    #[test]
    fn test_touch_point_converts_to_point() {
        assert_eq!(TouchPoint::new(12, 34).to_point(), Point::new(12, 34));
    }
}
