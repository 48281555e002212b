// src/ui/layouts/scrollable.rs
//! Scroll viewport for content taller or wider than its visible area
//!
//! Overlays hand their content region to a `ScrollableContainer` once the
//! committed height is smaller than the content's intrinsic height.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::ui::core::{DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ColorName, Theme};

const SCROLLBAR_WIDTH: u32 = 4;
const MIN_THUMB_LENGTH: u32 = 20;

/// Direction that can be scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Vertical,
    Horizontal,
    Both,
}

/// Viewport over a larger content area with a clamped scroll offset
pub struct ScrollableContainer {
    /// Visible bounds
    viewport: Rectangle,
    /// Total content size (may be larger than viewport)
    content_size: Size,
    scroll_offset: Point,
    direction: ScrollDirection,
    dirty: bool,
    /// Last touch position for drag scrolling
    last_touch: Option<TouchPoint>,
}

impl ScrollableContainer {
    pub fn new(viewport: Rectangle, content_size: Size, direction: ScrollDirection) -> Self {
        Self {
            viewport,
            content_size,
            scroll_offset: Point::zero(),
            direction,
            dirty: true,
            last_touch: None,
        }
    }

    pub fn viewport(&self) -> Rectangle {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size != size {
            self.content_size = size;
            self.constrain_scroll();
            self.dirty = true;
        }
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    pub fn scroll_by(&mut self, delta: Point) {
        self.scroll_to(self.scroll_offset + delta);
    }

    pub fn scroll_to(&mut self, offset: Point) {
        let before = self.scroll_offset;
        self.scroll_offset = offset;
        self.constrain_scroll();
        if self.scroll_offset != before {
            self.dirty = true;
        }
    }

    fn max_offset(&self) -> Point {
        Point::new(
            self.content_size.width.saturating_sub(self.viewport.size.width) as i32,
            self.content_size.height.saturating_sub(self.viewport.size.height) as i32,
        )
    }

    fn constrain_scroll(&mut self) {
        let max = self.max_offset();
        let (allow_x, allow_y) = match self.direction {
            ScrollDirection::Vertical => (false, true),
            ScrollDirection::Horizontal => (true, false),
            ScrollDirection::Both => (true, true),
        };
        self.scroll_offset.x = if allow_x { self.scroll_offset.x.clamp(0, max.x) } else { 0 };
        self.scroll_offset.y = if allow_y { self.scroll_offset.y.clamp(0, max.y) } else { 0 };
    }

    /// The visible part of the content, in content coordinates.
    pub fn visible_content_rect(&self) -> Rectangle {
        Rectangle::new(self.scroll_offset, self.viewport.size)
    }

    /// Map a content-space rectangle to screen space.
    pub fn content_to_screen(&self, rect: Rectangle) -> Rectangle {
        Rectangle::new(
            self.viewport.top_left + rect.top_left - self.scroll_offset,
            rect.size,
        )
    }

    /// Transform a point from viewport space to content space
    pub fn viewport_to_content(&self, point: TouchPoint) -> Option<Point> {
        let p = point.to_point();
        if !self.viewport.contains(p) {
            return None;
        }
        Some(p - self.viewport.top_left + self.scroll_offset)
    }

    pub fn can_scroll_vertical(&self) -> bool {
        matches!(self.direction, ScrollDirection::Vertical | ScrollDirection::Both)
            && self.content_size.height > self.viewport.size.height
    }

    pub fn can_scroll_horizontal(&self) -> bool {
        matches!(self.direction, ScrollDirection::Horizontal | ScrollDirection::Both)
            && self.content_size.width > self.viewport.size.width
    }

    /// Thumb position and length along one axis.
    fn thumb(viewport: u32, content: u32, offset: i32) -> (u32, u32) {
        let length = ((viewport * viewport) / content.max(1)).max(MIN_THUMB_LENGTH).min(viewport);
        let travel = viewport - length;
        let range = content.saturating_sub(viewport).max(1);
        (travel * offset.max(0) as u32 / range, length)
    }

    fn draw_scrollbars<D: DrawTarget<Color = Rgb565>>(
        &self,
        color: Rgb565,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_fill(color);
        let origin = self.viewport.top_left;
        let size = self.viewport.size;

        if self.can_scroll_vertical() {
            let (pos, len) =
                Self::thumb(size.height, self.content_size.height, self.scroll_offset.y);
            let x = size.width.saturating_sub(SCROLLBAR_WIDTH);
            let thumb = Rectangle::new(
                origin + Point::new(x as i32, pos as i32),
                Size::new(SCROLLBAR_WIDTH, len),
            );
            thumb.into_styled(style).draw(display)?;
        }

        if self.can_scroll_horizontal() {
            let (pos, len) = Self::thumb(size.width, self.content_size.width, self.scroll_offset.x);
            let y = size.height.saturating_sub(SCROLLBAR_WIDTH);
            let thumb = Rectangle::new(
                origin + Point::new(pos as i32, y as i32),
                Size::new(len, SCROLLBAR_WIDTH),
            );
            thumb.into_styled(style).draw(display)?;
        }

        Ok(())
    }
}

impl Drawable for ScrollableContainer {
    /// Draws only the scroll indicators; the owner draws the content.
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.draw_scrollbars(theme.color(ColorName::Outline), display)
    }

    fn bounds(&self) -> Rectangle {
        self.viewport
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
        self.dirty.then(|| DirtyRegion::new(self.viewport))
    }
}

impl Touchable for ScrollableContainer {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.viewport.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.last_touch = Some(point);
                TouchResult::Handled
            }
            TouchEvent::Press(_) => {
                self.last_touch = None;
                TouchResult::NotHandled
            }
            TouchEvent::Drag(point) => match self.last_touch {
                Some(last) => {
                    // Dragging down scrolls content up
                    let delta = last.to_point() - point.to_point();
                    self.scroll_by(delta);
                    self.last_touch = Some(point);
                    TouchResult::Handled
                }
                None => TouchResult::NotHandled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn list() -> ScrollableContainer {
        ScrollableContainer::new(
            Rectangle::new(Point::new(0, 100), Size::new(200, 100)),
            Size::new(200, 300),
            ScrollDirection::Vertical,
        )
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut s = list();
        s.scroll_by(Point::new(50, 500));
        assert_eq!(s.scroll_offset(), Point::new(0, 200));
        s.scroll_to(Point::new(0, -10));
        assert_eq!(s.scroll_offset(), Point::zero());
    }

    #[test]
    fn test_drag_scrolls_opposite_direction() {
        let mut s = list();
        s.handle_touch(TouchEvent::Press(TouchPoint::new(10, 180)));
        s.handle_touch(TouchEvent::Drag(TouchPoint::new(10, 150)));
        assert_eq!(s.scroll_offset(), Point::new(0, 30));
    }

    #[test]
    fn test_viewport_to_content_applies_offset() {
        let mut s = list();
        s.scroll_to(Point::new(0, 40));
        assert_eq!(
            s.viewport_to_content(TouchPoint::new(5, 110)),
            Some(Point::new(5, 50))
        );
        assert_eq!(s.viewport_to_content(TouchPoint::new(5, 10)), None);
    }

    #[test]
    fn test_content_that_fits_does_not_scroll() {
        let mut s = list();
        s.set_content_size(Size::new(200, 80));
        assert!(!s.can_scroll_vertical());
        s.scroll_by(Point::new(0, 20));
        assert_eq!(s.scroll_offset(), Point::zero());
    }

    #[test]
    fn test_scrollbar_fits_in_narrow_viewport() {
        let s = ScrollableContainer::new(
            Rectangle::new(Point::zero(), Size::new(2, 2)),
            Size::new(40, 40),
            ScrollDirection::Both,
        );
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        s.draw(&Theme::light(), &mut display).unwrap();
    }
}
