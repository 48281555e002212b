// src/ui/layouts/container.rs
//! Linear container that places component slots along one axis
//!
//! Components use a `Container` to turn a resolved layout (paddings,
//! spacing, icon box) into concrete rectangles for their leading icon,
//! title, trailing glyph and badge. Menus use a vertical one for rows.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::error::CatalogError;
use crate::ui::styling::Padding;

/// Cross-axis placement of children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Align to start (top for horizontal, left for vertical)
    Start,
    Center,
    /// Align to end (bottom for horizontal, right for vertical)
    End,
    /// Fill the cross axis
    Stretch,
}

/// Main axis of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// How a child's main-axis extent is chosen
///
/// - `Fit`: the size given when the child was added
/// - `Expand`: an equal share of the space left after `Fit` and `Fixed`
/// - `Fixed(n)`: exactly n pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    Fit,
    Expand,
    Fixed(u32),
}

#[derive(Debug, Clone, Copy)]
struct Child {
    natural: Size,
    constraint: SizeConstraint,
    bounds: Rectangle,
}

/// Container arranging up to `N` children along a direction
///
/// # Examples
/// ```ignore
/// let mut row = Container::<4>::new(bounds, Direction::Horizontal)
///     .with_alignment(Alignment::Center)
///     .with_padding(Padding::inline(6, 12))
///     .with_spacing(4);
///
/// let icon = row.add_child(Size::new(16, 16), SizeConstraint::Fit)?;
/// let title = row.add_child(Size::new(48, 10), SizeConstraint::Expand)?;
/// let icon_rect = row.child_bounds(icon);
/// ```
pub struct Container<const N: usize> {
    bounds: Rectangle,
    direction: Direction,
    alignment: Alignment,
    spacing: u32,
    padding: Padding,
    children: Vec<Child, N>,
}

impl<const N: usize> Container<N> {
    /// Spacing defaults to 0 and alignment to `Start`.
    pub fn new(bounds: Rectangle, direction: Direction) -> Self {
        Self {
            bounds,
            direction,
            alignment: Alignment::Start,
            spacing: 0,
            padding: Padding::default(),
            children: Vec::new(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Add a child and re-run layout. Returns the child's index.
    pub fn add_child(
        &mut self,
        size: Size,
        constraint: SizeConstraint,
    ) -> Result<usize, CatalogError> {
        let child = Child {
            natural: size,
            constraint,
            bounds: Rectangle::new(self.bounds.top_left, size),
        };
        self.children
            .push(child)
            .map_err(|_| CatalogError::ContainerFull)?;
        self.layout();
        Ok(self.children.len() - 1)
    }

    /// Computed bounds of the child at `index`.
    pub fn child_bounds(&self, index: usize) -> Option<Rectangle> {
        self.children.get(index).map(|c| c.bounds)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Main-axis extent the children need, including padding and spacing.
    ///
    /// `Expand` children contribute their natural size.
    pub fn natural_extent(&self) -> u32 {
        let padding = match self.direction {
            Direction::Horizontal => self.padding.horizontal(),
            Direction::Vertical => self.padding.vertical(),
        };
        let children: u32 = self
            .children
            .iter()
            .map(|c| match c.constraint {
                SizeConstraint::Fixed(n) => n,
                SizeConstraint::Fit | SizeConstraint::Expand => self.main(c.natural),
            })
            .sum();
        padding + children + self.total_spacing()
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout();
        }
    }

    fn main(&self, size: Size) -> u32 {
        match self.direction {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    fn cross(&self, size: Size) -> u32 {
        match self.direction {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    fn total_spacing(&self) -> u32 {
        self.spacing * self.children.len().saturating_sub(1) as u32
    }

    /// Build a rectangle from main/cross axis coordinates.
    fn oriented(&self, main_pos: i32, cross_pos: i32, main_len: u32, cross_len: u32) -> Rectangle {
        match self.direction {
            Direction::Horizontal => {
                Rectangle::new(Point::new(main_pos, cross_pos), Size::new(main_len, cross_len))
            }
            Direction::Vertical => {
                Rectangle::new(Point::new(cross_pos, main_pos), Size::new(cross_len, main_len))
            }
        }
    }

    fn layout(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let padding = self.padding;
        let content = Rectangle::new(
            self.bounds.top_left + Point::new(padding.left as i32, padding.top as i32),
            Size::new(
                self.bounds.size.width.saturating_sub(padding.horizontal()),
                self.bounds.size.height.saturating_sub(padding.vertical()),
            ),
        );
        let (main_start, cross_start) = match self.direction {
            Direction::Horizontal => (content.top_left.x, content.top_left.y),
            Direction::Vertical => (content.top_left.y, content.top_left.x),
        };
        let main_available = self.main(content.size);
        let cross_available = self.cross(content.size);

        let mut claimed = 0u32;
        let mut expand_count = 0u32;
        for child in &self.children {
            match child.constraint {
                SizeConstraint::Fixed(n) => claimed += n,
                SizeConstraint::Fit => claimed += self.main(child.natural),
                SizeConstraint::Expand => expand_count += 1,
            }
        }
        let remaining = main_available
            .saturating_sub(claimed)
            .saturating_sub(self.total_spacing());
        let expand_share = if expand_count > 0 {
            remaining / expand_count
        } else {
            0
        };

        let mut cursor = main_start;
        for i in 0..self.children.len() {
            let child = self.children[i];
            let main_len = match child.constraint {
                SizeConstraint::Fixed(n) => n,
                SizeConstraint::Fit => self.main(child.natural),
                SizeConstraint::Expand => expand_share,
            };
            let cross_len = match self.alignment {
                Alignment::Stretch => cross_available,
                Alignment::Start | Alignment::Center | Alignment::End => {
                    self.cross(child.natural).min(cross_available)
                }
            };
            let slack = cross_available - cross_len;
            let cross_pos = cross_start
                + match self.alignment {
                    Alignment::Start | Alignment::Stretch => 0,
                    Alignment::Center => (slack / 2) as i32,
                    Alignment::End => slack as i32,
                };

            let bounds = self.oriented(cursor, cross_pos, main_len, cross_len);
            self.children[i].bounds = bounds;

            cursor += main_len as i32 + self.spacing as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: u32, height: u32) -> Container<4> {
        Container::new(
            Rectangle::new(Point::new(10, 20), Size::new(width, height)),
            Direction::Horizontal,
        )
    }

    #[test]
    fn test_horizontal_padding_and_spacing() {
        let mut c = row(100, 32)
            .with_alignment(Alignment::Center)
            .with_padding(Padding::inline(6, 12))
            .with_spacing(4);
        let icon = c.add_child(Size::new(16, 16), SizeConstraint::Fit).unwrap();
        let title = c.add_child(Size::new(30, 10), SizeConstraint::Fit).unwrap();

        assert_eq!(
            c.child_bounds(icon),
            Some(Rectangle::new(Point::new(16, 28), Size::new(16, 16)))
        );
        assert_eq!(
            c.child_bounds(title),
            Some(Rectangle::new(Point::new(36, 31), Size::new(30, 10)))
        );
        assert_eq!(c.natural_extent(), 6 + 16 + 4 + 30 + 12);
    }

    #[test]
    fn test_expand_takes_remaining_space() {
        let mut c = row(100, 20);
        c.add_child(Size::new(20, 20), SizeConstraint::Fixed(20)).unwrap();
        let grow = c.add_child(Size::new(0, 20), SizeConstraint::Expand).unwrap();
        assert_eq!(c.child_bounds(grow).unwrap().size.width, 80);
    }

    #[test]
    fn test_vertical_stretch() {
        let mut c: Container<2> = Container::new(
            Rectangle::new(Point::zero(), Size::new(50, 100)),
            Direction::Vertical,
        )
        .with_alignment(Alignment::Stretch);
        c.add_child(Size::new(10, 30), SizeConstraint::Fit).unwrap();
        let second = c.add_child(Size::new(10, 30), SizeConstraint::Fit).unwrap();
        assert_eq!(
            c.child_bounds(second),
            Some(Rectangle::new(Point::new(0, 30), Size::new(50, 30)))
        );
    }

    #[test]
    fn test_capacity_is_reported() {
        let mut c: Container<1> = Container::new(Rectangle::zero(), Direction::Horizontal);
        c.add_child(Size::zero(), SizeConstraint::Fit).unwrap();
        assert_eq!(
            c.add_child(Size::zero(), SizeConstraint::Fit),
            Err(CatalogError::ContainerFull)
        );
    }
}
