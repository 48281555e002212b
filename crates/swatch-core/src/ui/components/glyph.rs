//! Built-in glyphs and host icon slots
//!
//! Components draw their own system marks (checkmark, dropdown chevron,
//! close cross) with primitives. Any other icon is an opaque
//! [`IconHandle`]; the component reserves a box for it and reports an
//! [`IconSlot`] so the host can paint it after the component is drawn.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Polyline, Rectangle};

use crate::ui::core::IconHandle;

/// Something drawn in a component's icon box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Checkmark,
    Chevron,
    Close,
    Custom(IconHandle),
}

/// A host-painted icon position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    pub icon: IconHandle,
    pub area: Rectangle,
    /// Tint the host should apply
    pub color: Rgb565,
}

/// Maximum icon slots a single component reports
pub const MAX_ICON_SLOTS: usize = 4;

pub type IconSlots = heapless::Vec<IconSlot, MAX_ICON_SLOTS>;

/// Point at `(fx, fy)` percent of `area`.
fn at(area: Rectangle, fx: u32, fy: u32) -> Point {
    area.top_left
        + Point::new(
            (area.size.width * fx / 100) as i32,
            (area.size.height * fy / 100) as i32,
        )
}

fn stroke_width(area: Rectangle) -> u32 {
    if area.size.height >= 20 { 2 } else { 1 }
}

/// Draw a built-in glyph; custom icons are skipped and returned as a slot.
pub fn draw_glyph<D: DrawTarget<Color = Rgb565>>(
    glyph: Glyph,
    area: Rectangle,
    color: Rgb565,
    display: &mut D,
) -> Result<Option<IconSlot>, D::Error> {
    let style = PrimitiveStyle::with_stroke(color, stroke_width(area));

    match glyph {
        Glyph::Checkmark => {
            let points = [at(area, 18, 52), at(area, 40, 74), at(area, 84, 28)];
            Polyline::new(&points).into_styled(style).draw(display)?;
        }
        Glyph::Chevron => {
            let points = [at(area, 25, 38), at(area, 50, 64), at(area, 75, 38)];
            Polyline::new(&points).into_styled(style).draw(display)?;
        }
        Glyph::Close => {
            Line::new(at(area, 25, 25), at(area, 75, 75))
                .into_styled(style)
                .draw(display)?;
            Line::new(at(area, 75, 25), at(area, 25, 75))
                .into_styled(style)
                .draw(display)?;
        }
        Glyph::Custom(icon) => return Ok(Some(IconSlot { icon, area, color })),
    }

    Ok(None)
}

/// Collect the host slot for `glyph` without drawing.
pub fn slot_for(glyph: Glyph, area: Rectangle, color: Rgb565) -> Option<IconSlot> {
    match glyph {
        Glyph::Custom(icon) => Some(IconSlot { icon, area, color }),
        Glyph::Checkmark | Glyph::Chevron | Glyph::Close => None,
    }
}
