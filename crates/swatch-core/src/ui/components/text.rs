// src/ui/components/text.rs
//! Single-line label rendering shared by components

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::ui::styling::TextSize;

/// Draw `text` vertically centered in `area`.
///
/// With `Alignment::Left` the text starts at the left edge of `area`, with
/// `Center` it is centered horizontally, with `Right` it ends at the right
/// edge.
pub fn draw_label<D: DrawTarget<Color = Rgb565>>(
    text: &str,
    area: Rectangle,
    size: TextSize,
    color: Rgb565,
    alignment: Alignment,
    display: &mut D,
) -> Result<(), D::Error> {
    if text.is_empty() {
        return Ok(());
    }

    let character_style = MonoTextStyle::new(size.font(), color);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Middle)
        .build();

    let center = area.center();
    let x = match alignment {
        Alignment::Left => area.top_left.x,
        Alignment::Center => center.x,
        Alignment::Right => area.top_left.x + area.size.width as i32,
    };

    Text::with_text_style(text, Point::new(x, center.y), character_style, text_style)
        .draw(display)?;
    Ok(())
}

/// Size of a single-line label in `size`.
pub fn label_size(text: &str, size: TextSize) -> Size {
    Size::new(size.text_width(text), size.line_height())
}
