//! Sizing coordinator for menus, bottom sheets and popups
//!
//! Overlays size themselves in two explicit phases:
//!
//! 1. **measure** - each section (header, content, footer) reports its
//!    intrinsic height and [`plan`] sums them against the available height.
//! 2. **commit** - the host hands back the final bounds and the overlay
//!    splits them into section rectangles with [`OverlayPlan::frame`].
//!
//! The content section absorbs any shortfall: when header + content +
//! footer exceeds the available height, content is clamped to what is left
//! and becomes scrollable. An empty content section is omitted entirely.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::error::CatalogError;

/// Two-phase layout protocol for overlay surfaces
pub trait OverlayLayout {
    /// Report the size this overlay wants within `constraints`.
    fn measure(&mut self, constraints: Size) -> Size;

    /// Accept final bounds. Fails if called before [`measure`](Self::measure).
    fn commit(&mut self, bounds: Rectangle) -> Result<(), CatalogError>;
}

/// Intrinsic heights reported during the measure phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionHeights {
    pub header: u32,
    pub content: u32,
    pub footer: u32,
}

/// Heights chosen for each section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPlan {
    pub header: u32,
    /// Content height after clamping, 0 when the section is omitted
    pub content: u32,
    pub footer: u32,
    /// Intrinsic content height before clamping
    pub content_intrinsic: u32,
    pub total: u32,
    /// Content is taller than its share and must scroll
    pub scrollable: bool,
}

impl OverlayPlan {
    /// Whether the content section is laid out at all.
    pub fn has_content(&self) -> bool {
        self.content > 0
    }

    /// Split committed bounds into section rectangles, top to bottom.
    pub fn frame(&self, bounds: Rectangle) -> OverlayFrame {
        let width = bounds.size.width;
        let top = bounds.top_left;
        // Committed bounds may be shorter than planned; shrink content first.
        let available = bounds.size.height;
        let header = self.header.min(available);
        let footer = self.footer.min(available - header);
        let content = self.content.min(available - header - footer);

        let header_rect = Rectangle::new(top, Size::new(width, header));
        let content_rect = (content > 0).then(|| {
            Rectangle::new(top + Point::new(0, header as i32), Size::new(width, content))
        });
        let footer_rect = Rectangle::new(
            top + Point::new(0, (header + content) as i32),
            Size::new(width, footer),
        );

        OverlayFrame {
            bounds: Rectangle::new(top, Size::new(width, header + content + footer)),
            header: header_rect,
            content: content_rect,
            footer: footer_rect,
        }
    }
}

/// Section rectangles produced by the commit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFrame {
    pub bounds: Rectangle,
    pub header: Rectangle,
    /// `None` when the content section is omitted
    pub content: Option<Rectangle>,
    pub footer: Rectangle,
}

/// Sum measured section heights against the available height.
///
/// `total = header + clamp(content) + footer`, never more than
/// `available_height`.
pub fn plan(measured: SectionHeights, available_height: u32) -> OverlayPlan {
    let header = measured.header.min(available_height);
    let footer = measured.footer.min(available_height - header);
    let budget = available_height - header - footer;
    let content = measured.content.min(budget);

    OverlayPlan {
        header,
        content,
        footer,
        content_intrinsic: measured.content,
        total: header + content + footer,
        scrollable: measured.content > budget,
    }
}

/// Where an overlay sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Full width, anchored to the bottom edge
    BottomSheet,
    /// Fixed width, centered both ways
    Popup { width: u32 },
}

impl Presentation {
    /// Width the overlay is measured with on `screen`.
    pub fn width(&self, screen: Size) -> u32 {
        match self {
            Presentation::BottomSheet => screen.width,
            Presentation::Popup { width } => (*width).min(screen.width),
        }
    }

    /// Place an overlay of `size` on `screen`.
    pub fn place(&self, screen: Rectangle, size: Size) -> Rectangle {
        let width = size.width.min(screen.size.width);
        let height = size.height.min(screen.size.height);
        let origin = match self {
            Presentation::BottomSheet => {
                screen.top_left + Point::new(0, (screen.size.height - height) as i32)
            }
            Presentation::Popup { .. } => {
                screen.top_left
                    + Point::new(
                        ((screen.size.width - width) / 2) as i32,
                        ((screen.size.height - height) / 2) as i32,
                    )
            }
        };
        Rectangle::new(origin, Size::new(width, height))
    }
}

/// Run both phases for `overlay` on `screen`.
///
/// Returns the committed bounds.
pub fn present<O: OverlayLayout>(
    overlay: &mut O,
    presentation: Presentation,
    screen: Rectangle,
) -> Result<Rectangle, CatalogError> {
    let constraints = Size::new(presentation.width(screen.size), screen.size.height);
    let size = overlay.measure(constraints);
    let bounds = presentation.place(screen, size);
    overlay.commit(bounds)?;
    log::debug!(
        "overlay committed at ({}, {}) {}x{}",
        bounds.top_left.x,
        bounds.top_left.y,
        bounds.size.width,
        bounds.size.height
    );
    Ok(bounds)
}
