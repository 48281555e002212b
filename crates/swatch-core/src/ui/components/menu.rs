//! Menu overlay: title header, selectable rows and an optional footer action
//!
//! A `Menu` takes part in the two-phase overlay protocol. `measure` sums
//! the fixed section heights into an [`OverlayPlan`]; `commit` splits the
//! final bounds into sections and, when the rows do not fit, puts the
//! content section behind a [`ScrollableContainer`]. Changing the menu's
//! contents drops the committed layout; present it again before drawing.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    CornerRadiiBuilder, Line, PrimitiveStyle, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::Alignment as TextAlignment;

use super::glyph::{Glyph, IconSlot, draw_glyph, slot_for};
use super::text::draw_label;
use crate::error::{CatalogError, bounded};
use crate::ui::accessibility::{self, AccessibilityElements, Accessible};
use crate::ui::core::{
    Action, ComponentId, Drawable, IconHandle, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::layouts::{
    OverlayFrame, OverlayLayout, OverlayPlan, Presentation, ScrollDirection, ScrollableContainer,
    SectionHeights, plan, present,
};
use crate::ui::styling::layout::{RADIUS, SPACING};
use crate::ui::styling::{ColorName, Metrics, Opacity, Paint, StyleResolver, TextSize, Theme};

pub const MAX_MENU_ITEMS: usize = 16;
pub const MAX_ITEM_LEN: usize = 32;

pub const HEADER_HEIGHT: u32 = 48;
pub const ROW_HEIGHT: u32 = 48;
pub const FOOTER_HEIGHT: u32 = 56;

/// One selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: heapless::String<MAX_ITEM_LEN>,
    pub icon: Option<IconHandle>,
}

/// Appearance of the menu surface and header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    pub presentation: Presentation,
}

impl StyleResolver for MenuStyle {
    fn metrics(&self) -> Metrics {
        Metrics {
            height: HEADER_HEIGHT,
            leading_padding: SPACING.large,
            trailing_padding: SPACING.large,
            spacing: 0,
            icon_size: Size::new(24, 24),
            corner_radius: RADIUS.large,
            text_size: TextSize::Large,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        Paint {
            foreground: theme.color(ColorName::OnSurface),
            background: Some(theme.color(ColorName::Surface)),
            border: None,
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Appearance of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRowStyle {
    pub selected: bool,
}

impl StyleResolver for MenuRowStyle {
    fn metrics(&self) -> Metrics {
        Metrics {
            height: ROW_HEIGHT,
            leading_padding: SPACING.large,
            trailing_padding: SPACING.large,
            spacing: SPACING.small + SPACING.medium,
            icon_size: Size::new(24, 24),
            corner_radius: RADIUS.none,
            text_size: TextSize::Medium,
            show_badge: false,
        }
    }

    fn paint(&self, theme: &Theme) -> Paint {
        let (foreground, background) = if self.selected {
            (theme.color(ColorName::Primary), Some(theme.color(ColorName::SurfaceVariant)))
        } else {
            (theme.color(ColorName::OnSurface), None)
        };
        Paint {
            foreground,
            background,
            border: None,
            opacity: Opacity::OPAQUE,
        }
    }
}

/// Committed layout of a presented menu
struct Committed {
    plan: OverlayPlan,
    frame: OverlayFrame,
    scroll: Option<ScrollableContainer>,
}

/// Row rectangles within a row's screen bounds
struct RowSlots {
    icon: Rectangle,
    label: Rectangle,
    mark: Rectangle,
}

/// Menu presented as a bottom sheet or popup
///
/// # Examples
/// ```ignore
/// let mut menu = Menu::new(ComponentId(40), Presentation::BottomSheet)
///     .with_title("Sort by")?
///     .with_footer("Cancel")?;
/// menu.add_item("Newest", None)?;
/// menu.add_item("Price", Some(IconHandle(3)))?;
///
/// menu.present(screen)?;
/// menu.draw(&theme, &mut display)?;
/// ```
pub struct Menu {
    id: ComponentId,
    style: MenuStyle,
    title: Option<heapless::String<MAX_ITEM_LEN>>,
    footer: Option<heapless::String<MAX_ITEM_LEN>>,
    items: heapless::Vec<MenuItem, MAX_MENU_ITEMS>,
    selected: Option<usize>,
    measured: Option<OverlayPlan>,
    committed: Option<Committed>,
    dirty: bool,
}

impl Menu {
    pub fn new(id: ComponentId, presentation: Presentation) -> Self {
        Self {
            id,
            style: MenuStyle { presentation },
            title: None,
            footer: None,
            items: heapless::Vec::new(),
            selected: None,
            measured: None,
            committed: None,
            dirty: true,
        }
    }

    pub fn with_title(mut self, title: &str) -> Result<Self, CatalogError> {
        self.title = Some(bounded(title)?);
        Ok(self)
    }

    pub fn with_footer(mut self, footer: &str) -> Result<Self, CatalogError> {
        self.footer = Some(bounded(footer)?);
        Ok(self)
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn presentation(&self) -> Presentation {
        self.style.presentation
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a row. Returns its index.
    pub fn add_item(
        &mut self,
        label: &str,
        icon: Option<IconHandle>,
    ) -> Result<usize, CatalogError> {
        let item = MenuItem {
            label: bounded(label)?,
            icon,
        };
        self.items.push(item).map_err(|_| CatalogError::MenuFull)?;
        self.invalidate();
        Ok(self.items.len() - 1)
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = None;
        self.invalidate();
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Mark a row as selected. Out-of-range indices clear the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.items.len());
        if self.selected != index {
            self.selected = index;
            self.dirty = true;
        }
    }

    /// Whether the menu has been measured and committed.
    pub fn is_presented(&self) -> bool {
        self.committed.is_some()
    }

    /// Measure, place and commit this menu on `screen`.
    pub fn present(&mut self, screen: Rectangle) -> Result<Rectangle, CatalogError> {
        let presentation = self.style.presentation;
        present(self, presentation, screen)
    }

    /// Section rectangles of the committed layout.
    pub fn frame(&self) -> Option<OverlayFrame> {
        self.committed.as_ref().map(|c| c.frame)
    }

    pub fn plan(&self) -> Option<OverlayPlan> {
        self.committed.as_ref().map(|c| c.plan)
    }

    pub fn scroll(&self) -> Option<&ScrollableContainer> {
        self.committed.as_ref().and_then(|c| c.scroll.as_ref())
    }

    fn invalidate(&mut self) {
        if self.measured.is_some() || self.committed.is_some() {
            log::debug!("menu {} layout invalidated", self.id.0);
        }
        self.measured = None;
        self.committed = None;
        self.dirty = true;
    }

    fn section_heights(&self) -> SectionHeights {
        SectionHeights {
            header: if self.title.is_some() { HEADER_HEIGHT } else { 0 },
            content: self.items.len() as u32 * ROW_HEIGHT,
            footer: if self.footer.is_some() { FOOTER_HEIGHT } else { 0 },
        }
    }

    /// Screen rectangle of row `index`, before clipping to the content area.
    pub fn row_bounds(&self, index: usize) -> Option<Rectangle> {
        let committed = self.committed.as_ref()?;
        let content = committed.frame.content?;
        if index >= self.items.len() {
            return None;
        }

        let row = Rectangle::new(
            Point::new(0, (index as u32 * ROW_HEIGHT) as i32),
            Size::new(content.size.width, ROW_HEIGHT),
        );
        Some(match &committed.scroll {
            Some(scroll) => scroll.content_to_screen(row),
            None => Rectangle::new(content.top_left + row.top_left, row.size),
        })
    }

    /// Rows at least partly inside the content area.
    fn visible_rows(&self) -> impl Iterator<Item = (usize, Rectangle)> + '_ {
        let content = self.frame().and_then(|f| f.content);
        (0..self.items.len()).filter_map(move |i| {
            let area = content?;
            let row = self.row_bounds(i)?;
            let visible = !area.intersection(&row).is_zero_sized();
            visible.then_some((i, row))
        })
    }

    fn row_slots(row: Rectangle) -> RowSlots {
        let metrics = MenuRowStyle { selected: false }.metrics();
        let icon = metrics.icon_size;
        let inset = (row.size.height.saturating_sub(icon.height) / 2) as i32;
        let leading = Point::new(metrics.leading_padding as i32, inset);
        let icon_rect = Rectangle::new(row.top_left + leading, icon);
        let mark_x = row
            .size
            .width
            .saturating_sub(metrics.trailing_padding + icon.width);
        let mark = Rectangle::new(row.top_left + Point::new(mark_x as i32, inset), icon);
        let label_x = metrics.leading_padding + icon.width + metrics.spacing;
        let label = Rectangle::new(
            row.top_left + Point::new(label_x as i32, 0),
            Size::new(
                row.size.width.saturating_sub(
                    label_x + metrics.spacing + icon.width + metrics.trailing_padding,
                ),
                row.size.height,
            ),
        );
        RowSlots {
            icon: icon_rect,
            label,
            mark,
        }
    }

    /// Host icons of the visible rows.
    pub fn icon_slots(&self, theme: &Theme) -> heapless::Vec<IconSlot, MAX_MENU_ITEMS> {
        let mut out = heapless::Vec::new();
        for (index, row) in self.visible_rows() {
            let Some(icon) = self.items[index].icon else {
                continue;
            };
            let color = MenuRowStyle {
                selected: self.selected == Some(index),
            }
            .paint(theme)
            .foreground;
            if let Some(slot) = slot_for(Glyph::Custom(icon), Self::row_slots(row).icon, color) {
                let _ = out.push(slot);
            }
        }
        out
    }

    fn draw_rows<D: DrawTarget<Color = Rgb565>>(
        &self,
        content: Rectangle,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let mut clipped = display.clipped(&content);
        for (index, row) in self.visible_rows() {
            let selected = self.selected == Some(index);
            let layout = MenuRowStyle { selected }.resolve(theme);
            let slots = Self::row_slots(row);

            if let Some(bg) = layout.background {
                row.into_styled(PrimitiveStyle::with_fill(bg))
                    .draw(&mut clipped)?;
            }
            if let Some(icon) = self.items[index].icon {
                draw_glyph(Glyph::Custom(icon), slots.icon, layout.foreground, &mut clipped)?;
            }
            draw_label(
                &self.items[index].label,
                slots.label,
                layout.text_size,
                layout.foreground,
                TextAlignment::Left,
                &mut clipped,
            )?;
            if selected {
                draw_glyph(Glyph::Checkmark, slots.mark, layout.foreground, &mut clipped)?;
            }
        }
        Ok(())
    }
}

impl OverlayLayout for Menu {
    fn measure(&mut self, constraints: Size) -> Size {
        let plan = plan(self.section_heights(), constraints.height);
        self.measured = Some(plan);
        self.committed = None;
        Size::new(constraints.width, plan.total)
    }

    fn commit(&mut self, bounds: Rectangle) -> Result<(), CatalogError> {
        let plan = self.measured.ok_or(CatalogError::NotMeasured)?;
        let frame = plan.frame(bounds);
        let scroll = match frame.content {
            Some(content) if plan.scrollable => Some(ScrollableContainer::new(
                content,
                Size::new(content.size.width, plan.content_intrinsic),
                ScrollDirection::Vertical,
            )),
            Some(_) | None => None,
        };

        self.committed = Some(Committed {
            plan,
            frame,
            scroll,
        });
        self.dirty = true;
        Ok(())
    }
}

impl Drawable for Menu {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some(committed) = &self.committed else {
            return Ok(());
        };
        let frame = committed.frame;
        let layout = self.style.resolve(theme);

        let radius = Size::new(layout.corner_radius, layout.corner_radius);
        let radii = match self.style.presentation {
            Presentation::BottomSheet => CornerRadiiBuilder::new().top(radius).build(),
            Presentation::Popup { .. } => CornerRadiiBuilder::new().all(radius).build(),
        };
        RoundedRectangle::new(frame.bounds, radii)
            .into_styled(layout.container_style())
            .draw(display)?;

        let divider = PrimitiveStyle::with_stroke(theme.color(ColorName::OutlineVariant), 1);

        if let Some(title) = &self.title {
            let header = frame.header;
            let text = Rectangle::new(
                header.top_left + Point::new(layout.leading_padding as i32, 0),
                Size::new(
                    header
                        .size
                        .width
                        .saturating_sub(layout.leading_padding + layout.trailing_padding),
                    header.size.height,
                ),
            );
            draw_label(
                title,
                text,
                layout.text_size,
                layout.foreground,
                TextAlignment::Left,
                display,
            )?;
            let y = header.top_left.y + header.size.height as i32 - 1;
            Line::new(
                Point::new(header.top_left.x, y),
                Point::new(header.top_left.x + header.size.width as i32 - 1, y),
            )
            .into_styled(divider)
            .draw(display)?;
        }

        if let Some(content) = frame.content {
            self.draw_rows(content, theme, display)?;
            if let Some(scroll) = &committed.scroll {
                scroll.draw(theme, display)?;
            }
        }

        if let Some(footer_label) = &self.footer {
            let footer = frame.footer;
            Line::new(
                footer.top_left,
                footer.top_left + Point::new(footer.size.width as i32 - 1, 0),
            )
            .into_styled(divider)
            .draw(display)?;
            draw_label(
                footer_label,
                footer,
                TextSize::Medium,
                theme.color(ColorName::Primary),
                TextAlignment::Center,
                display,
            )?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.frame().map(|f| f.bounds).unwrap_or(Rectangle::zero())
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.scroll().is_some_and(|s| s.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        if let Some(scroll) = self.committed.as_mut().and_then(|c| c.scroll.as_mut()) {
            scroll.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Menu {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let id = self.id;
        let Some(committed) = self.committed.as_mut() else {
            return TouchResult::NotHandled;
        };
        let frame = committed.frame;

        let point = match event {
            TouchEvent::Press(point) => point,
            TouchEvent::Drag(_) => {
                return match committed.scroll.as_mut() {
                    Some(scroll) => scroll.handle_touch(event),
                    None => TouchResult::NotHandled,
                };
            }
        };
        let p = point.to_point();

        if !frame.bounds.contains(p) {
            log::debug!("menu {} dismissed", id.0);
            return TouchResult::Action(Action::Dismissed(id));
        }
        if self.footer.is_some() && frame.footer.contains(p) {
            return TouchResult::Action(Action::FooterAction(id));
        }

        let Some(content) = frame.content.filter(|c| c.contains(p)) else {
            return TouchResult::Handled;
        };
        let local = match committed.scroll.as_mut() {
            Some(scroll) => {
                // Start drag tracking as well as selecting
                scroll.handle_touch(event);
                scroll.viewport_to_content(point)
            }
            None => Some(p - content.top_left),
        };

        let index = local.map(|l| l.y as usize / ROW_HEIGHT as usize);
        match index {
            Some(index) if index < self.items.len() => {
                self.set_selected(Some(index));
                TouchResult::Action(Action::ItemSelected { menu: id, index })
            }
            Some(_) | None => TouchResult::Handled,
        }
    }
}

impl Accessible for Menu {
    fn accessibility_elements(&self) -> AccessibilityElements {
        use accessibility::menu;

        let mut elements = AccessibilityElements::new();
        let Some(frame) = self.frame() else {
            return elements;
        };

        accessibility::push(&mut elements, menu::CONTAINER, frame.bounds);
        if self.title.is_some() {
            accessibility::push(&mut elements, menu::HEADER, frame.header);
        }
        if let Some(content) = frame.content {
            accessibility::push(&mut elements, menu::CONTENT, content);
            for (index, row) in self.visible_rows() {
                let id = accessibility::indexed(menu::ITEM_PREFIX, index);
                accessibility::push(&mut elements, &id, row);
            }
        }
        if self.footer.is_some() {
            accessibility::push(&mut elements, menu::FOOTER, frame.footer);
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::ui::styling::resolver::testing::{assert_idempotent, assert_well_formed};

    fn screen(height: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(360, height))
    }

    fn menu(items: usize) -> Menu {
        let mut menu = Menu::new(ComponentId(40), Presentation::BottomSheet)
            .with_title("Sort by")
            .unwrap()
            .with_footer("Cancel")
            .unwrap();
        for i in 0..items {
            let icon = (i % 2 == 0).then_some(IconHandle(i as u32));
            menu.add_item("Option", icon).unwrap();
        }
        menu
    }

    #[test]
    fn test_height_is_sum_of_sections() {
        let mut m = menu(3);
        let bounds = m.present(screen(640)).unwrap();
        assert_eq!(bounds, Rectangle::new(Point::new(0, 392), Size::new(360, 248)));

        let frame = m.frame().unwrap();
        assert_eq!(frame.header.size.height, 48);
        assert_eq!(frame.content.unwrap().size.height, 144);
        assert_eq!(frame.footer.top_left.y, 392 + 48 + 144);
        assert!(m.scroll().is_none());
    }

    #[test]
    fn test_zero_items_omit_content() {
        let mut m = menu(0);
        let bounds = m.present(screen(640)).unwrap();
        assert_eq!(bounds.size.height, 48 + 56);
        assert_eq!(m.frame().unwrap().content, None);
        assert!(m.accessibility_elements().iter().all(|e| e.id.as_str() != "menu.content"));
    }

    #[test]
    fn test_commit_requires_measure() {
        let mut m = menu(2);
        assert_eq!(m.commit(screen(640)), Err(CatalogError::NotMeasured));
    }

    #[test]
    fn test_tall_menu_scrolls() {
        let mut m = menu(12);
        m.present(screen(400)).unwrap();
        let plan = m.plan().unwrap();
        assert_eq!(plan.total, 400);
        assert_eq!(plan.content, 400 - 48 - 56);
        assert!(plan.scrollable);

        let scroll = m.scroll().unwrap();
        assert_eq!(scroll.content_size().height, 12 * 48);
        assert!(scroll.can_scroll_vertical());
    }

    #[test]
    fn test_row_touch_accounts_for_scroll() {
        let mut m = menu(12);
        m.present(screen(400)).unwrap();

        // Content starts at y = 48; drag up by 96 to scroll two rows
        m.handle_touch(TouchEvent::Press(TouchPoint::new(100, 200)));
        m.handle_touch(TouchEvent::Drag(TouchPoint::new(100, 104)));
        assert_eq!(m.scroll().unwrap().scroll_offset(), Point::new(0, 96));

        let result = m.handle_touch(TouchEvent::Press(TouchPoint::new(100, 60)));
        assert_eq!(
            result,
            TouchResult::Action(Action::ItemSelected {
                menu: ComponentId(40),
                index: 2
            })
        );
        assert_eq!(m.selected(), Some(2));
    }

    #[test]
    fn test_footer_and_dismiss() {
        let mut m = Menu::new(ComponentId(41), Presentation::Popup { width: 280 })
            .with_footer("Close")
            .unwrap();
        m.add_item("One", None).unwrap();
        let bounds = m.present(screen(640)).unwrap();
        assert_eq!(bounds, Rectangle::new(Point::new(40, 268), Size::new(280, 104)));

        let footer = m.frame().unwrap().footer.center();
        assert_eq!(
            m.handle_touch(TouchEvent::Press(TouchPoint::new(footer.x as u16, footer.y as u16))),
            TouchResult::Action(Action::FooterAction(ComponentId(41)))
        );
        assert_eq!(
            m.handle_touch(TouchEvent::Press(TouchPoint::new(5, 5))),
            TouchResult::Action(Action::Dismissed(ComponentId(41)))
        );
    }

    #[test]
    fn test_capacity_and_invalidation() {
        let mut m = menu(MAX_MENU_ITEMS);
        assert_eq!(m.add_item("Extra", None), Err(CatalogError::MenuFull));

        m.clear_items();
        assert!(m.is_empty());
        m.present(screen(640)).unwrap();
        assert!(m.is_presented());

        // New rows drop the committed layout
        m.add_item("Fresh", None).unwrap();
        assert!(!m.is_presented());
        assert_eq!(m.frame(), None);
    }

    #[test]
    fn test_visible_rows_and_identifiers() {
        let mut m = menu(12);
        m.present(screen(400)).unwrap();
        let rows = m.visible_rows().count();
        // 296px of content shows six full rows and part of a seventh
        assert_eq!(rows, 7);

        let elements = m.accessibility_elements();
        assert_eq!(elements[0].id.as_str(), "menu");
        assert!(elements.iter().any(|e| e.id.as_str() == "menu.item.6"));
        assert!(elements.iter().all(|e| e.id.as_str() != "menu.item.7"));
        assert_eq!(elements.last().unwrap().id.as_str(), "menu.footer");

        // Items 0, 2, 4 and 6 carry icons
        assert_eq!(m.icon_slots(&Theme::light()).len(), 4);
    }

    #[test]
    fn test_styles_are_well_formed() {
        let theme = Theme::light();
        for selected in [false, true] {
            let style = MenuRowStyle { selected };
            assert_well_formed(&style.resolve(&theme));
            assert_idempotent(&style, &theme);
        }
        let surface = MenuStyle {
            presentation: Presentation::BottomSheet,
        };
        assert_well_formed(&surface.resolve(&theme));
        assert_eq!(
            MenuRowStyle { selected: true }.resolve(&theme).background,
            Some(theme.color(ColorName::SurfaceVariant))
        );
    }

    #[test]
    fn test_narrow_popup_lays_out_without_overflow() {
        let mut m = Menu::new(ComponentId(42), Presentation::Popup { width: 30 })
            .with_title("Sort by")
            .unwrap();
        m.add_item("Newest", Some(IconHandle(1))).unwrap();
        m.add_item("Oldest", None).unwrap();
        m.set_selected(Some(1));
        let bounds = m.present(screen(640)).unwrap();
        assert_eq!(bounds.size.width, 30);

        let row = m.row_bounds(1).unwrap();
        let slots = Menu::row_slots(row);
        assert_eq!(slots.mark.top_left.x, row.top_left.x);
        assert_eq!(slots.label.size.width, 0);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        m.draw(&Theme::light(), &mut display).unwrap();
        assert_eq!(m.icon_slots(&Theme::light()).len(), 1);
        assert!(!m.accessibility_elements().is_empty());
    }
}
