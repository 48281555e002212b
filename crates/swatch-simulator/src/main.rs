//! Desktop catalog viewer for the swatch design system.
//!
//! Renders swatch-core components in an SDL2 window via
//! `embedded-graphics-simulator`, acting as the host renderer: it owns the
//! theme provider, paints host icons into the slots components report, and
//! routes mouse input as touches.
//!
//! # Key bindings
//!
//! | Key | Action                          |
//! |-----|---------------------------------|
//! | 1   | Chips and badges                |
//! | 2   | Buttons and tags                |
//! | 3   | Input fields                    |
//! | 4   | Radios and checkboxes           |
//! | T   | Toggle light/dark theme         |
//! | M   | Open the bottom-sheet menu      |
//! | N   | Open the popup menu             |
//! | Q   | Quit                            |
//!
//! Mouse clicks are forwarded as touch presses, mouse drags as touch drags.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment as TextAlignment;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use swatch_core::CatalogError;
use swatch_core::ui::components::text::draw_label;
use swatch_core::ui::components::{
    Badge, BadgeKind, Button, ButtonSize, ButtonVariant, CheckState, Chip, ChipSize,
    ChipVariant, ControlKind, FilterStyle, IconPlacement, IconSlot, InputField, InputSize, Menu,
    SelectionControl, Tag, TagSize, TagTone, TrailingAction,
};
use swatch_core::ui::styling::colors::blend;
use swatch_core::ui::styling::{ColorName, TextSize, Theme, ThemeConfig, ThemeProvider};
use swatch_core::ui::{
    Action, ComponentId, Drawable, IconHandle, Presentation, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 360;
const DISPLAY_HEIGHT_PX: u32 = 640;

/// Horizontal inset of catalog content
const MARGIN: i32 = 16;

/// Top of the catalog content, below the page title
const CONTENT_TOP: i32 = 48;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// The host's theme slot. Every render pass reads a snapshot from here.
static THEME: ThemeProvider = ThemeProvider::new(Theme::light());

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "swatch-simulator", about = "Browse the swatch component catalog")]
struct Args {
    /// TOML theme file: optional `base` plus a `[colors]` table of hex values
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Pixel scale factor for the simulator window
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Start from the built-in dark theme
    #[arg(long)]
    dark: bool,
}

/// Load a theme file, logging and returning `None` on any failure.
fn load_theme(path: &Path) -> Option<Theme> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Cannot read theme {}: {}", path.display(), e);
            return None;
        }
    };

    let config: ThemeConfig = match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid theme file {}: {}", path.display(), e);
            return None;
        }
    };

    match Theme::from_config(&config) {
        Ok(theme) => {
            info!("Loaded theme from {}", path.display());
            Some(theme)
        }
        Err(e) => {
            log::error!("Theme {} rejected: {}", path.display(), e);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogPage {
    Chips,
    Buttons,
    Fields,
    Controls,
}

impl CatalogPage {
    fn title(&self) -> &'static str {
        match self {
            CatalogPage::Chips => "Chips & badges",
            CatalogPage::Buttons => "Buttons & tags",
            CatalogPage::Fields => "Input fields",
            CatalogPage::Controls => "Selection controls",
        }
    }
}

/// Map an SDL keycode to a catalog page.
fn keycode_to_page(keycode: Keycode) -> Option<CatalogPage> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(CatalogPage::Chips),
        Keycode::Num2 | Keycode::Kp2 => Some(CatalogPage::Buttons),
        Keycode::Num3 | Keycode::Kp3 => Some(CatalogPage::Fields),
        Keycode::Num4 | Keycode::Kp4 => Some(CatalogPage::Controls),
        _ => None,
    }
}

/// Every component shown by the simulator
struct Catalog {
    page: CatalogPage,
    chips: Vec<Chip>,
    badges: Vec<Badge>,
    buttons: Vec<Button>,
    tags: Vec<Tag>,
    fields: Vec<InputField>,
    controls: Vec<SelectionControl>,
    menus: [Menu; 2],
    open_menu: Option<usize>,
}

fn at(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn build_chips() -> Result<Vec<Chip>, CatalogError> {
    let origin = Point::zero();
    Ok(vec![
        Chip::new(ComponentId(1), origin, "Vegan", ChipVariant::Filter(FilterStyle::OnlyTitle))?,
        Chip::new(ComponentId(2), origin, "Open now", ChipVariant::Filter(FilterStyle::OnlyTitle))?
            .with_size(ChipSize::Size40)
            .with_selected(true),
        Chip::new(
            ComponentId(3),
            origin,
            "Nearby",
            ChipVariant::Filter(FilterStyle::WithIcon(IconHandle(1))),
        )?,
        Chip::new(ComponentId(4), origin, "Sort", ChipVariant::Filter(FilterStyle::WithButton))?
            .with_selected(true)
            .with_badge_count(Some(3)),
        Chip::new(ComponentId(5), origin, "Price", ChipVariant::Filter(FilterStyle::WithButton))?
            .with_badge_count(Some(120)),
        Chip::new(ComponentId(6), origin, "Directions", ChipVariant::Assist(IconHandle(2)))?,
        Chip::new(
            ComponentId(7),
            origin,
            "Ada",
            ChipVariant::Input {
                avatar: Some(IconHandle(3)),
            },
        )?,
        Chip::new(ComponentId(8), origin, "rust", ChipVariant::Input { avatar: None })?,
        Chip::new(ComponentId(9), origin, "Try again", ChipVariant::Suggestion)?
            .with_size(ChipSize::Size40),
    ])
}

fn build_buttons() -> Result<Vec<Button>, CatalogError> {
    let width = DISPLAY_WIDTH_PX - 2 * MARGIN as u32;
    let mut disabled =
        Button::new(ComponentId(15), at(MARGIN, 296), "Disabled")?.with_min_width(width);
    disabled.set_enabled(false);

    Ok(vec![
        Button::new(ComponentId(10), at(MARGIN, CONTENT_TOP), "Continue")?
            .with_size(ButtonSize::Large)
            .with_min_width(width),
        Button::new(ComponentId(11), at(MARGIN, 104), "Save")?
            .with_variant(ButtonVariant::Secondary)
            .with_icon(IconPlacement::Leading(IconHandle(4))),
        Button::new(ComponentId(12), at(MARGIN, 152), "Details")?
            .with_variant(ButtonVariant::Outlined)
            .with_icon(IconPlacement::Trailing(IconHandle(5))),
        Button::new(ComponentId(13), at(MARGIN, 200), "Skip")?
            .with_variant(ButtonVariant::Ghost)
            .with_size(ButtonSize::Small),
        Button::new(ComponentId(14), at(MARGIN, 248), "Delete")?
            .with_variant(ButtonVariant::Danger),
        disabled,
        Button::new(ComponentId(16), at(MARGIN, 344), "Search")?
            .with_icon(IconPlacement::Only(IconHandle(6))),
    ])
}

fn build_tags() -> Result<Vec<Tag>, CatalogError> {
    let mut tags = Vec::new();
    let mut x = MARGIN;
    for (tone, title) in [
        (TagTone::Neutral, "Draft"),
        (TagTone::Info, "New"),
        (TagTone::Success, "Paid"),
        (TagTone::Warning, "Late"),
        (TagTone::Error, "Failed"),
    ] {
        let tag = Tag::new(at(x, 408), title, tone)?;
        x += tag.bounds().size.width as i32 + 8;
        tags.push(tag);
    }
    tags.push(
        Tag::new(at(MARGIN, 440), "Verified", TagTone::Success)?
            .with_size(TagSize::Medium)
            .with_icon(IconHandle(7)),
    );
    Ok(tags)
}

fn build_fields() -> Result<Vec<InputField>, CatalogError> {
    let width = DISPLAY_WIDTH_PX - 2 * MARGIN as u32;

    let mut search = InputField::new(ComponentId(20), at(MARGIN, CONTENT_TOP), width, "Search")?
        .with_leading_icon(IconHandle(8))
        .with_trailing_action(TrailingAction::Clear);
    search.set_text("espresso")?;

    let mut email = InputField::new(ComponentId(21), at(MARGIN, 112), width, "Email")?
        .with_helper("Enter a valid address")?;
    email.set_text("ada@")?;
    email.set_error(true);

    let mut locked = InputField::new(ComponentId(22), at(MARGIN, 196), width, "Account")?;
    locked.set_enabled(false);

    let large = InputField::new(ComponentId(23), at(MARGIN, 260), width, "Password")?
        .with_size(InputSize::Large)
        .with_trailing_action(TrailingAction::Icon(IconHandle(9)))
        .with_helper("At least 8 characters")?;

    Ok(vec![search, email, locked, large])
}

fn build_controls() -> Result<Vec<SelectionControl>, CatalogError> {
    let mut controls = Vec::new();
    for (i, label) in ["Daily", "Weekly", "Monthly"].into_iter().enumerate() {
        let mut radio = SelectionControl::radio(
            ComponentId(30 + i as u16),
            at(MARGIN, CONTENT_TOP + 36 * i as i32),
            label,
        )?;
        radio.set_selected(i == 0);
        controls.push(radio);
    }

    let mut disabled_radio = SelectionControl::radio(ComponentId(33), at(MARGIN, 156), "Yearly")?;
    disabled_radio.set_enabled(false);
    controls.push(disabled_radio);

    let mut all = SelectionControl::checkbox(ComponentId(34), at(MARGIN, 216), "All toppings")?;
    all.set_state(CheckState::Indeterminate);
    controls.push(all);

    let mut cheese = SelectionControl::checkbox(ComponentId(35), at(MARGIN + 24, 252), "Cheese")?;
    cheese.set_selected(true);
    controls.push(cheese);
    controls.push(SelectionControl::checkbox(
        ComponentId(36),
        at(MARGIN + 24, 288),
        "Olives",
    )?);

    let mut locked =
        SelectionControl::checkbox(ComponentId(37), at(MARGIN, 336), "Terms accepted")?;
    locked.set_selected(true);
    locked.set_enabled(false);
    controls.push(locked);

    Ok(controls)
}

fn build_menu(id: ComponentId, presentation: Presentation) -> Result<Menu, CatalogError> {
    let mut menu = Menu::new(id, presentation)
        .with_title("Sort by")?
        .with_footer("Cancel")?;
    for (i, label) in [
        "Recommended",
        "Newest",
        "Price: low to high",
        "Price: high to low",
        "Rating",
        "Distance",
        "Delivery time",
        "Popularity",
        "Name A-Z",
        "Name Z-A",
    ]
    .into_iter()
    .enumerate()
    {
        let icon = (i % 3 == 0).then_some(IconHandle(100 + i as u32));
        menu.add_item(label, icon)?;
    }
    menu.set_selected(Some(0));
    Ok(menu)
}

impl Catalog {
    fn build() -> Result<Self, CatalogError> {
        Ok(Self {
            page: CatalogPage::Chips,
            chips: build_chips()?,
            badges: vec![
                Badge::new(at(MARGIN + 8, 360), BadgeKind::Dot),
                Badge::new(at(MARGIN + 48, 360), BadgeKind::Count(7)),
                Badge::new(at(MARGIN + 96, 360), BadgeKind::Count(250)),
            ],
            buttons: build_buttons()?,
            tags: build_tags()?,
            fields: build_fields()?,
            controls: build_controls()?,
            menus: [
                build_menu(ComponentId(40), Presentation::BottomSheet)?,
                build_menu(ComponentId(41), Presentation::Popup { width: 280 })?,
            ],
            open_menu: None,
        })
    }

    /// Wrap chips into rows; their widths change with selection.
    fn flow_chips(&mut self) {
        let right = DISPLAY_WIDTH_PX as i32 - MARGIN;
        let mut x = MARGIN;
        let mut y = CONTENT_TOP;
        let mut row_height = 0;
        for chip in &mut self.chips {
            let size = chip.size();
            if x > MARGIN && x + size.width as i32 > right {
                x = MARGIN;
                y += row_height + 8;
                row_height = 0;
            }
            chip.set_origin(Point::new(x, y));
            x += size.width as i32 + 8;
            row_height = row_height.max(size.height as i32);
        }
    }

    fn open(&mut self, index: usize, screen: Rectangle) {
        match self.menus[index].present(screen) {
            Ok(bounds) => {
                info!("Menu {} presented at {:?}", index, bounds);
                self.open_menu = Some(index);
            }
            Err(e) => log::error!("Menu could not be presented: {}", e),
        }
    }

    fn is_dirty(&self) -> bool {
        self.chips.iter().any(|c| c.is_dirty())
            || self.buttons.iter().any(|b| b.is_dirty())
            || self.fields.iter().any(|f| f.is_dirty())
            || self.controls.iter().any(|c| c.is_dirty())
            || self.open_menu.is_some_and(|i| self.menus[i].is_dirty())
    }

    fn mark_clean(&mut self) {
        self.chips.iter_mut().for_each(|c| c.mark_clean());
        self.badges.iter_mut().for_each(|b| b.mark_clean());
        self.buttons.iter_mut().for_each(|b| b.mark_clean());
        self.tags.iter_mut().for_each(|t| t.mark_clean());
        self.fields.iter_mut().for_each(|f| f.mark_clean());
        self.controls.iter_mut().for_each(|c| c.mark_clean());
        self.menus.iter_mut().for_each(|m| m.mark_clean());
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        if let Some(index) = self.open_menu {
            let action = match self.menus[index].handle_touch(event) {
                TouchResult::Action(action) => action,
                TouchResult::Handled | TouchResult::NotHandled => return None,
            };
            if matches!(
                action,
                Action::Dismissed(_) | Action::FooterAction(_) | Action::ItemSelected { .. }
            ) {
                self.open_menu = None;
            }
            return Some(action);
        }

        let action = match self.page {
            CatalogPage::Chips => touch_all(&mut self.chips, event),
            CatalogPage::Buttons => touch_all(&mut self.buttons, event),
            CatalogPage::Fields => touch_all(&mut self.fields, event),
            CatalogPage::Controls => touch_all(&mut self.controls, event),
        };

        // Radios form one exclusive group
        if let Some(Action::Toggled { id, selected: true }) = action {
            if self.controls.iter().any(|c| c.id() == id && is_radio(c)) {
                for control in &mut self.controls {
                    if is_radio(control) && control.id() != id {
                        control.set_selected(false);
                    }
                }
            }
        }
        action
    }

    fn release(&mut self) {
        self.buttons.iter_mut().for_each(Button::release);
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        theme: &Theme,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(theme.color(ColorName::Background))?;
        draw_label(
            self.page.title(),
            Rectangle::new(Point::new(MARGIN, 0), Size::new(DISPLAY_WIDTH_PX, CONTENT_TOP as u32)),
            TextSize::Large,
            theme.color(ColorName::OnSurface),
            TextAlignment::Left,
            display,
        )?;

        match self.page {
            CatalogPage::Chips => {
                self.flow_chips();
                for chip in &self.chips {
                    chip.draw(theme, display)?;
                    paint_icons(&chip.icon_slots(theme), display)?;
                }
                for badge in &self.badges {
                    badge.draw(theme, display)?;
                }
            }
            CatalogPage::Buttons => {
                for button in &self.buttons {
                    button.draw(theme, display)?;
                    paint_icons(&button.icon_slots(theme), display)?;
                }
                for tag in &self.tags {
                    tag.draw(theme, display)?;
                    paint_icons(&tag.icon_slots(theme), display)?;
                }
            }
            CatalogPage::Fields => {
                for field in &self.fields {
                    field.draw(theme, display)?;
                    paint_icons(&field.icon_slots(theme), display)?;
                }
            }
            CatalogPage::Controls => {
                for control in &self.controls {
                    control.draw(theme, display)?;
                }
            }
        }

        if let Some(index) = self.open_menu {
            let scrim = blend(
                theme.color(ColorName::Scrim),
                theme.color(ColorName::Background),
                60,
            );
            display.clear(scrim)?;
            let menu = &self.menus[index];
            menu.draw(theme, display)?;
            paint_icons(&menu.icon_slots(theme), display)?;
        }

        Ok(())
    }
}

fn is_radio(control: &SelectionControl) -> bool {
    control.style().kind == ControlKind::Radio
}

/// Deliver `event` to every component and return the first action.
///
/// All components see the event so fields can blur on outside presses.
fn touch_all<T: Touchable>(items: &mut [T], event: TouchEvent) -> Option<Action> {
    let mut first = None;
    for item in items {
        if let TouchResult::Action(action) = item.handle_touch(event) {
            first = first.or(Some(action));
        }
    }
    first
}

/// Stand-in for host icon painting: a ring in the slot's tint.
fn paint_icons<D: DrawTarget<Color = Rgb565>>(
    slots: &[IconSlot],
    display: &mut D,
) -> Result<(), D::Error> {
    for slot in slots {
        let diameter = slot.area.size.width.saturating_sub(4).max(2);
        Circle::with_center(slot.area.center(), diameter)
            .into_styled(PrimitiveStyle::with_stroke(slot.color, 2))
            .draw(display)?;
    }
    Ok(())
}

fn screen_bounds() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX))
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    let args = Args::parse();

    let builtin = if args.dark { Theme::dark() } else { Theme::light() };
    let configured = args
        .theme
        .as_deref()
        .and_then(load_theme)
        .unwrap_or(builtin);
    // T alternates between the configured theme and the opposite built-in
    let alternate = if args.dark { Theme::light() } else { Theme::dark() };
    let mut showing_alternate = false;
    THEME.set(configured);

    info!("Starting swatch simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, args.scale
    );
    info!("Keys: 1=Chips  2=Buttons  3=Fields  4=Controls  T=Theme  M=Sheet  N=Popup  Q=Quit");

    let mut catalog = match Catalog::build() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Catalog could not be built: {}", e);
            return;
        }
    };

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("Swatch Catalog", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = catalog.draw(&THEME.get(), &mut display);
    catalog.mark_clean();
    window.update(&display);

    let mut needs_redraw = false;
    let mut mouse_down = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if keycode == Keycode::T {
                        showing_alternate = !showing_alternate;
                        THEME.set(if showing_alternate { alternate } else { configured });
                        needs_redraw = true;
                    } else if keycode == Keycode::M {
                        catalog.open(0, screen_bounds());
                        needs_redraw = true;
                    } else if keycode == Keycode::N {
                        catalog.open(1, screen_bounds());
                        needs_redraw = true;
                    } else if let Some(page) = keycode_to_page(keycode) {
                        info!("Showing {:?}", page);
                        catalog.page = page;
                        catalog.open_menu = None;
                        needs_redraw = true;
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    let press = TouchEvent::Press(touch_point(point));
                    if let Some(action) = catalog.handle_touch(press) {
                        info!("Touch → action {:?}", action);
                    }
                    needs_redraw = true;
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    catalog.handle_touch(TouchEvent::Drag(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { .. } => {
                    mouse_down = false;
                    catalog.release();
                }

                _ => {}
            }
        }

        if needs_redraw || catalog.is_dirty() {
            if let Err(e) = catalog.draw(&THEME.get(), &mut display) {
                log::error!("Draw error: {:?}", e);
            }
            catalog.mark_clean();
            needs_redraw = false;
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
