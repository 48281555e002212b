// src/ui/components/mod.rs
//! Catalog components

pub mod badge;
pub mod button;
pub mod chip;
pub mod glyph;
pub mod input_field;
pub mod menu;
pub mod selection_control;
pub mod tag;
pub mod text;

pub use badge::{Badge, BadgeKind, BadgeStyle};
pub use button::{Button, ButtonSize, ButtonState, ButtonStyle, ButtonVariant, IconPlacement};
pub use chip::{Chip, ChipSize, ChipStyle, ChipVariant, FilterStyle};
pub use glyph::{Glyph, IconSlot, IconSlots};
pub use input_field::{InputField, InputFieldStyle, InputSize, InputState, TrailingAction};
pub use menu::{Menu, MenuItem, MenuRowStyle, MenuStyle};
pub use selection_control::{CheckState, ControlKind, SelectionControl, SelectionControlStyle};
pub use tag::{Tag, TagSize, TagStyle, TagTone};
