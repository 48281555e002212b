// src/ui/mod.rs
//! Swatch UI system
//!
//! - Core traits for drawable, touchable and accessible elements
//! - Style resolvers, semantic colors and the theme provider
//! - Catalog components (chips, buttons, badges, tags, fields, controls, menus)
//! - Layout containers and the overlay sizing coordinator

pub mod accessibility;
pub mod components;
pub mod core;
pub mod layouts;
pub mod styling;

// Re-export commonly used items
pub use accessibility::{AccessibilityElement, AccessibilityElements, Accessible};
pub use components::{Badge, Button, Chip, IconSlot, InputField, Menu, SelectionControl, Tag};
pub use core::{
    Action, ComponentId, DirtyRegion, Drawable, IconHandle, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
pub use layouts::{OverlayLayout, Presentation};
pub use styling::{
    ColorName, ResolvedLayout, StyleResolver, Theme, ThemeConfig, ThemeProvider, resolve,
};
