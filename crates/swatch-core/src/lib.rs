//! Platform-independent core of the swatch design system
//!
//! This crate holds everything a renderer needs to draw the component
//! catalog: design tokens, the semantic color table and theme provider, the
//! style resolvers that turn each component's style axes into concrete
//! geometry and colors, drawable components and layout containers, and the
//! two-phase sizing coordinator used by menus and other overlays.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on embedded
//! targets as well as on desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod error;
pub mod ui;

pub use error::{CatalogError, ThemeError};
