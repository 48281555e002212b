// src/ui/layouts/mod.rs
//! Layout primitives for arranging component slots and overlays

pub mod container;
pub mod overlay;
pub mod scrollable;

pub use container::{Alignment, Container, Direction, SizeConstraint};
pub use overlay::{
    OverlayFrame, OverlayLayout, OverlayPlan, Presentation, SectionHeights, plan, present,
};
pub use scrollable::{ScrollDirection, ScrollableContainer};
