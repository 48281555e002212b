//! Accessibility identifiers for automated UI testing
//!
//! Each component exposes a stable string per sub-element. The strings are
//! part of the catalog's public contract and must not change.

use embedded_graphics::primitives::Rectangle;

pub mod chip {
    pub const CONTAINER: &str = "chip";
    pub const TITLE: &str = "chip.title";
    pub const LEADING_ICON: &str = "chip.leadingIcon";
    pub const TRAILING_ICON: &str = "chip.trailingIcon";
    pub const BADGE: &str = "chip.badge";
}

pub mod button {
    pub const CONTAINER: &str = "button";
    pub const TITLE: &str = "button.title";
    pub const ICON: &str = "button.icon";
}

pub mod badge {
    pub const CONTAINER: &str = "badge";
    pub const COUNT: &str = "badge.count";
}

pub mod tag {
    pub const CONTAINER: &str = "tag";
    pub const TITLE: &str = "tag.title";
    pub const ICON: &str = "tag.icon";
}

pub mod input_field {
    pub const CONTAINER: &str = "inputField";
    pub const TEXT: &str = "inputField.text";
    pub const PLACEHOLDER: &str = "inputField.placeholder";
    pub const LEADING_ICON: &str = "inputField.leadingIcon";
    pub const TRAILING_ACTION: &str = "inputField.trailingAction";
    pub const HELPER: &str = "inputField.helper";
}

pub mod radio {
    pub const CONTAINER: &str = "radio";
    pub const CONTROL: &str = "radio.control";
    pub const LABEL: &str = "radio.label";
}

pub mod checkbox {
    pub const CONTAINER: &str = "checkbox";
    pub const CONTROL: &str = "checkbox.control";
    pub const LABEL: &str = "checkbox.label";
}

pub mod menu {
    pub const CONTAINER: &str = "menu";
    pub const HEADER: &str = "menu.header";
    pub const CONTENT: &str = "menu.content";
    pub const FOOTER: &str = "menu.footer";
    /// Rows are `menu.item.<index>`
    pub const ITEM_PREFIX: &str = "menu.item";
}

/// Longest identifier, including indexed ones
pub const MAX_ID_LEN: usize = 32;

pub type AccessibilityId = heapless::String<MAX_ID_LEN>;

/// `<prefix>.<index>`, e.g. `menu.item.3`
pub fn indexed(prefix: &str, index: usize) -> AccessibilityId {
    use core::fmt::Write;

    let mut id = AccessibilityId::new();
    // Prefixes are short constants; a 32-byte id always fits them
    let _ = write!(id, "{}.{}", prefix, index);
    id
}

/// One identified sub-element and where it is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityElement {
    pub id: AccessibilityId,
    pub bounds: Rectangle,
}

impl AccessibilityElement {
    pub fn new(id: &str, bounds: Rectangle) -> Self {
        Self {
            id: crate::error::truncated(id),
            bounds,
        }
    }
}

pub const MAX_ELEMENTS: usize = 24;

pub type AccessibilityElements = heapless::Vec<AccessibilityElement, MAX_ELEMENTS>;

/// Components that describe their sub-elements for UI automation
pub trait Accessible {
    fn accessibility_elements(&self) -> AccessibilityElements;
}

/// Push an element, ignoring overflow past [`MAX_ELEMENTS`].
pub(crate) fn push(elements: &mut AccessibilityElements, id: &str, bounds: Rectangle) {
    if elements.push(AccessibilityElement::new(id, bounds)).is_err() {
        log::warn!("accessibility element {} dropped: list full", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_ids() {
        assert_eq!(indexed(menu::ITEM_PREFIX, 0).as_str(), "menu.item.0");
        assert_eq!(indexed(menu::ITEM_PREFIX, 15).as_str(), "menu.item.15");
    }

    #[test]
    fn test_identifiers_are_verbatim() {
        assert_eq!(chip::BADGE, "chip.badge");
        assert_eq!(input_field::TRAILING_ACTION, "inputField.trailingAction");
        assert_eq!(checkbox::CONTROL, "checkbox.control");
    }
}
