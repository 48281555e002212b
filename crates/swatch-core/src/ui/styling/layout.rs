//! Design tokens for spacing and dimensions
//!
//! The catalog uses a 4px base unit. Chips and buttons quote their paddings
//! as literals from their size tables; fields, controls, tags and overlays
//! take their gaps and radii from [`SPACING`] and [`RADIUS`].

/// Base unit of the spacing scale, in pixels.
pub const UNIT: u32 = 4;

/// Multiples of [`UNIT`].
pub const fn units(n: u32) -> u32 {
    n * UNIT
}

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing scale for consistent layout
///
/// # Examples
///
/// ```ignore
/// Padding::inline(SPACING.large, SPACING.large)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Small spacing (4px) - between an icon and its label
    pub small: u32,

    /// Medium spacing (8px) - standard gap between elements
    pub medium: u32,

    /// Large spacing (16px) - section insets
    pub large: u32,
}

impl Spacing {
    pub const fn standard() -> Self {
        Self {
            small: units(1),
            medium: units(2),
            large: units(4),
        }
    }
}

/// The spacing scale every component shares
pub const SPACING: Spacing = Spacing::standard();

// ============================================================================
// Border Radius
// ============================================================================

/// Border radius options for rounded corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderRadius {
    /// No rounding (0px) - sharp corners
    pub none: u32,

    /// Medium rounding (8px) - fields
    pub medium: u32,

    /// Large rounding (16px) - sheets and popups
    pub large: u32,
}

impl BorderRadius {
    pub const fn standard() -> Self {
        Self {
            none: 0,
            medium: units(2),
            large: units(4),
        }
    }
}

/// The radius scale every component shares
pub const RADIUS: BorderRadius = BorderRadius::standard();

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// let p = Padding::symmetric(12, 16);
/// let total_width = p.horizontal();  // left + right
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Horizontal-only padding as used by single-row components
    pub const fn inline(leading: u32, trailing: u32) -> Self {
        Self::new(0, trailing, 0, leading)
    }

    /// Returns total horizontal padding (left + right)
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}
