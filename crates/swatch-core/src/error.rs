//! Error types for the fallible edges of the component catalog
//!
//! Style resolution itself never fails. Errors only arise when building a
//! theme from external configuration or when filling a fixed-capacity
//! component beyond its limits.

use thiserror_no_std::Error;

/// Errors produced while building a [`Theme`](crate::ui::styling::Theme)
/// from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown color name: {0}")]
    UnknownColor(heapless::String<32>),
    #[error("Invalid hex color: {0}")]
    InvalidHex(heapless::String<16>),
}

/// Errors produced while assembling components.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Label exceeds capacity of {0} bytes")]
    LabelTooLong(usize),
    #[error("Container full")]
    ContainerFull,
    #[error("Menu full")]
    MenuFull,
    #[error("Overlay committed before it was measured")]
    NotMeasured,
}

/// Copy `value` into a fixed-capacity string, failing instead of truncating.
pub(crate) fn bounded<const N: usize>(value: &str) -> Result<heapless::String<N>, CatalogError> {
    let mut out = heapless::String::new();
    out.push_str(value)
        .map_err(|_| CatalogError::LabelTooLong(N))?;
    Ok(out)
}

/// Copy as much of `value` as fits, cutting on a char boundary.
pub(crate) fn truncated<const N: usize>(value: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
