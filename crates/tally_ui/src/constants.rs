//! Centralized constants for tally_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use crate::layout::Padding;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size.
/// Used for text measurement approximation.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Approximate width ratio for full-width (CJK) characters.
pub const WIDE_CHAR_WIDTH_FACTOR: f32 = 1.0;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in a Column
pub const DEFAULT_SPACING: f32 = 8.0;

/// Standard horizontal padding
pub const PADDING_STANDARD: f32 = 8.0;

/// Comfortable padding (buttons)
pub const PADDING_COMFORTABLE: f32 = 16.0;

/// Default padding for buttons
pub const BUTTON_PADDING: Padding = Padding {
    top: PADDING_STANDARD,
    right: PADDING_COMFORTABLE,
    bottom: PADDING_STANDARD,
    left: PADDING_COMFORTABLE,
};
