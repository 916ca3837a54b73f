//! Layout dimension constants for TUI rendering.
//!
//! Centralized numeric values for the form layout. Row and header heights
//! live in the row model itself; these are the view-only dimensions.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Blank lines inserted after each section's rows.
pub const SECTION_GAP: u16 = 1;

/// Column width reserved for row titles, in cells.
///
/// Keeps controls vertically aligned across rows.
pub const TITLE_COLUMN_WIDTH: usize = 16;

/// Width of the slider track in cells, marker included.
pub const SLIDER_TRACK_WIDTH: usize = 21;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Width percentage for the order confirmation popup.
pub const ORDER_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the order confirmation popup.
pub const ORDER_POPUP_HEIGHT_PERCENT: u16 = 30;
