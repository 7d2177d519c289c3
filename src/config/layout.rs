//! Display and layout configuration constants.
//!
//! All list and label geometry derives from [`UNIT`], the height of one text
//! line at scale 1. Everything is `const` so screens never recompute positions
//! per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate, pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Text Geometry
// =============================================================================

/// Height of a single text line at scale 1.
pub const UNIT: u32 = 6;

/// Text scale used for list rows.
pub const FONT_SCALE: u8 = 2;

/// Padding around list row text and inside the scrollbar track.
pub const PADDING: u32 = UNIT;

// =============================================================================
// List Geometry
// =============================================================================

/// Number of list rows visible at once.
pub const LIST_ITEMS_ON_SCREEN: usize = 10;

/// Rows kept between the cursor and the viewport edge before scrolling.
pub const LIST_SCROLL_THRESHOLD: usize = 2;

/// Height of one list row: scaled text plus padding on both sides.
pub const ITEM_HEIGHT: u32 = UNIT * FONT_SCALE as u32 + 2 * PADDING;

/// Width of one list row. The rest of the screen holds the scrollbar.
pub const ITEM_WIDTH: u32 = SCREEN_WIDTH - 4 * UNIT;

/// Width of the scrollbar column, flush with the right screen edge.
pub const SCROLLBAR_WIDTH: u32 = 3 * UNIT;

/// Inset of the scrollbar track from the screen edges.
pub const SCROLLBAR_PADDING: u32 = PADDING;

// =============================================================================
// Corner Labels
// =============================================================================

/// Text scale of the corner button labels.
pub const LABEL_SCALE: u8 = 2;

/// Height of a corner button label box.
pub const LABEL_HEIGHT: u32 = UNIT * LABEL_SCALE as u32 + 2 * PADDING;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_fills_screen_height() {
        assert_eq!(ITEM_HEIGHT, 24);
        assert_eq!(ITEM_HEIGHT * LIST_ITEMS_ON_SCREEN as u32, SCREEN_HEIGHT);
    }

    #[test]
    fn test_scrollbar_column_width() {
        assert_eq!(ITEM_WIDTH, 296);
        assert_eq!(SCROLLBAR_WIDTH, 18);
        assert_eq!(SCREEN_WIDTH - ITEM_WIDTH - SCROLLBAR_WIDTH, PADDING);
    }
}
