//! Application configuration.
//!
//! - `layout`: Display dimensions and list/label geometry
//! - `timing`: Debounce window and timer periods
//! - `game`: Pong paddle, ball and serve constants
//! - `board`: GPIO assignments for the Pimoroni display pack

pub mod board;
pub mod game;
pub mod layout;
pub mod timing;

// Re-export the constants most screens need at config level for convenience
pub use layout::{
    CENTER_X,
    CENTER_Y,
    FONT_SCALE,
    ITEM_HEIGHT,
    ITEM_WIDTH,
    LABEL_HEIGHT,
    LABEL_SCALE,
    LIST_ITEMS_ON_SCREEN,
    LIST_SCROLL_THRESHOLD,
    PADDING,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    UNIT,
};
pub use timing::{CLOCK_REFRESH_MS, DEBOUNCE_MS, GAME_TICK_MS, NETWORK_REFRESH_MS, RELEASE_SETTLE_MS};
