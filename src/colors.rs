//! Color constants for the screen UI palette.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue. This
//! format is native to the ST7789 and needs no conversion when writing to the
//! display buffer. The standard colors come from the `RgbColor` trait.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure green (0, 63, 0). Default foreground.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Cyan (0, 63, 31).
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Magenta (31, 0, 31).
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;
