//! Pin assignments for the Pimoroni Pico Display Pack 2.8" (PIM715).
//!
//! Kept as plain numbers so the host-side library can document and test the
//! wiring without depending on the HAL. The firmware binary takes the matching
//! `embassy_rp` peripherals.

use crate::input::Button;

/// Button A (top-left), active-low.
pub const BUTTON_A_PIN: u8 = 12;

/// Button B (bottom-left), active-low.
pub const BUTTON_B_PIN: u8 = 13;

/// Button X (top-right), active-low.
pub const BUTTON_X_PIN: u8 = 14;

/// Button Y (bottom-right), active-low.
pub const BUTTON_Y_PIN: u8 = 15;

/// GPIO wired to `button`.
pub const fn button_pin(button: Button) -> u8 {
    match button {
        Button::A => BUTTON_A_PIN,
        Button::B => BUTTON_B_PIN,
        Button::X => BUTTON_X_PIN,
        Button::Y => BUTTON_Y_PIN,
    }
}

/// Display data/command select.
pub const DISPLAY_DC_PIN: u8 = 16;

/// Display chip select.
pub const DISPLAY_CS_PIN: u8 = 17;

/// SPI0 clock.
pub const DISPLAY_CLK_PIN: u8 = 18;

/// SPI0 MOSI.
pub const DISPLAY_MOSI_PIN: u8 = 19;

/// Display backlight enable.
pub const DISPLAY_BL_PIN: u8 = 20;

/// SPI clock for the ST7789 (62.5 MHz, the controller's rated maximum).
pub const DISPLAY_SPI_HZ: u32 = 62_500_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_take_consecutive_pins_in_poll_order() {
        // The firmware builds its inputs from PIN_12..PIN_15 in Button::ALL order
        let pins: std::vec::Vec<u8> = Button::ALL.iter().map(|&b| button_pin(b)).collect();
        assert_eq!(pins, [12, 13, 14, 15]);
        for button in Button::ALL {
            assert_eq!(usize::from(button_pin(button) - BUTTON_A_PIN), button.index());
        }
    }

    #[test]
    fn test_display_pins_follow_buttons() {
        assert_eq!(
            [DISPLAY_DC_PIN, DISPLAY_CS_PIN, DISPLAY_CLK_PIN, DISPLAY_MOSI_PIN, DISPLAY_BL_PIN],
            [16, 17, 18, 19, 20]
        );
    }
}
