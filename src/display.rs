//! Display configuration for Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping lives in [`pico_screen_ui::config::board`]. Reset is tied to
//! the RUN pin, so the panel resets with the Pico.

use embassy_rp::spi::Config as SpiConfig;
use pico_screen_ui::config::board::DISPLAY_SPI_HZ;

/// SPI configuration for the ST7789 display.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = DISPLAY_SPI_HZ;
    config
}
