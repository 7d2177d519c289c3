//! Async ST7789 display driver for embassy-rp.
//!
//! The UI draws into one RGB565 framebuffer (153,600 bytes for 320x240) and
//! the main loop pushes it to the panel with a single DMA transfer whenever a
//! screen presents a frame.
//!
//! - [`Framebuffer`]: implements `DrawTarget` over the byte buffer
//! - [`St7789`]: owns the SPI peripheral and control pins

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Display dimensions (landscape mode after 90° rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40;
const MADCTL_MV: u8 = 0x20;

/// Panel connection: SPI plus data/command and chip-select lines.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Reset the controller and configure RGB565 landscape output.
    pub async fn init(&mut self) {
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        self.write_command(SLPOUT).await;
        Timer::after_millis(10).await;

        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // MV=1 (row/col exchange), MX=1 (mirror X)
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MV | MADCTL_MX]).await;

        // PIM715 panels need inversion on
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        // Every flush writes the full screen, so the window is set once
        self.set_window(WIDTH as u16, HEIGHT as u16).await;
    }

    /// Send a whole framebuffer to the panel.
    pub async fn flush(
        &mut self,
        buffer: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }

    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    async fn set_window(
        &mut self,
        w: u16,
        h: u16,
    ) {
        let [x1_hi, x1_lo] = (w - 1).to_be_bytes();
        let [y1_hi, y1_lo] = (h - 1).to_be_bytes();

        self.write_command(CASET).await;
        self.write_data(&[0, 0, x1_hi, x1_lo]).await;

        self.write_command(RASET).await;
        self.write_data(&[0, 0, y1_hi, y1_lo]).await;
    }
}

/// Big-endian RGB565 framebuffer in panel byte order.
pub struct Framebuffer<'a> {
    bytes: &'a mut [u8; BUFFER_SIZE],
}

impl<'a> Framebuffer<'a> {
    pub fn new(bytes: &'a mut [u8; BUFFER_SIZE]) -> Self { Self { bytes } }

    /// Raw bytes ready for [`St7789::flush`].
    pub fn as_bytes(&self) -> &[u8] { self.bytes.as_slice() }

    fn pixel_bytes(color: Rgb565) -> [u8; 2] {
        let raw: RawU16 = color.into();
        raw.into_inner().to_be_bytes()
    }

    fn fill_row(
        &mut self,
        y: u32,
        x: u32,
        width: u32,
        pixel: [u8; 2],
    ) {
        let start = (y as usize * WIDTH + x as usize) * 2;
        let end = start + width as usize * 2;
        for chunk in self.bytes[start..end].chunks_exact_mut(2) {
            chunk.copy_from_slice(&pixel);
        }
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                let idx = (point.y as usize * WIDTH + point.x as usize) * 2;
                self.bytes[idx..idx + 2].copy_from_slice(&Self::pixel_bytes(color));
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return Ok(());
        }
        let pixel = Self::pixel_bytes(color);
        let x = area.top_left.x as u32;
        for y in area.rows() {
            self.fill_row(y as u32, x, area.size.width, pixel);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let pixel = Self::pixel_bytes(color);
        for chunk in self.bytes.chunks_exact_mut(2) {
            chunk.copy_from_slice(&pixel);
        }
        Ok(())
    }
}
