//! Drawing surface used by every screen.
//!
//! Screens draw through the object-safe [`Surface`] trait with a single
//! current pen, so they never depend on a concrete display type. [`Canvas`]
//! adapts any `embedded-graphics` [`DrawTarget`] (the ST7789 framebuffer on
//! the device, `SimulatorDisplay` on the desktop, `MockDisplay` in tests).
//!
//! # Text Scale
//!
//! `scale` picks a bitmap font whose line height is roughly `scale * UNIT`
//! pixels, see [`font_for_scale`].

use embedded_graphics::{
    mono_font::{
        MonoFont,
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13},
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::BLACK;

/// Drawing operations a screen may issue. Coordinates are pixels with the
/// origin at the top-left corner; shapes may extend past the edges.
pub trait Surface {
    /// Surface size as `(width, height)`.
    fn bounds(&self) -> (u32, u32);

    /// Set the color used by all following drawing calls.
    fn set_pen(
        &mut self,
        color: Rgb565,
    );

    /// Fill the whole surface with the pen color.
    fn clear(&mut self);

    /// Fill a rectangle with its top-left corner at `(x, y)`.
    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    );

    /// Draw a one pixel wide line between two points.
    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    );

    /// Fill a circle centered at `(cx, cy)`.
    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
    );

    /// Draw text with its top-left corner at `(x, y)`.
    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: u8,
    );

    /// Width in pixels `text` would occupy at `scale`.
    fn measure_text(
        &self,
        text: &str,
        scale: u8,
    ) -> u32;

    /// Present the frame drawn so far.
    fn update(&mut self);
}

/// Font used for a given text scale.
pub fn font_for_scale(scale: u8) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_7X13,
        3 => &PROFONT_18_POINT,
        _ => &PROFONT_24_POINT,
    }
}

/// Width of `text` rendered in `font`, including inter-character spacing.
pub fn text_width(
    font: &MonoFont<'_>,
    text: &str,
) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// [`Surface`] over an `embedded-graphics` draw target.
///
/// Drawing errors are ignored: the framebuffer and simulator targets are
/// infallible, and a failed primitive must not abort a screen's render.
pub struct Canvas<D> {
    target: D,
    pen: Rgb565,
    frame_ready: bool,
}

impl<D> Canvas<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap a draw target. The pen starts black.
    pub const fn new(target: D) -> Self {
        Self {
            target,
            pen: BLACK,
            frame_ready: false,
        }
    }

    /// The wrapped draw target.
    pub const fn target(&self) -> &D { &self.target }

    /// Mutable access to the wrapped draw target.
    pub fn target_mut(&mut self) -> &mut D { &mut self.target }

    /// Consume the canvas and return the draw target.
    pub fn into_inner(self) -> D { self.target }

    /// Returns true once after each [`Surface::update`] call.
    ///
    /// The main loop uses this to decide when to flush the framebuffer.
    pub fn take_frame_ready(&mut self) -> bool { core::mem::take(&mut self.frame_ready) }

    fn fill(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_fill(self.pen) }
}

impl<D> Surface for Canvas<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn bounds(&self) -> (u32, u32) {
        let size = self.target.size();
        (size.width, size.height)
    }

    fn set_pen(
        &mut self,
        color: Rgb565,
    ) {
        self.pen = color;
    }

    fn clear(&mut self) { self.target.clear(self.pen).ok(); }

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) {
        if width == 0 || height == 0 {
            return;
        }
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(self.fill())
            .draw(&mut self.target)
            .ok();
    }

    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_stroke(self.pen, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
    ) {
        Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(self.fill())
            .draw(&mut self.target)
            .ok();
    }

    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: u8,
    ) {
        let style = MonoTextStyle::new(font_for_scale(scale), self.pen);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .ok();
    }

    fn measure_text(
        &self,
        text: &str,
        scale: u8,
    ) -> u32 {
        text_width(font_for_scale(scale), text)
    }

    fn update(&mut self) { self.frame_ready = true; }
}
