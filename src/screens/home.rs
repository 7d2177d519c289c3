//! Home screen: digital or analog clock with navigation hints.

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{CENTER_X, CENTER_Y, CLOCK_REFRESH_MS};
use crate::input::Button;
use crate::screen::{self, Action, ClockFace, Context, Screen};
use crate::services::{InfoText, WallTime, truncated};
use crate::timers::{TickFlag, TimerHandle};
use crate::ui_warn;

use super::{FILES, HOME, NETWORK, PONG, SETTINGS};

/// Text scale of the digital clock.
const DIGITAL_SCALE: u8 = 8;

/// Approximate glyph height of the digital clock, used for vertical centering.
const DIGITAL_HEIGHT: i32 = 6 * DIGITAL_SCALE as i32;

/// Analog dial radius.
const DIAL_RADIUS: i32 = 100;

/// Tick marks are drawn as diameters, then the middle is masked out.
const TICK_LENGTH: i32 = 10;

const SECOND_HAND: f32 = 80.0;
const MINUTE_HAND: f32 = 70.0;
const HOUR_HAND: f32 = 50.0;

/// X label when no address is available.
const NO_WIFI: &str = "no wifi";

pub struct HomeScreen {
    refresh: &'static TickFlag,
    timer: Option<TimerHandle>,
}

impl HomeScreen {
    /// `refresh` is raised by the one-second clock timer.
    pub const fn new(refresh: &'static TickFlag) -> Self {
        Self {
            refresh,
            timer: None,
        }
    }

    fn draw_digital(
        ctx: &mut Context<'_>,
        now: WallTime,
    ) {
        let mut text: heapless::String<8> = heapless::String::new();
        core::fmt::write(&mut text, format_args!("{now}")).ok();
        let width = ctx.surface.measure_text(&text, DIGITAL_SCALE) as i32;
        let (screen_width, screen_height) = ctx.surface.bounds();
        ctx.surface.set_pen(ctx.palette.primary());
        ctx.surface.text(
            &text,
            (screen_width as i32 - width) / 2,
            (screen_height as i32 - DIGITAL_HEIGHT) / 2,
            DIGITAL_SCALE,
        );
    }

    fn draw_analog(
        ctx: &mut Context<'_>,
        now: WallTime,
    ) {
        let (cx, cy, r) = (CENTER_X, CENTER_Y, DIAL_RADIUS);
        let primary = ctx.palette.primary();
        let secondary = ctx.palette.secondary();

        // Rim
        ctx.surface.set_pen(primary);
        ctx.surface.circle(cx, cy, r as u32);
        ctx.surface.set_pen(secondary);
        ctx.surface.circle(cx, cy, (r - 2) as u32);

        // Hour ticks: six diameters at 30 degree steps, inner part masked
        ctx.surface.set_pen(primary);
        for step in 0..6 {
            let (dx, dy) = polar(r as f32, step as f32 * 30.0);
            ctx.surface.line(cx + dx, cy + dy, cx - dx, cy - dy);
        }
        ctx.surface.set_pen(secondary);
        ctx.surface.circle(cx, cy, (r - TICK_LENGTH) as u32);

        let seconds = f32::from(now.seconds);
        let minutes = f32::from(now.minutes) + seconds / 60.0;
        let hours = f32::from(now.hours) + f32::from(now.minutes) / 60.0;

        ctx.surface.set_pen(primary);
        for (length, degrees) in [
            (SECOND_HAND, seconds * 6.0),
            (MINUTE_HAND, minutes * 6.0),
            (HOUR_HAND, hours * 30.0),
        ] {
            let (dx, dy) = polar(length, degrees);
            ctx.surface.line(cx, cy, cx + dx, cy + dy);
        }
    }

    /// Address for the X label, or a placeholder when offline.
    fn address(ctx: &Context<'_>) -> InfoText {
        match ctx.network.info() {
            Ok(info) if info.is_connected() => info.ip,
            _ => truncated(NO_WIFI),
        }
    }
}

/// Offset of a hand of `length` pointing at `degrees` clockwise from 12.
fn polar(
    length: f32,
    degrees: f32,
) -> (i32, i32) {
    let radians = (degrees - 90.0).to_radians();
    ((length * radians.cos()) as i32, (length * radians.sin()) as i32)
}

impl Screen for HomeScreen {
    fn name(&self) -> &'static str { HOME }

    fn init(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.refresh.clear();
        self.render(ctx);
        match ctx.timers.schedule(CLOCK_REFRESH_MS, self.refresh) {
            Ok(handle) => self.timer = Some(handle),
            Err(err) => ui_warn!(ctx, "{}: clock timer: {}", HOME, err),
        }
    }

    fn deinit(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if let Some(handle) = self.timer.take() {
            ctx.timers.cancel(handle);
        }
    }

    fn update(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if self.refresh.take() {
            self.render(ctx);
        }
    }

    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        screen::clear(ctx);
        let now = ctx.clock.now();
        match ctx.prefs.clock_face {
            ClockFace::Digital => Self::draw_digital(ctx, now),
            ClockFace::Analog => Self::draw_analog(ctx, now),
        }
        let address = Self::address(ctx);
        screen::draw_button_labels(
            ctx,
            [Some("FILES"), Some("SETTINGS"), Some(address.as_str()), Some("GAME")],
        );
        ctx.surface.update();
    }

    fn on_button(
        &mut self,
        button: Button,
        _ctx: &mut Context<'_>,
    ) -> Action {
        match button {
            Button::A => Action::goto(FILES),
            Button::B => Action::goto(SETTINGS),
            Button::X => Action::goto(NETWORK),
            Button::Y => Action::goto(PONG),
        }
    }
}
