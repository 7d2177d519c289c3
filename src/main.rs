//! Four-button screen UI firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Runs the HOME / FILES / SETTINGS / NETWORK / CLOCK / COLORS / PONG screens
//! on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! - Main task: polls buttons, lets the active screen consume timer ticks,
//!   flushes the framebuffer when a screen presented a frame, and drains the
//!   UI log ring to defmt
//! - Alarm task: raises the periodic tick flags screens schedule
//!
//! On the host this binary is a stub; use `pico-screen-simulator` instead.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(target_arch = "arm")]
mod board;
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod st7789;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("pico2 targets thumbv8m.main-none-eabihf; run pico-screen-simulator on the host");
}

#[cfg(target_arch = "arm")]
use {
    defmt::{Display2Format, info},
    embassy_executor::Spawner,
    embassy_rp::gpio::{Input, Level, Output, Pull},
    embassy_rp::spi::Spi,
    embassy_time::{Instant, Timer},
    pico_screen_ui::app::{AppTicks, Environment, SCREEN_COUNT, Screens},
    pico_screen_ui::config::board::button_pin,
    pico_screen_ui::host::ScreenHost,
    pico_screen_ui::input::{Button, ButtonState},
    pico_screen_ui::log_buffer::{LogBuffer, LogLevel},
    pico_screen_ui::surface::Canvas,
    static_cell::ConstStaticCell,
    {defmt_rtt as _, panic_probe as _},
};

#[cfg(target_arch = "arm")]
use crate::{
    board::{ALARMS, NoRadio, SharedAlarms, UptimeClock, device_files},
    display::display_spi_config,
    st7789::{BUFFER_SIZE, Framebuffer, St7789},
    tasks::alarm_task,
};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-screen-ui"),
    embassy_rp::binary_info::rp_program_description!(c"Four-button screen UI on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
static FRAMEBUFFER: ConstStaticCell<[u8; BUFFER_SIZE]> = ConstStaticCell::new([0; BUFFER_SIZE]);

#[cfg(target_arch = "arm")]
static TICKS: AppTicks = AppTicks::new();

/// Forward UI log entries to defmt, oldest first.
#[cfg(target_arch = "arm")]
fn drain_log(log: &mut LogBuffer) {
    while let Some(entry) = log.pop_oldest() {
        match entry.level {
            LogLevel::Trace => defmt::trace!("{}", Display2Format(&entry)),
            LogLevel::Debug => defmt::debug!("{}", Display2Format(&entry)),
            LogLevel::Info => defmt::info!("{}", Display2Format(&entry)),
            LogLevel::Warn => defmt::warn!("{}", Display2Format(&entry)),
            LogLevel::Error => defmt::error!("{}", Display2Format(&entry)),
        }
    }
}

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Screen UI starting...");
    let p = embassy_rp::init(Default::default());

    // PIM715 pinout, see config::board: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only SPI with DMA, the panel has no MISO
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());
    let mut panel = St7789::new(spi, dc, cs);
    panel.init().await;
    info!("Display initialized");

    let mut canvas = Canvas::new(Framebuffer::new(FRAMEBUFFER.take()));

    // Active-low with internal pull-ups, in Button::ALL order (see button_pin)
    let buttons = [
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ];
    let mut button_states = [ButtonState::new(); 4];
    for button in Button::ALL {
        info!("Button {} on GPIO{}", button.label(), button_pin(button));
    }

    defmt::unwrap!(spawner.spawn(alarm_task(&ALARMS)));

    let mut env = Environment::new(SharedAlarms(&ALARMS), UptimeClock::new(), NoRadio, device_files());
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, Instant::now().as_ticks());
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    if let Err(err) = screens.register_all(&mut host) {
        defmt::panic!("screen registry: {}", Display2Format(&err));
    }
    if let Err(err) = host.start(&mut env.context(&mut canvas)) {
        defmt::panic!("start: {}", Display2Format(&err));
    }

    loop {
        let now_ms = Instant::now().as_millis();

        for ((button, input), state) in Button::ALL.into_iter().zip(&buttons).zip(&mut button_states) {
            if state.just_pressed(input.is_low(), now_ms) {
                let mut ctx = env.context(&mut canvas);
                if let Err(err) = host.dispatch_button(button, &mut ctx) {
                    defmt::warn!("{}: {}", button.label(), Display2Format(&err));
                }
            }
        }

        host.tick(&mut env.context(&mut canvas));

        if canvas.take_frame_ready() {
            panel.flush(canvas.target().as_bytes()).await;
        }
        drain_log(&mut env.log);

        Timer::after_millis(1).await;
    }
}
