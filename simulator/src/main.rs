//! Screen UI simulator for desktop platforms.
//!
//! Runs the same screens as the firmware in an embedded-graphics-simulator
//! window. Keys A, B, X and Y stand in for the display pack buttons, N cycles
//! the simulated network state and Escape quits. The FILES screen browses the
//! directory given as the first argument (default: the working directory).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host_fs;
mod host_services;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use pico_screen_ui::app::{AppTicks, Environment, SCREEN_COUNT, Screens};
use pico_screen_ui::config::timing::MAX_TIMERS;
use pico_screen_ui::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pico_screen_ui::host::ScreenHost;
use pico_screen_ui::input::{Button, ButtonState};
use pico_screen_ui::surface::Canvas;
use pico_screen_ui::timers::AlarmTable;

use crate::host_fs::HostFs;
use crate::host_services::{SimLink, SimNetwork, SystemClock};

static TICKS: AppTicks = AppTicks::new();

/// Loop period; also the resolution of the simulated alarms.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

fn button_for(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::A => Some(Button::A),
        Keycode::B => Some(Button::B),
        Keycode::X => Some(Button::X),
        Keycode::Y => Some(Button::Y),
        _ => None,
    }
}

fn main() {
    let root = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Pico Screen UI", &output_settings);
    let mut canvas = Canvas::new(display);

    let mut env = Environment::new(
        AlarmTable::<MAX_TIMERS>::new(),
        SystemClock::new(),
        SimNetwork {
            link: SimLink::Connected,
        },
        HostFs::new(root),
    );
    let seed = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_nanos() as u64);
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, seed);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    if let Err(err) = screens.register_all(&mut host) {
        eprintln!("screen registry: {err}");
        return;
    }
    if let Err(err) = host.start(&mut env.context(&mut canvas)) {
        eprintln!("start: {err}");
        return;
    }
    canvas.take_frame_ready();
    window.update(canvas.target());

    let start = Instant::now();
    let mut held = [false; 4];
    let mut button_states = [ButtonState::new(); 4];

    loop {
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } if keycode == Keycode::Escape => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } if keycode == Keycode::N && !repeat => {
                    env.network.link = env.network.link.next();
                    println!("network: {:?}", env.network.link);
                }
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        held[button.index()] = true;
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        held[button.index()] = false;
                    }
                }
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        env.timers.service(now_ms);

        for button in Button::ALL {
            if button_states[button.index()].just_pressed(held[button.index()], now_ms)
                && let Err(err) = host.dispatch_button(button, &mut env.context(&mut canvas))
            {
                eprintln!("{}: {err}", button.label());
            }
        }
        host.tick(&mut env.context(&mut canvas));

        if canvas.take_frame_ready() {
            window.update(canvas.target());
        }
        while let Some(entry) = env.log.pop_oldest() {
            println!("{entry}");
        }

        thread::sleep(POLL_INTERVAL);
    }
}
