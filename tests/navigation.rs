//! Drives the fully wired application through the public API.

use embedded_graphics::pixelcolor::Rgb565;
use pico_screen_ui::app::{AppTicks, Environment, SCREEN_COUNT, Screens};
use pico_screen_ui::colors::{BLACK, YELLOW};
use pico_screen_ui::config::timing::MAX_TIMERS;
use pico_screen_ui::error::UiError;
use pico_screen_ui::host::{Lifecycle, ScreenHost};
use pico_screen_ui::input::Button;
use pico_screen_ui::screen::{ClockFace, Target};
use pico_screen_ui::services::{Clock, LinkState, NetError, NetworkInfo, NetworkStatus, StaticFs, StaticNode, WallTime};
use pico_screen_ui::surface::Surface;
use pico_screen_ui::timers::AlarmTable;

/// Keeps the text of the current frame and counts presented frames.
#[derive(Default)]
struct TextSurface {
    texts: Vec<String>,
    frames: usize,
}

impl Surface for TextSurface {
    fn bounds(&self) -> (u32, u32) { (320, 240) }

    fn set_pen(
        &mut self,
        _color: Rgb565,
    ) {
    }

    fn clear(&mut self) { self.texts.clear(); }

    fn rectangle(
        &mut self,
        _x: i32,
        _y: i32,
        _width: u32,
        _height: u32,
    ) {
    }

    fn line(
        &mut self,
        _x1: i32,
        _y1: i32,
        _x2: i32,
        _y2: i32,
    ) {
    }

    fn circle(
        &mut self,
        _cx: i32,
        _cy: i32,
        _radius: u32,
    ) {
    }

    fn text(
        &mut self,
        text: &str,
        _x: i32,
        _y: i32,
        _scale: u8,
    ) {
        self.texts.push(text.to_owned());
    }

    fn measure_text(
        &self,
        text: &str,
        scale: u8,
    ) -> u32 {
        text.len() as u32 * 6 * u32::from(scale.max(1))
    }

    fn update(&mut self) { self.frames += 1; }
}

struct Noon;

impl Clock for Noon {
    fn now(&self) -> WallTime { WallTime::from_day_seconds(12 * 3600) }

    fn uptime_ms(&self) -> u32 { 0 }
}

struct Offline;

impl NetworkStatus for Offline {
    fn info(&self) -> Result<NetworkInfo, NetError> { Ok(NetworkInfo::placeholder(LinkState::NotConnected)) }
}

static DOCS: [StaticNode; 1] = [StaticNode::file("readme.md")];
static ROOT: [StaticNode; 2] = [StaticNode::folder("docs", &DOCS), StaticNode::file("main.py")];

type TestEnv = Environment<AlarmTable<MAX_TIMERS>, Noon, Offline, StaticFs>;

fn environment() -> TestEnv { Environment::new(AlarmTable::new(), Noon, Offline, StaticFs::new(&ROOT)) }

fn press(
    host: &mut ScreenHost<'_, SCREEN_COUNT>,
    env: &mut TestEnv,
    surface: &mut TextSurface,
    buttons: &[Button],
) {
    for &button in buttons {
        host.dispatch_button(button, &mut env.context(surface)).unwrap();
    }
}

#[test]
fn test_starts_on_home() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    assert_eq!(host.active_name(), Some("HOME"));
    assert_eq!(host.lifecycle("HOME"), Some(Lifecycle::Active));
    assert_eq!(surface.texts, ["12:00:00", "FILES", "SETTINGS", "no wifi", "GAME"]);
    assert_eq!(env.timers.active(), 1);
}

#[test]
fn test_color_selection_changes_palette() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    press(&mut host, &mut env, &mut surface, &[Button::B, Button::B, Button::Y]);
    assert_eq!(host.active_name(), Some("COLORS"));

    // BLACK, WHITE, RED, YELLOW
    press(&mut host, &mut env, &mut surface, &[Button::B, Button::B, Button::B, Button::Y]);
    assert_eq!(env.palette.primary(), YELLOW);
    assert_eq!(env.palette.secondary(), BLACK);
    assert!(surface.texts.iter().any(|text| text == "YELLOW"));

    press(&mut host, &mut env, &mut surface, &[Button::X, Button::X]);
    assert_eq!(host.active_name(), Some("HOME"));
}

#[test]
fn test_clock_face_selection_reaches_home() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    press(&mut host, &mut env, &mut surface, &[Button::B, Button::Y]);
    assert_eq!(host.active_name(), Some("CLOCK"));
    press(&mut host, &mut env, &mut surface, &[Button::B, Button::Y]);
    assert_eq!(env.prefs.clock_face, ClockFace::Analog);

    press(&mut host, &mut env, &mut surface, &[Button::X, Button::X]);
    assert_eq!(host.active_name(), Some("HOME"));
    assert!(!surface.texts.iter().any(|text| text == "12:00:00"));
}

#[test]
fn test_pong_timer_cancelled_on_exit() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    press(&mut host, &mut env, &mut surface, &[Button::Y]);
    assert_eq!(host.active_name(), Some("PONG"));
    assert_eq!(env.timers.active(), 1);

    env.timers.service(16);
    assert!(TICKS.game.is_raised());
    let frames = surface.frames;
    host.tick(&mut env.context(&mut surface));
    assert_eq!(surface.frames, frames + 1);

    press(&mut host, &mut env, &mut surface, &[Button::X]);
    assert_eq!(host.active_name(), Some("HOME"));
    assert_eq!(env.timers.active(), 1);
    env.timers.service(500);
    assert!(!TICKS.game.is_raised());
}

#[test]
fn test_files_descend_and_return() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    press(&mut host, &mut env, &mut surface, &[Button::A]);
    assert_eq!(surface.texts, ["./docs", "main.py"]);
    press(&mut host, &mut env, &mut surface, &[Button::Y]);
    assert_eq!(surface.texts, ["readme.md"]);
    press(&mut host, &mut env, &mut surface, &[Button::X]);
    assert_eq!(surface.texts, ["./docs", "main.py"]);
    press(&mut host, &mut env, &mut surface, &[Button::X]);
    assert_eq!(host.active_name(), Some("HOME"));
}

#[test]
fn test_unknown_transition_is_not_found() {
    static TICKS: AppTicks = AppTicks::new();
    let mut env = environment();
    let mut surface = TextSurface::default();
    let mut screens = Screens::new(&TICKS, &env.prefs, &env.palette, 3);
    let mut host: ScreenHost<'_, SCREEN_COUNT> = ScreenHost::new();
    screens.register_all(&mut host).unwrap();
    host.start(&mut env.context(&mut surface)).unwrap();

    let err = host.transition(Target::Name("NOPE"), &mut env.context(&mut surface));
    assert_eq!(err, Err(UiError::NotFound));
    let err = host.transition(Target::Index(SCREEN_COUNT), &mut env.context(&mut surface));
    assert_eq!(err, Err(UiError::NotFound));
    assert_eq!(host.active_name(), Some("HOME"));
    assert_eq!(env.timers.active(), 1);
}
