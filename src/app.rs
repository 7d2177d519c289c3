//! Application wiring: menus, selection callbacks and the screen set.
//!
//! Both the firmware and the simulator build their UI through [`Screens`]
//! and drive it with an [`Environment`], so the two only differ in the
//! collaborators they plug in.

use crate::error::UiError;
use crate::host::ScreenHost;
use crate::list::MenuEntry;
use crate::log_buffer::LogBuffer;
use crate::palette::{PALETTE_COLORS, PALETTE_LEN, Palette};
use crate::screen::{Action, ClockFace, Context, Preferences, Screen};
use crate::screens::{
    CLOCK,
    COLORS,
    FilesScreen,
    HomeScreen,
    NetworkScreen,
    PongScreen,
    SelectScreen,
    SettingsScreen,
};
use crate::services::{Clock, FileSystem, NetworkStatus};
use crate::surface::Surface;
use crate::timers::{TickFlag, Timers};

/// Number of screens registered by [`Screens::register_all`].
pub const SCREEN_COUNT: usize = 7;

/// Settings menu. Values 0 and 1 open the CLOCK and COLORS screens; the
/// remaining entries are placeholders that only log their selection.
pub static SETTINGS_MENU: [MenuEntry; 19] = [
    MenuEntry::new("Clock", 0),
    MenuEntry::new("Colors", 1),
    MenuEntry::new("Test #2", 2),
    MenuEntry::new("Test #3", 3),
    MenuEntry::new("Test #4", 4),
    MenuEntry::new("Test #5", 5),
    MenuEntry::new("Test #6", 2),
    MenuEntry::new("Test #7", 3),
    MenuEntry::new("Test #8", 4),
    MenuEntry::new("Test #9", 5),
    MenuEntry::new("Test #10", 2),
    MenuEntry::new("Test #11", 3),
    MenuEntry::new("Test #12", 4),
    MenuEntry::new("Test #13", 5),
    MenuEntry::new("Test #14", 5),
    MenuEntry::new("Test #15", 2),
    MenuEntry::new("Test #16", 3),
    MenuEntry::new("Test #17", 4),
    MenuEntry::new("Test #18", 5),
];

/// Clock face choices.
pub static CLOCK_FACES: [MenuEntry; 2] = [
    MenuEntry::new("Digital", ClockFace::Digital.value()),
    MenuEntry::new("Analog", ClockFace::Analog.value()),
];

/// Palette colors by name, valued by palette index.
pub static COLOR_CHOICES: [MenuEntry; PALETTE_LEN] = color_choices();

const fn color_choices() -> [MenuEntry; PALETTE_LEN] {
    let mut out = [MenuEntry::new("", 0); PALETTE_LEN];
    let mut i = 0;
    while i < PALETTE_LEN {
        out[i] = MenuEntry::new(PALETTE_COLORS[i].0, i);
        i += 1;
    }
    out
}

/// Settings entries 0 and 1 open their sub-screens.
pub fn on_setting_select(
    _ctx: &mut Context<'_>,
    value: usize,
) -> Action {
    match value {
        0 => Action::goto(CLOCK),
        1 => Action::goto(COLORS),
        _ => Action::None,
    }
}

/// Store the chosen clock face.
pub fn on_clock_select(
    ctx: &mut Context<'_>,
    value: usize,
) -> Action {
    ctx.prefs.clock_face = ClockFace::from_value(value);
    Action::None
}

/// Use the chosen color as foreground. The background becomes white for a
/// black foreground and black otherwise.
pub fn on_color_select(
    ctx: &mut Context<'_>,
    value: usize,
) -> Action {
    ctx.palette.set_primary(value);
    ctx.palette.set_secondary(if value == 0 { 1 } else { 0 });
    Action::None
}

/// Flags raised by the periodic timers, one per timed screen.
pub struct AppTicks {
    pub clock: TickFlag,
    pub network: TickFlag,
    pub game: TickFlag,
}

impl AppTicks {
    pub const fn new() -> Self {
        Self {
            clock: TickFlag::new(),
            network: TickFlag::new(),
            game: TickFlag::new(),
        }
    }
}

impl Default for AppTicks {
    fn default() -> Self { Self::new() }
}

/// Every screen of the application.
pub struct Screens {
    pub home: HomeScreen,
    pub files: FilesScreen,
    pub settings: SettingsScreen,
    pub network: NetworkScreen,
    pub clock: SelectScreen,
    pub colors: SelectScreen,
    pub pong: PongScreen,
}

impl Screens {
    /// Build the screens. The select screens start out marking the current
    /// clock face and primary color.
    pub fn new(
        ticks: &'static AppTicks,
        prefs: &Preferences,
        palette: &Palette,
        seed: u64,
    ) -> Self {
        Self {
            home: HomeScreen::new(&ticks.clock),
            files: FilesScreen::new(),
            settings: SettingsScreen::new(&SETTINGS_MENU, on_setting_select),
            network: NetworkScreen::new(&ticks.network),
            clock: SelectScreen::new(CLOCK, &CLOCK_FACES, prefs.clock_face.value(), on_clock_select),
            colors: SelectScreen::new(COLORS, &COLOR_CHOICES, palette.primary_index(), on_color_select),
            pong: PongScreen::new(&ticks.game, seed),
        }
    }

    /// Register in navigation order; HOME comes first and starts active.
    pub fn register_all<'s, const N: usize>(
        &'s mut self,
        host: &mut ScreenHost<'s, N>,
    ) -> Result<(), UiError> {
        let screens: [&'s mut dyn Screen; SCREEN_COUNT] = [
            &mut self.home,
            &mut self.files,
            &mut self.settings,
            &mut self.network,
            &mut self.clock,
            &mut self.colors,
            &mut self.pong,
        ];
        for screen in screens {
            host.register(screen)?;
        }
        Ok(())
    }
}

/// The collaborators a running UI needs, owned in one place.
///
/// [`Environment::context`] lends them out together with a surface for one
/// batch of events.
pub struct Environment<T, C, N, F> {
    pub palette: Palette,
    pub prefs: Preferences,
    pub timers: T,
    pub clock: C,
    pub network: N,
    pub files: F,
    pub log: LogBuffer,
}

impl<T, C, N, F> Environment<T, C, N, F>
where
    T: Timers,
    C: Clock,
    N: NetworkStatus,
    F: FileSystem,
{
    /// Standard palette and default preferences.
    pub fn new(
        timers: T,
        clock: C,
        network: N,
        files: F,
    ) -> Self {
        Self {
            palette: Palette::standard(),
            prefs: Preferences::default(),
            timers,
            clock,
            network,
            files,
            log: LogBuffer::new(),
        }
    }

    pub fn context<'a>(
        &'a mut self,
        surface: &'a mut dyn Surface,
    ) -> Context<'a> {
        Context {
            surface,
            palette: &mut self.palette,
            prefs: &mut self.prefs,
            timers: &mut self.timers,
            clock: &self.clock,
            network: &self.network,
            files: &mut self.files,
            log: &mut self.log,
        }
    }
}
