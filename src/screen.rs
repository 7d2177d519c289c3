//! Screen contract and the context screens run in.
//!
//! # Lifecycle
//!
//! A registered screen is `Inactive` until the [`ScreenHost`] activates it:
//!
//! ```text
//! Inactive --init--> Active --deinit--> Inactive
//! ```
//!
//! Button handlers return an [`Action`] instead of calling the host
//! directly. The host performs any requested transition before the dispatch
//! call returns, so the handler's screen is already deinitialized when the
//! next event arrives.
//!
//! [`ScreenHost`]: crate::host::ScreenHost

use crate::config::{LABEL_HEIGHT, LABEL_SCALE, PADDING};
use crate::input::Button;
use crate::log_buffer::LogBuffer;
use crate::palette::Palette;
use crate::services::{Clock, FileSystem, NetworkStatus};
use crate::surface::Surface;
use crate::timers::Timers;
use crate::ui_debug;

/// Screen to switch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Registered name, e.g. `"HOME"`.
    Name(&'static str),
    /// Registration order.
    Index(usize),
}

/// Result of handling a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Action {
    /// Stay on the current screen.
    #[default]
    None,
    /// Transition to another (or the same) screen.
    Goto(Target),
}

impl Action {
    /// Shorthand for `Action::Goto(Target::Name(name))`.
    pub const fn goto(name: &'static str) -> Self { Self::Goto(Target::Name(name)) }
}

/// Face drawn by the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockFace {
    #[default]
    Digital,
    Analog,
}

impl ClockFace {
    /// Map a menu value to a face. Unknown values fall back to digital.
    pub const fn from_value(value: usize) -> Self {
        match value {
            1 => Self::Analog,
            _ => Self::Digital,
        }
    }

    /// Menu value of this face.
    pub const fn value(self) -> usize {
        match self {
            Self::Digital => 0,
            Self::Analog => 1,
        }
    }
}

/// User choices shared between screens (not persisted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub clock_face: ClockFace,
}

/// Everything a screen may touch while handling an event.
///
/// Built by the main loop for each batch of events and passed down by
/// reference, so screens hold no references to shared state between calls.
pub struct Context<'a> {
    pub surface: &'a mut dyn Surface,
    pub palette: &'a mut Palette,
    pub prefs: &'a mut Preferences,
    pub timers: &'a mut dyn Timers,
    pub clock: &'a dyn Clock,
    pub network: &'a dyn NetworkStatus,
    pub files: &'a mut dyn FileSystem,
    pub log: &'a mut LogBuffer,
}

/// A full-screen UI unit driven by the [`ScreenHost`](crate::host::ScreenHost).
pub trait Screen {
    /// Unique registration name.
    fn name(&self) -> &'static str;

    /// Called when the screen becomes active. Draws the first frame.
    fn init(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.render(ctx);
    }

    /// Called when the screen stops being active. Must cancel every timer
    /// the screen scheduled.
    fn deinit(
        &mut self,
        _ctx: &mut Context<'_>,
    ) {
    }

    /// Called from the main loop while active. Consumes pending timer work.
    fn update(
        &mut self,
        _ctx: &mut Context<'_>,
    ) {
    }

    /// Redraw the whole screen and present it.
    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    );

    /// Handle a debounced button press.
    fn on_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Action {
        ui_debug!(ctx, "{}: {}", self.name(), button.label());
        Action::None
    }
}

/// Fill the screen with the background color.
pub fn clear(ctx: &mut Context<'_>) {
    ctx.surface.set_pen(ctx.palette.secondary());
    ctx.surface.clear();
}

/// Draw button hints in the corners next to the physical buttons.
///
/// `labels` is ordered A (top-left), B (bottom-left), X (top-right),
/// Y (bottom-right). Each label is drawn inverted in a padded box.
pub fn draw_button_labels(
    ctx: &mut Context<'_>,
    labels: [Option<&str>; 4],
) {
    let (width, height) = ctx.surface.bounds();
    for (button, label) in Button::ALL.into_iter().zip(labels) {
        let Some(label) = label else {
            continue;
        };
        let box_width = ctx.surface.measure_text(label, LABEL_SCALE) + 2 * PADDING;
        let x = match button {
            Button::A | Button::B => 0,
            Button::X | Button::Y => width.saturating_sub(box_width) as i32,
        };
        let y = match button {
            Button::A | Button::X => 0,
            Button::B | Button::Y => height.saturating_sub(LABEL_HEIGHT) as i32,
        };
        ctx.surface.set_pen(ctx.palette.primary());
        ctx.surface.rectangle(x, y, box_width, LABEL_HEIGHT);
        ctx.surface.set_pen(ctx.palette.secondary());
        ctx.surface.text(label, x + PADDING as i32, y + PADDING as i32, LABEL_SCALE);
    }
}
