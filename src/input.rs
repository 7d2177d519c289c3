//! Button identities and debounce handling.
//!
//! Time-based edge detection prevents multiple triggers from contact bounce.
//! The caller passes the current time so the same logic runs on the device
//! (`embassy_time::Instant`) and in the simulator (`std::time::Instant`).

use crate::config::{DEBOUNCE_MS, RELEASE_SETTLE_MS};

/// The four front-panel buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Top-left
    A,
    /// Bottom-left
    B,
    /// Top-right
    X,
    /// Bottom-right
    Y,
}

impl Button {
    /// All buttons in pin order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::X, Self::Y];

    /// Single-letter label used in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// Position in [`Button::ALL`].
    pub const fn index(self) -> usize { self as usize }
}

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_press_ms: Option<u64>,
    last_release_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_press_ms: None,
            last_release_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low` means pressed. Releases are
    /// followed immediately. A press is accepted only if [`DEBOUNCE_MS`]
    /// passed since the previous accepted press and [`RELEASE_SETTLE_MS`]
    /// since the last release; a rejected press still marks the button as
    /// held, so holding it through the window never fires late.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }
        self.was_pressed = is_low;

        if !is_low {
            self.last_release_ms = Some(now_ms);
            return false;
        }

        let rearmed = self.last_press_ms.is_none_or(|last| now_ms.saturating_sub(last) >= DEBOUNCE_MS);
        let settled = self.last_release_ms.is_none_or(|last| now_ms.saturating_sub(last) >= RELEASE_SETTLE_MS);
        if rearmed && settled {
            self.last_press_ms = Some(now_ms);
            return true;
        }
        false
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}
