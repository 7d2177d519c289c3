//! Timing configuration: debounce window and periodic refresh rates.

/// Minimum time between two accepted presses of one button.
pub const DEBOUNCE_MS: u64 = 200;

/// A press this soon after a release is contact bounce of that release.
pub const RELEASE_SETTLE_MS: u64 = 20;

/// Clock face refresh period on the home screen.
pub const CLOCK_REFRESH_MS: u32 = 1000;

/// Network details refresh period.
pub const NETWORK_REFRESH_MS: u32 = 1000;

/// Pong simulation step period (~60 FPS).
pub const GAME_TICK_MS: u32 = 16;

/// Resolution of the alarm service loop on the device.
pub const ALARM_SERVICE_MS: u64 = 1;

/// Maximum number of simultaneously scheduled periodic timers.
pub const MAX_TIMERS: usize = 4;
