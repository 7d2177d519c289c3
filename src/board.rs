//! Platform services backed by the Pico 2 itself.
//!
//! The board has no RTC, radio or mounted storage, so the clock counts from
//! boot, the network reports a disabled link and the file browser walks a
//! compiled-in tree.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Instant;
use pico_screen_ui::config::timing::MAX_TIMERS;
use pico_screen_ui::services::{
    Clock,
    LinkState,
    NetError,
    NetworkInfo,
    NetworkStatus,
    StaticFs,
    StaticNode,
    WallTime,
};
use pico_screen_ui::timers::{AlarmTable, TickFlag, TimerError, TimerHandle, Timers};

/// Alarm table shared between the UI loop and [`crate::tasks::alarm_task`].
pub type SharedAlarmTable = Mutex<CriticalSectionRawMutex, RefCell<AlarmTable<MAX_TIMERS>>>;

pub static ALARMS: SharedAlarmTable = Mutex::new(RefCell::new(AlarmTable::new()));

/// [`Timers`] view of [`ALARMS`] handed to screens.
pub struct SharedAlarms(pub &'static SharedAlarmTable);

impl Timers for SharedAlarms {
    fn schedule(
        &mut self,
        period_ms: u32,
        flag: &'static TickFlag,
    ) -> Result<TimerHandle, TimerError> {
        self.0.lock(|table| table.borrow_mut().schedule(period_ms, flag))
    }

    fn cancel(
        &mut self,
        handle: TimerHandle,
    ) {
        self.0.lock(|table| table.borrow_mut().cancel(handle));
    }
}

/// Time since boot, shown as a time of day starting at midnight.
pub struct UptimeClock {
    boot: Instant,
}

impl UptimeClock {
    pub fn new() -> Self { Self { boot: Instant::now() } }
}

impl Clock for UptimeClock {
    fn now(&self) -> WallTime { WallTime::from_day_seconds(self.boot.elapsed().as_secs() as u32) }

    fn uptime_ms(&self) -> u32 { self.boot.elapsed().as_millis() as u32 }
}

/// Network status for a board without a radio.
pub struct NoRadio;

impl NetworkStatus for NoRadio {
    fn info(&self) -> Result<NetworkInfo, NetError> { Ok(NetworkInfo::placeholder(LinkState::Disabled)) }
}

static LOGS: [StaticNode; 2] = [StaticNode::file("boot.log"), StaticNode::file("ui.log")];
static ASSETS: [StaticNode; 2] = [StaticNode::file("font.bin"), StaticNode::file("splash.raw")];
static DEVICE_ROOT: [StaticNode; 4] = [
    StaticNode::folder("assets", &ASSETS),
    StaticNode::file("config.toml"),
    StaticNode::folder("logs", &LOGS),
    StaticNode::file("README.txt"),
];

/// File tree browsed by the FILES screen on the device.
pub fn device_files() -> StaticFs { StaticFs::new(&DEVICE_ROOT) }
