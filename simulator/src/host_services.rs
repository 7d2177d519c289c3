//! Clock and network status for the desktop simulator.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pico_screen_ui::services::{Clock, LinkState, NetError, NetworkInfo, NetworkStatus, WallTime, truncated};

/// UTC time of day from the system clock.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let secs = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_secs());
        WallTime::from_day_seconds((secs % 86_400) as u32)
    }

    fn uptime_ms(&self) -> u32 { self.start.elapsed().as_millis() as u32 }
}

/// Scripted network states, cycled with the N key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimLink {
    Connected,
    NotConnected,
    Disabled,
    Failing,
}

impl SimLink {
    pub const fn next(self) -> Self {
        match self {
            Self::Connected => Self::NotConnected,
            Self::NotConnected => Self::Disabled,
            Self::Disabled => Self::Failing,
            Self::Failing => Self::Connected,
        }
    }
}

pub struct SimNetwork {
    pub link: SimLink,
}

impl NetworkStatus for SimNetwork {
    fn info(&self) -> Result<NetworkInfo, NetError> {
        match self.link {
            SimLink::Connected => Ok(NetworkInfo {
                link: LinkState::Connected,
                ssid: truncated("pico-lab"),
                ip: truncated("192.168.4.20"),
                netmask: truncated("255.255.255.0"),
                gateway: truncated("192.168.4.1"),
                dns: truncated("192.168.4.1"),
                mac: truncated("28:cd:c1:0a:4b:7e"),
                rssi_dbm: Some(-58),
            }),
            SimLink::NotConnected => Ok(NetworkInfo::placeholder(LinkState::NotConnected)),
            SimLink::Disabled => Ok(NetworkInfo::placeholder(LinkState::Disabled)),
            SimLink::Failing => Err(NetError::Unavailable),
        }
    }
}
