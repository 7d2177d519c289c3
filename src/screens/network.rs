//! Network details screen, refreshed once per second.

use core::fmt::Write;

use heapless::String;

use crate::config::NETWORK_REFRESH_MS;
use crate::input::Button;
use crate::screen::{self, Action, Context, Screen};
use crate::services::{INFO_LEN, LinkState, NetworkInfo, truncated};
use crate::timers::{TickFlag, TimerHandle};
use crate::{ui_debug, ui_warn};

use super::{HOME, NETWORK};

const TITLE: &str = "NETWORK INFO";
const TITLE_SCALE: u8 = 3;
const TITLE_POS: (i32, i32) = (10, 10);

const ROW_SCALE: u8 = 2;
const FIRST_ROW_Y: i32 = 50;
const ROW_HEIGHT: i32 = 20;
const LABEL_X: i32 = 10;
const VALUE_X: i32 = 120;

/// Row values: one line per detail, wide enough for an error message.
type Value = String<{ INFO_LEN + 8 }>;

const LABELS: [&str; 8] = [
    "Status:",
    "SSID:",
    "IP Address:",
    "Netmask:",
    "Gateway:",
    "DNS:",
    "MAC:",
    "Signal:",
];

fn value(text: &str) -> Value { truncated(text) }

/// The eight displayed values. Read failures degrade to dashes.
fn rows(ctx: &mut Context<'_>) -> [Value; 8] {
    let (status, details) = match ctx.network.info() {
        Ok(info) => (value(info.link.label()), info),
        Err(err) => {
            ui_warn!(ctx, "{}: {}", NETWORK, err);
            let mut status = Value::new();
            write!(status, "Error: {err}").ok();
            (status, NetworkInfo::placeholder(LinkState::Disabled))
        }
    };

    let signal = match details.rssi_dbm {
        Some(dbm) => {
            let mut signal = Value::new();
            write!(signal, "{dbm} dBm").ok();
            signal
        }
        None if details.is_connected() => value("N/A"),
        None => value("-"),
    };

    [
        status,
        value(&details.ssid),
        value(&details.ip),
        value(&details.netmask),
        value(&details.gateway),
        value(&details.dns),
        value(&details.mac),
        signal,
    ]
}

pub struct NetworkScreen {
    refresh: &'static TickFlag,
    timer: Option<TimerHandle>,
}

impl NetworkScreen {
    pub const fn new(refresh: &'static TickFlag) -> Self {
        Self {
            refresh,
            timer: None,
        }
    }
}

impl Screen for NetworkScreen {
    fn name(&self) -> &'static str { NETWORK }

    fn init(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.refresh.clear();
        self.render(ctx);
        match ctx.timers.schedule(NETWORK_REFRESH_MS, self.refresh) {
            Ok(handle) => self.timer = Some(handle),
            Err(err) => ui_warn!(ctx, "{}: refresh timer: {}", NETWORK, err),
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
        let values = rows(ctx);
        screen::clear(ctx);

        ctx.surface.set_pen(ctx.palette.primary());
        ctx.surface.text(TITLE, TITLE_POS.0, TITLE_POS.1, TITLE_SCALE);

        let mut y = FIRST_ROW_Y;
        for (label, value) in LABELS.iter().zip(values.iter()) {
            ctx.surface.text(label, LABEL_X, y, ROW_SCALE);
            ctx.surface.text(value, VALUE_X, y, ROW_SCALE);
            y += ROW_HEIGHT;
        }

        screen::draw_button_labels(ctx, [None, None, Some("BACK"), None]);
        ctx.surface.update();
    }

    fn on_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Action {
        match button {
            Button::X => Action::goto(HOME),
            _ => {
                ui_debug!(ctx, "{}: {}", NETWORK, button.label());
                Action::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::NetError;
    use crate::testing::{FakeNetwork, Harness, Op};

    static REFRESH: TickFlag = TickFlag::new();

    #[test]
    fn test_connected_details() {
        let mut harness = Harness::new();
        harness.network = FakeNetwork::connected("10.0.0.5");
        NetworkScreen::new(&REFRESH).render(&mut harness.ctx());

        let texts = harness.surface.texts();
        assert_eq!(texts[0], TITLE);
        assert_eq!(texts[1..5], ["Status:", "Connected", "SSID:", "lab"]);
        assert_eq!(texts[5..7], ["IP Address:", "10.0.0.5"]);
        assert_eq!(texts[15..17], ["Signal:", "-61 dBm"]);
        assert_eq!(texts.last(), Some(&"BACK"));
        assert!(matches!(harness.surface.find_text("10.0.0.5"), Some(Op::Text { x: 120, y: 90, .. })));
    }

    #[test]
    fn test_error_degrades_to_placeholders() {
        let mut harness = Harness::new();
        harness.network = FakeNetwork(Err(NetError::Unavailable));
        NetworkScreen::new(&REFRESH).render(&mut harness.ctx());

        let texts = harness.surface.texts();
        assert_eq!(texts[2], "Error: unavailable");
        assert_eq!(texts[6], "-");
        assert_eq!(texts[16], "-");
        assert!(harness.logged("NETWORK: unavailable"));
    }

    #[test]
    fn test_connected_without_rssi_shows_na() {
        let mut harness = Harness::new();
        let mut network = FakeNetwork::connected("10.0.0.5");
        if let Ok(info) = &mut network.0 {
            info.rssi_dbm = None;
        }
        harness.network = network;
        NetworkScreen::new(&REFRESH).render(&mut harness.ctx());
        assert_eq!(harness.surface.texts()[16], "N/A");
    }

    #[test]
    fn test_refresh_timer_and_back() {
        static FLAG: TickFlag = TickFlag::new();
        let mut harness = Harness::new();
        let mut network = NetworkScreen::new(&FLAG);
        network.init(&mut harness.ctx());
        assert_eq!(harness.timers.active(), 1);

        harness.timers.service(NETWORK_REFRESH_MS.into());
        network.update(&mut harness.ctx());
        assert_eq!(harness.surface.frames, 2);

        assert_eq!(network.on_button(Button::A, &mut harness.ctx()), Action::None);
        assert_eq!(network.on_button(Button::X, &mut harness.ctx()), Action::goto(HOME));
        network.deinit(&mut harness.ctx());
        assert_eq!(harness.timers.active(), 0);
    }
}
