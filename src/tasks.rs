//! Async tasks for the firmware.

use embassy_time::{Duration, Instant, Ticker};
use pico_screen_ui::config::timing::ALARM_SERVICE_MS;

use crate::board::SharedAlarmTable;

/// Raise due timer flags. Runs next to the UI loop on the same executor.
#[embassy_executor::task]
pub async fn alarm_task(alarms: &'static SharedAlarmTable) {
    defmt::info!("Alarm task started");
    let mut ticker = Ticker::every(Duration::from_millis(ALARM_SERVICE_MS));
    loop {
        let now = Instant::now().as_millis();
        alarms.lock(|table| table.borrow_mut().service(now));
        ticker.next().await;
    }
}
