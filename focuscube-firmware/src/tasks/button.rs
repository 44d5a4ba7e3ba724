//! Button polling task

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};
use focuscube_drivers::button::{Button, ButtonEdge};

use crate::channels::BUTTON_PRESSED;

/// Poll interval; well under the debounce window
const POLL_INTERVAL_MS: u64 = 5;

/// Button task - publishes the debounced level
#[embassy_executor::task]
pub async fn button_task(mut button: Button<Input<'static>>) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        // Input pins are infallible on RP2040
        let Ok(edge) = button.sample(Instant::now());
        if let Some(edge) = edge {
            debug!("Button {:?}", edge);
            BUTTON_PRESSED.store(edge == ButtonEdge::Pressed, Ordering::Relaxed);
        }
    }
}
