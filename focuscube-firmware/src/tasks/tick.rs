//! Control loop task
//!
//! Once per tick: read the accelerometer, classify the face, advance the
//! timer with the current button level and publish the snapshot.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Instant, Ticker};
use focuscube_core::config::FocusConfig;
use focuscube_core::orientation::{FaceLabel, OrientationClassifier};
use focuscube_core::timer::{FocusTimer, TimerEvent};
use focuscube_core::traits::Accelerometer;
use focuscube_drivers::imu::Mpu6500;

use crate::channels::{BUTTON_PRESSED, DISPLAY_SNAPSHOT, TELEMETRY_SNAPSHOT};

/// Accelerometer on I2C0
pub type Imu = Mpu6500<I2c<'static, I2C0, Async>>;

/// Tick task - owns the timer
#[embassy_executor::task]
pub async fn tick_task(mut imu: Imu, config: FocusConfig) {
    info!("Tick task started ({}ms)", config.tick_period_ms);

    let classifier = OrientationClassifier::new(config.classifier);
    let mut timer = FocusTimer::new(&config);
    let mut ticker = Ticker::every(config.tick_period());

    loop {
        ticker.next().await;

        let label = match Accelerometer::read_accel(&mut imu).await {
            Ok(sample) => classifier.classify(sample),
            Err(e) => {
                warn!("Accel read failed: {:?}", e);
                FaceLabel::Unknown
            }
        };
        let button = BUTTON_PRESSED.load(Ordering::Relaxed);

        let snapshot = timer.tick(label, button, Instant::now());

        for event in timer.events() {
            log_event(event);
        }
        debug!(
            "Face: {}  Mode: {}  Button: {}  Total: {}s",
            label.as_str(),
            snapshot.mode.as_str(),
            if button { "PRESSED" } else { "RELEASED" },
            timer.state().elapsed_accumulated().as_secs()
        );

        DISPLAY_SNAPSHOT.signal(snapshot);
        TELEMETRY_SNAPSHOT.signal(snapshot);
    }
}

fn log_event(event: &TimerEvent) {
    match *event {
        TimerEvent::ModeChanged { to, .. } if to.is_active() => {
            info!("FOCUS MODE: {}", to.as_str());
        }
        TimerEvent::ModeChanged { .. } => {
            info!("TIMER STOPPED - invalid position");
        }
        TimerEvent::SessionStarted => {
            info!("Timer started - button pressed");
        }
        TimerEvent::SessionPaused { session } => {
            info!("Timer paused - button released (+{}ms)", session.as_millis());
        }
        TimerEvent::SessionDiscarded { lost } => {
            warn!("Open session discarded by mode change ({}ms)", lost.as_millis());
        }
    }
}
