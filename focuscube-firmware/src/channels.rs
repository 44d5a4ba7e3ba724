//! Inter-task communication
//!
//! The tick task is the only writer of timer state; everyone else sees
//! snapshots through these signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use focuscube_core::timer::TimerSnapshot;

/// Debounced button level (true = pressed), written by the button task
pub static BUTTON_PRESSED: AtomicBool = AtomicBool::new(false);

/// Latest snapshot for the display task
pub static DISPLAY_SNAPSHOT: Signal<CriticalSectionRawMutex, TimerSnapshot> = Signal::new();

/// Latest snapshot for the telemetry task
pub static TELEMETRY_SNAPSHOT: Signal<CriticalSectionRawMutex, TimerSnapshot> = Signal::new();
