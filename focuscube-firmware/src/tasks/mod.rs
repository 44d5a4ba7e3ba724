//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod button;
pub mod display;
pub mod telemetry;
pub mod tick;

pub use button::button_task;
pub use display::{display_task, show, Oled};
pub use telemetry::telemetry_task;
pub use tick::{tick_task, Imu};
