//! Focus timer state machine
//!
//! Combines the debounced orientation signal and the button level into a
//! running/paused elapsed-time accumulator.
//!
//! ```text
//!            stable Top/Bottom               button down
//!   ┌──────┐ ───────────────▶ ┌───────┐ ─────────────▶ ┌─────────┐
//!   │ Idle │                  │ Armed │                │ Running │
//!   └──────┘ ◀─────────────── └───────┘ ◀───────────── └─────────┘
//!            stable Unknown                 button up
//! ```
//!
//! Any committed mode change resets the accumulated time. Running also drops
//! back to Idle on a stable `Unknown`, discarding the open session.

pub mod debounce;
pub mod events;
pub mod machine;
pub mod snapshot;

pub use debounce::LabelDebouncer;
pub use events::{TimerEvent, MAX_EVENTS_PER_TICK};
pub use machine::{FocusMode, FocusTimer, TimerState};
pub use snapshot::{TimerPhase, TimerSnapshot};
