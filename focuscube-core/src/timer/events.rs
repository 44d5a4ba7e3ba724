//! Events emitted by the focus timer

use embassy_time::Duration;

use super::machine::FocusMode;

/// Upper bound on events a single tick can produce
///
/// Worst case: a mode commit that discards an open session and reopens one
/// because the button is still held, followed by a release edge.
pub const MAX_EVENTS_PER_TICK: usize = 4;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    /// A stable orientation committed a new mode
    ModeChanged { from: FocusMode, to: FocusMode },
    /// Button pressed (or held through a commit) while a mode is active
    SessionStarted,
    /// Button released; `session` was added to the accumulated time
    SessionPaused { session: Duration },
    /// An open session was dropped by a mode change; `lost` was never banked
    SessionDiscarded { lost: Duration },
}

impl TimerEvent {
    /// Check if this event changed the committed mode
    pub fn is_mode_change(&self) -> bool {
        matches!(self, TimerEvent::ModeChanged { .. })
    }

    /// Check if this event lost unbanked time
    pub fn is_loss(&self) -> bool {
        matches!(self, TimerEvent::SessionDiscarded { .. })
    }
}
