//! Read-only view of the timer for renderers and telemetry

use embassy_time::Duration;

use super::machine::FocusMode;

/// Externally meaningful timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerPhase {
    /// No mode committed
    Idle,
    /// Mode committed, button up, time banked
    Armed,
    /// Mode committed, button down, time accruing
    Running,
}

/// Timer state as of the end of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSnapshot {
    /// Committed mode
    pub mode: FocusMode,
    /// Banked time plus the open session, if any
    pub elapsed: Duration,
    /// A mode is active and the timer may accrue
    pub running: bool,
    /// Button level seen on this tick
    pub active: bool,
}

impl TimerSnapshot {
    /// Snapshot of a freshly booted timer
    pub const IDLE: Self = Self {
        mode: FocusMode::None,
        elapsed: Duration::from_ticks(0),
        running: false,
        active: false,
    };

    /// Elapsed time in whole seconds
    pub fn elapsed_secs(&self) -> u32 {
        u32::try_from(self.elapsed.as_secs()).unwrap_or(u32::MAX)
    }

    /// Current phase
    pub fn phase(&self) -> TimerPhase {
        match (self.running, self.active) {
            (false, _) => TimerPhase::Idle,
            (true, false) => TimerPhase::Armed,
            (true, true) => TimerPhase::Running,
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::IDLE
    }
}
