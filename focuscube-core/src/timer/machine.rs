//! Focus timer definition
//!
//! Each tick runs three steps in a fixed order:
//!
//! 1. Feed the face label to the debouncer.
//! 2. If a full stable window just completed and its mode differs from the
//!    committed one, commit it (resetting the accumulated time).
//! 3. Apply button edges: a press opens a session, a release banks it.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use super::debounce::LabelDebouncer;
use super::events::{TimerEvent, MAX_EVENTS_PER_TICK};
use super::snapshot::TimerSnapshot;
use crate::config::FocusConfig;
use crate::orientation::FaceLabel;

const ZERO: Duration = Duration::from_ticks(0);
const SATURATED: Duration = Duration::from_ticks(u64::MAX);

/// Committed focus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FocusMode {
    /// No timing face is up
    #[default]
    None,
    /// Top face up
    Work,
    /// Bottom face up
    Personal,
}

impl FocusMode {
    /// Mode a stable face label commits to
    pub fn from_label(label: FaceLabel) -> Self {
        match label {
            FaceLabel::Top => FocusMode::Work,
            FaceLabel::Bottom => FocusMode::Personal,
            FaceLabel::Unknown => FocusMode::None,
        }
    }

    /// Face label this mode mirrors
    pub fn label(&self) -> FaceLabel {
        match self {
            FocusMode::Work => FaceLabel::Top,
            FocusMode::Personal => FaceLabel::Bottom,
            FocusMode::None => FaceLabel::Unknown,
        }
    }

    /// Check if the timer may accrue in this mode
    pub fn is_active(&self) -> bool {
        !matches!(self, FocusMode::None)
    }

    /// Lowercase name used on the telemetry link
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusMode::None => "none",
            FocusMode::Work => "work",
            FocusMode::Personal => "personal",
        }
    }
}

/// Mutable timer state
///
/// Invariant: `session_start` is `Some` exactly when `running && button_down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    mode: FocusMode,
    elapsed_accumulated: Duration,
    running: bool,
    button_down: bool,
    session_start: Option<Instant>,
    debounce: LabelDebouncer,
}

impl TimerState {
    /// Power-on state: idle, nothing banked, button up
    pub const fn new(commit_ticks: u32) -> Self {
        Self {
            mode: FocusMode::None,
            elapsed_accumulated: ZERO,
            running: false,
            button_down: false,
            session_start: None,
            debounce: LabelDebouncer::new(commit_ticks),
        }
    }

    /// Committed mode
    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    /// Time banked from closed sessions in the current mode
    pub fn elapsed_accumulated(&self) -> Duration {
        self.elapsed_accumulated
    }

    /// Check if a mode is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Last observed button level
    pub fn button_down(&self) -> bool {
        self.button_down
    }

    /// Start of the open session, if any
    pub fn session_start(&self) -> Option<Instant> {
        self.session_start
    }

    /// Label the debouncer is currently counting
    pub fn debounce_label(&self) -> FaceLabel {
        self.debounce.label()
    }

    /// Consecutive ticks of [`Self::debounce_label`] since the last window
    pub fn debounce_count(&self) -> u32 {
        self.debounce.count()
    }
}

/// Orientation-gated elapsed-time accumulator
///
/// Owned by a single task and ticked once per period. All inputs are valid;
/// there is no error path.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    state: TimerState,
    events: Vec<TimerEvent, MAX_EVENTS_PER_TICK>,
}

impl FocusTimer {
    /// Create a timer using the commit window from `config`
    pub fn new(config: &FocusConfig) -> Self {
        Self::with_commit_ticks(config.commit_ticks)
    }

    /// Create a timer that commits after `commit_ticks` identical labels
    pub const fn with_commit_ticks(commit_ticks: u32) -> Self {
        Self {
            state: TimerState::new(commit_ticks),
            events: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    /// Advance the timer by one period
    ///
    /// `button_down` is the debounced button level for this tick and `now`
    /// a monotonic timestamp.
    pub fn tick(&mut self, label: FaceLabel, button_down: bool, now: Instant) -> TimerSnapshot {
        self.events.clear();

        if let Some(stable) = self.state.debounce.observe(label) {
            let target = FocusMode::from_label(stable);
            if target != self.state.mode {
                self.commit(target, button_down, now);
            }
        }

        self.apply_button(button_down, now);
        self.snapshot(now)
    }

    /// Project the current state at `now` without mutating it
    pub fn snapshot(&self, now: Instant) -> TimerSnapshot {
        let open = self
            .state
            .session_start
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(ZERO);

        TimerSnapshot {
            mode: self.state.mode,
            elapsed: self
                .state
                .elapsed_accumulated
                .checked_add(open)
                .unwrap_or(SATURATED),
            running: self.state.running,
            active: self.state.button_down,
        }
    }

    /// Switch to a new mode, starting accumulation from zero
    ///
    /// An open session is discarded, not banked. If the button is held on
    /// this tick and the new mode is active, a fresh session opens at `now`.
    fn commit(&mut self, target: FocusMode, button_down: bool, now: Instant) {
        let from = self.state.mode;

        if let Some(start) = self.state.session_start.take() {
            self.push(TimerEvent::SessionDiscarded {
                lost: now.saturating_duration_since(start),
            });
        }

        // Take this tick's level so apply_button sees no edge afterwards
        self.state.button_down = button_down;
        self.state.mode = target;
        self.state.running = target.is_active();
        self.state.elapsed_accumulated = ZERO;
        self.push(TimerEvent::ModeChanged { from, to: target });

        if self.state.running && button_down {
            self.state.session_start = Some(now);
            self.push(TimerEvent::SessionStarted);
        }
    }

    /// Record the button level and handle press/release edges
    fn apply_button(&mut self, button_down: bool, now: Instant) {
        if button_down == self.state.button_down {
            return;
        }
        self.state.button_down = button_down;

        // Edges while idle only update the stored level
        if !self.state.running {
            return;
        }

        if button_down {
            self.state.session_start = Some(now);
            self.push(TimerEvent::SessionStarted);
        } else if let Some(start) = self.state.session_start.take() {
            let session = now.saturating_duration_since(start);
            self.state.elapsed_accumulated = self
                .state
                .elapsed_accumulated
                .checked_add(session)
                .unwrap_or(SATURATED);
            self.push(TimerEvent::SessionPaused { session });
        }
    }

    fn push(&mut self, event: TimerEvent) {
        // Capacity covers the worst case of one tick
        let _ = self.events.push(event);
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(&FocusConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT: u32 = 5;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Feed `n` identical ticks 300 ms apart starting at `start_ms`
    ///
    /// Returns the timestamp of the last tick.
    fn hold(timer: &mut FocusTimer, label: FaceLabel, button: bool, n: u32, start_ms: u64) -> u64 {
        let mut now = start_ms;
        for i in 0..n {
            now = start_ms + i as u64 * 300;
            timer.tick(label, button, at(now));
        }
        now
    }

    fn assert_session_invariant(timer: &FocusTimer) {
        let state = timer.state();
        assert_eq!(
            state.session_start().is_some(),
            state.is_running() && state.button_down()
        );
    }

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::with_commit_ticks(COMMIT);
        let state = timer.state();
        assert_eq!(state.mode(), FocusMode::None);
        assert_eq!(state.elapsed_accumulated(), ZERO);
        assert!(!state.is_running());
        assert!(!state.button_down());
        assert_eq!(state.session_start(), None);
        assert_eq!(state.debounce_count(), 0);
        assert_eq!(timer.snapshot(at(0)), TimerSnapshot::IDLE);
    }

    #[test]
    fn test_short_window_does_not_commit() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT - 1, 0);
        assert_eq!(timer.state().mode(), FocusMode::None);
        assert_eq!(timer.state().debounce_count(), COMMIT - 1);
    }

    #[test]
    fn test_full_window_commits_once() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT - 1, 0);
        let snapshot = timer.tick(FaceLabel::Top, false, at(1200));

        assert_eq!(snapshot.mode, FocusMode::Work);
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed, ZERO);
        assert_eq!(
            timer.events(),
            &[TimerEvent::ModeChanged {
                from: FocusMode::None,
                to: FocusMode::Work
            }]
        );
        assert_eq!(timer.state().debounce_count(), 0);
    }

    #[test]
    fn test_commit_requires_fresh_window() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);

        // Another partial window of the same label does nothing
        for i in 1..COMMIT {
            timer.tick(FaceLabel::Top, false, at(1500 + i as u64 * 300));
            assert_eq!(timer.state().debounce_count(), i);
            assert!(timer.events().is_empty());
        }
    }

    #[test]
    fn test_interrupted_window_does_not_commit() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, 3, 0);
        timer.tick(FaceLabel::Unknown, false, at(900));
        assert_eq!(timer.state().debounce_label(), FaceLabel::Unknown);
        assert_eq!(timer.state().debounce_count(), 1);

        hold(&mut timer, FaceLabel::Top, false, 3, 1200);
        assert_eq!(timer.state().mode(), FocusMode::None);
    }

    #[test]
    fn test_same_mode_window_keeps_banked_time() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(2_000));
        timer.tick(FaceLabel::Top, false, at(12_000));
        assert_eq!(timer.state().elapsed_accumulated(), Duration::from_secs(10));

        // Several more full windows of Top: no reset
        hold(&mut timer, FaceLabel::Top, false, COMMIT * 3, 12_300);
        assert_eq!(timer.state().elapsed_accumulated(), Duration::from_secs(10));
        assert_eq!(timer.state().mode(), FocusMode::Work);
    }

    #[test]
    fn test_press_release_accumulates() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);

        timer.tick(FaceLabel::Top, true, at(10_000));
        assert_eq!(timer.events(), &[TimerEvent::SessionStarted]);
        timer.tick(FaceLabel::Top, false, at(13_000));
        assert_eq!(
            timer.events(),
            &[TimerEvent::SessionPaused {
                session: Duration::from_secs(3)
            }]
        );

        timer.tick(FaceLabel::Top, true, at(20_000));
        timer.tick(FaceLabel::Top, false, at(24_500));
        assert_eq!(
            timer.state().elapsed_accumulated(),
            Duration::from_millis(7_500)
        );
        assert_session_invariant(&timer);
    }

    #[test]
    fn test_open_session_only_in_snapshot() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(10_000));
        timer.tick(FaceLabel::Top, false, at(15_000));
        timer.tick(FaceLabel::Top, true, at(20_000));

        let snapshot = timer.tick(FaceLabel::Top, true, at(22_000));
        assert_eq!(snapshot.elapsed, Duration::from_secs(7));
        assert!(snapshot.active);
        assert_eq!(timer.state().elapsed_accumulated(), Duration::from_secs(5));
        assert_eq!(timer.state().session_start(), Some(at(20_000)));
    }

    #[test]
    fn test_work_then_personal_scenario() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        let last = hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        let snapshot = timer.snapshot(at(last));
        assert_eq!(snapshot.mode, FocusMode::Work);
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed, ZERO);

        // Press at t0, release 65 s later
        let t0 = 10_000;
        timer.tick(FaceLabel::Top, true, at(t0));
        timer.tick(FaceLabel::Top, false, at(t0 + 65_000));
        assert_eq!(timer.state().elapsed_accumulated(), Duration::from_secs(65));

        let last = hold(&mut timer, FaceLabel::Bottom, false, COMMIT, t0 + 65_300);
        let snapshot = timer.snapshot(at(last));
        assert_eq!(snapshot.mode, FocusMode::Personal);
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed, ZERO);
        assert_eq!(timer.state().elapsed_accumulated(), ZERO);
    }

    #[test]
    fn test_switch_discards_open_session() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(2_000));
        timer.tick(FaceLabel::Top, false, at(5_000));
        timer.tick(FaceLabel::Top, true, at(6_000));

        // Flip to Bottom with the button still held
        hold(&mut timer, FaceLabel::Bottom, true, COMMIT - 1, 6_300);
        let snapshot = timer.tick(FaceLabel::Bottom, true, at(8_000));

        assert_eq!(snapshot.mode, FocusMode::Personal);
        assert_eq!(snapshot.elapsed, ZERO);
        assert_eq!(timer.state().elapsed_accumulated(), ZERO);
        assert_eq!(
            timer.events(),
            &[
                TimerEvent::SessionDiscarded {
                    lost: Duration::from_secs(2)
                },
                TimerEvent::ModeChanged {
                    from: FocusMode::Work,
                    to: FocusMode::Personal
                },
                TimerEvent::SessionStarted,
            ]
        );
        // Held button keeps timing in the new mode from the commit instant
        assert_eq!(timer.state().session_start(), Some(at(8_000)));
        assert_session_invariant(&timer);
    }

    #[test]
    fn test_unknown_discards_open_session() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        let t0 = 3_000;
        timer.tick(FaceLabel::Top, true, at(t0));

        // Mid-session, long after the press
        hold(&mut timer, FaceLabel::Unknown, true, COMMIT - 1, 600_000);
        let snapshot = timer.tick(FaceLabel::Unknown, true, at(602_000));

        assert_eq!(snapshot.mode, FocusMode::None);
        assert!(!snapshot.running);
        assert_eq!(snapshot.elapsed, ZERO);
        assert_eq!(timer.state().session_start(), None);
        assert!(timer.events().iter().any(TimerEvent::is_loss));
        assert_session_invariant(&timer);
    }

    #[test]
    fn test_release_after_unknown_banks_nothing() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(3_000));
        hold(&mut timer, FaceLabel::Unknown, true, COMMIT, 4_000);

        timer.tick(FaceLabel::Unknown, false, at(9_000));
        assert_eq!(timer.state().elapsed_accumulated(), ZERO);
        assert!(timer.events().is_empty());
    }

    #[test]
    fn test_button_ignored_while_idle() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        timer.tick(FaceLabel::Unknown, true, at(0));
        assert!(timer.state().button_down());
        assert_eq!(timer.state().session_start(), None);
        assert!(timer.events().is_empty());

        timer.tick(FaceLabel::Unknown, false, at(5_000));
        assert_eq!(timer.state().elapsed_accumulated(), ZERO);
        assert!(timer.events().is_empty());
    }

    #[test]
    fn test_button_held_through_first_commit() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        let last = hold(&mut timer, FaceLabel::Top, true, COMMIT, 0);
        assert_eq!(timer.state().session_start(), Some(at(last)));

        timer.tick(FaceLabel::Top, false, at(last + 4_000));
        assert_eq!(timer.state().elapsed_accumulated(), Duration::from_secs(4));
    }

    #[test]
    fn test_release_on_commit_tick() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(2_000));

        hold(&mut timer, FaceLabel::Bottom, true, COMMIT - 1, 3_000);
        let snapshot = timer.tick(FaceLabel::Bottom, false, at(5_000));

        assert_eq!(snapshot.mode, FocusMode::Personal);
        assert_eq!(snapshot.elapsed, ZERO);
        assert!(!snapshot.active);
        assert!(matches!(
            timer.events(),
            [
                TimerEvent::SessionDiscarded { .. },
                TimerEvent::ModeChanged {
                    from: FocusMode::Work,
                    to: FocusMode::Personal
                }
            ]
        ));
        assert_session_invariant(&timer);
    }

    #[test]
    fn test_release_on_commit_tick_opens_no_session() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 0);
        timer.tick(FaceLabel::Top, true, at(2_000));
        hold(&mut timer, FaceLabel::Bottom, true, COMMIT - 1, 3_000);
        timer.tick(FaceLabel::Bottom, false, at(5_000));

        assert_eq!(
            timer.events(),
            &[
                TimerEvent::SessionDiscarded {
                    lost: Duration::from_millis(3_000)
                },
                TimerEvent::ModeChanged {
                    from: FocusMode::Work,
                    to: FocusMode::Personal
                },
            ]
        );

        // Later ticks stay idle until the next press
        let snapshot = timer.tick(FaceLabel::Bottom, false, at(6_000));
        assert!(timer.events().is_empty());
        assert_eq!(snapshot.elapsed, ZERO);
    }

    #[test]
    fn test_press_on_commit_tick_starts_once() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT - 1, 0);
        timer.tick(FaceLabel::Top, true, at(1_200));

        assert_eq!(
            timer.events(),
            &[
                TimerEvent::ModeChanged {
                    from: FocusMode::None,
                    to: FocusMode::Work
                },
                TimerEvent::SessionStarted,
            ]
        );
        assert_session_invariant(&timer);
        assert_eq!(timer.snapshot(at(2_200)).elapsed, Duration::from_millis(1_000));
    }

    #[test]
    fn test_clock_going_backwards_saturates() {
        let mut timer = FocusTimer::with_commit_ticks(COMMIT);
        hold(&mut timer, FaceLabel::Top, false, COMMIT, 10_000);
        timer.tick(FaceLabel::Top, true, at(20_000));
        let snapshot = timer.tick(FaceLabel::Top, false, at(19_000));
        assert_eq!(snapshot.elapsed, ZERO);
    }

    #[test]
    fn test_mode_label_mapping() {
        for label in [FaceLabel::Top, FaceLabel::Bottom, FaceLabel::Unknown] {
            assert_eq!(FocusMode::from_label(label).label(), label);
        }
        assert!(FocusMode::Work.is_active());
        assert!(FocusMode::Personal.is_active());
        assert!(!FocusMode::None.is_active());
        assert_eq!(FocusMode::Personal.as_str(), "personal");
    }

    #[test]
    fn test_default_uses_five_tick_window() {
        let mut timer = FocusTimer::default();
        hold(&mut timer, FaceLabel::Bottom, false, 4, 0);
        assert_eq!(timer.state().mode(), FocusMode::None);
        timer.tick(FaceLabel::Bottom, false, at(1_200));
        assert_eq!(timer.state().mode(), FocusMode::Personal);
    }
}
