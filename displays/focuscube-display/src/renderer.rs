//! Screens shown by the cube

use core::fmt::Write;

use focuscube_core::timer::{FocusMode, TimerSnapshot};
use heapless::String;

use crate::draw::SCREEN_WIDTH;
use crate::screen::{Screen, TextSize};

/// Row of the rule under the mode title
const TITLE_RULE_Y: i32 = 10;

/// Format seconds as `MM:SS`
///
/// Minutes keep counting past 59, so 7505 s is `125:05`.
pub fn format_mm_ss(secs: u32) -> String<12> {
    let mut out = String::new();
    // 8 digits of minutes + ":" + 2 digits always fits
    let _ = write!(out, "{:02}:{:02}", secs / 60, secs % 60);
    out
}

/// X position that centers `text` on the panel
fn centered_x(text: &str, size: TextSize) -> i32 {
    let width = text.chars().count() as i32 * size.char_width() as i32;
    ((SCREEN_WIDTH as i32 - width) / 2).max(0)
}

/// Builds screens into a reusable buffer
#[derive(Debug, Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Last rendered screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Splash shown while the sensor starts up
    pub fn render_boot(&mut self) -> &Screen {
        self.screen.clear();
        self.screen.push_text(0, 0, TextSize::Medium, "Focus Cube");
        self.screen.push_text(0, 32, TextSize::Small, "Initializing...");
        &self.screen
    }

    /// Shown when the accelerometer cannot be brought up
    pub fn render_fault(&mut self, msg: &str) -> &Screen {
        self.screen.clear();
        self.screen.push_text(0, 0, TextSize::Medium, "SENSOR FAULT");
        self.screen.set_rule(TITLE_RULE_Y + 6);
        self.screen.push_text(0, 32, TextSize::Small, msg);
        &self.screen
    }

    /// Main timer screen
    pub fn render_snapshot(&mut self, snapshot: &TimerSnapshot) -> &Screen {
        self.screen.clear();

        let title = match snapshot.mode {
            FocusMode::Work => "WORK FOCUS",
            FocusMode::Personal => "PERSONAL FOCUS",
            FocusMode::None => "PLACE CUBE",
        };
        self.screen.push_text(0, 0, TextSize::Small, title);
        self.screen.set_rule(TITLE_RULE_Y);

        if snapshot.mode.is_active() {
            let secs = snapshot.elapsed_secs();
            let clock = format_mm_ss(secs);
            self.screen.push_text(
                centered_x(&clock, TextSize::Large),
                20,
                TextSize::Large,
                &clock,
            );

            let mut total: String<16> = String::new();
            let _ = write!(total, "({}s)", secs);
            self.screen
                .push_text(centered_x(&total, TextSize::Small), 50, TextSize::Small, &total);
        } else {
            let idle = "00:00";
            self.screen
                .push_text(centered_x(idle, TextSize::Medium), 25, TextSize::Medium, idle);
            let hint = "Position cube";
            self.screen
                .push_text(centered_x(hint, TextSize::Small), 50, TextSize::Small, hint);
        }

        &self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_time::Duration;

    fn running(mode: FocusMode, secs: u64) -> TimerSnapshot {
        TimerSnapshot {
            mode,
            elapsed: Duration::from_secs(secs),
            running: true,
            active: true,
        }
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(3599), "59:59");
        assert_eq!(format_mm_ss(7505), "125:05");
        assert_eq!(format_mm_ss(u32::MAX), "71582788:15");
    }

    #[test]
    fn test_boot_screen() {
        let mut renderer = Renderer::new();
        let screen = renderer.render_boot();
        assert!(screen.find("Focus Cube").is_some());
        assert!(screen.find("Initializing...").is_some());
        assert_eq!(screen.rule(), None);
    }

    #[test]
    fn test_fault_screen() {
        let mut renderer = Renderer::new();
        let screen = renderer.render_fault("IMU not found");
        assert!(screen.find("SENSOR FAULT").is_some());
        assert!(screen.find("IMU not found").is_some());
    }

    #[test]
    fn test_idle_screen() {
        let mut renderer = Renderer::new();
        let screen = renderer.render_snapshot(&TimerSnapshot::IDLE);

        assert!(screen.find("PLACE CUBE").is_some());
        assert_eq!(screen.rule(), Some(TITLE_RULE_Y));
        assert_eq!(screen.find("00:00").unwrap().size, TextSize::Medium);
        assert!(screen.find("Position cube").is_some());
    }

    #[test]
    fn test_work_screen() {
        let mut renderer = Renderer::new();
        let screen = renderer.render_snapshot(&running(FocusMode::Work, 125));

        assert!(screen.find("WORK FOCUS").is_some());
        assert_eq!(screen.find("02:05").unwrap().size, TextSize::Large);
        assert!(screen.find("(125s)").is_some());
        assert!(screen.find("Position cube").is_none());
    }

    #[test]
    fn test_armed_screen_shows_banked_time() {
        let snapshot = TimerSnapshot {
            active: false,
            ..running(FocusMode::Personal, 61)
        };
        let mut renderer = Renderer::new();
        let screen = renderer.render_snapshot(&snapshot);

        assert!(screen.find("PERSONAL FOCUS").is_some());
        assert!(screen.find("01:01").is_some());
        assert!(screen.find("(61s)").is_some());
    }

    #[test]
    fn test_rerender_replaces_items() {
        let mut renderer = Renderer::new();
        renderer.render_snapshot(&running(FocusMode::Work, 10));
        let screen = renderer.render_snapshot(&TimerSnapshot::IDLE);
        assert!(screen.find("WORK FOCUS").is_none());
        assert_eq!(screen.items().len(), 3);
    }

    #[test]
    fn test_clock_is_centered() {
        let mut renderer = Renderer::new();
        let screen = renderer.render_snapshot(&running(FocusMode::Work, 0));
        let clock = screen.find("00:00").unwrap();
        // 5 glyphs of 10 px
        assert_eq!(clock.x, (128 - 50) / 2);
    }
}
