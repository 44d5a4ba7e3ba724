//! Push button input
//!
//! The button is wired to ground with the internal pull-up enabled, so the
//! pin reads low while pressed.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

/// Debounced button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// Time-based debouncer
///
/// A raw level has to hold for the whole window before it replaces the
/// debounced level. Any flip restarts the window.
#[derive(Debug, Clone, Copy)]
pub struct ButtonDebouncer {
    window: Duration,
    stable: bool,
    raw: bool,
    raw_since: Option<Instant>,
}

impl ButtonDebouncer {
    /// Debouncer that starts released
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            stable: false,
            raw: false,
            raw_since: None,
        }
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed a raw reading taken at `now`
    pub fn update(&mut self, raw_pressed: bool, now: Instant) -> Option<ButtonEdge> {
        if raw_pressed != self.raw || self.raw_since.is_none() {
            self.raw = raw_pressed;
            self.raw_since = Some(now);
        }

        if self.raw == self.stable {
            return None;
        }

        let since = self.raw_since?;
        if now.saturating_duration_since(since) < self.window {
            return None;
        }

        self.stable = self.raw;
        Some(if self.stable {
            ButtonEdge::Pressed
        } else {
            ButtonEdge::Released
        })
    }
}

/// Active-low button on a GPIO pin
pub struct Button<P> {
    pin: P,
    debouncer: ButtonDebouncer,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, debounce: Duration) -> Self {
        Self {
            pin,
            debouncer: ButtonDebouncer::new(debounce),
        }
    }

    /// Read the pin and run it through the debouncer
    pub fn sample(&mut self, now: Instant) -> Result<Option<ButtonEdge>, P::Error> {
        let raw_pressed = self.pin.is_low()?;
        Ok(self.debouncer.update(raw_pressed, now))
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}
