//! Configuration type definitions

use core::cmp::Ordering;

use embassy_time::Duration;

use crate::orientation::ClassifierConfig;

/// Default number of identical ticks before an orientation is committed
pub const DEFAULT_COMMIT_TICKS: u32 = 5;

/// Default tick period in milliseconds
pub const DEFAULT_TICK_PERIOD_MS: u64 = 300;

/// Default button debounce window in milliseconds
pub const DEFAULT_BUTTON_DEBOUNCE_MS: u64 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Top threshold is not strictly above the bottom threshold
    ThresholdsOverlap,
    /// Commit window of zero ticks
    ZeroCommitTicks,
    /// Tick period of zero
    ZeroTickPeriod,
}

/// Timer and classifier configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FocusConfig {
    /// Face classification thresholds
    pub classifier: ClassifierConfig,
    /// Consecutive identical labels required to commit a mode
    pub commit_ticks: u32,
    /// Period of the control loop in milliseconds
    pub tick_period_ms: u64,
    /// Time a raw button level must hold before it is accepted
    pub button_debounce_ms: u64,
}

impl FocusConfig {
    pub const DEFAULT: Self = Self {
        classifier: ClassifierConfig::DEFAULT,
        commit_ticks: DEFAULT_COMMIT_TICKS,
        tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        button_debounce_ms: DEFAULT_BUTTON_DEBOUNCE_MS,
    };

    /// Check that the values describe a usable timer
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ClassifierConfig {
            top_threshold,
            bottom_threshold,
        } = self.classifier;
        // NaN on either side compares as None and is rejected
        if top_threshold.partial_cmp(&bottom_threshold) != Some(Ordering::Greater) {
            return Err(ConfigError::ThresholdsOverlap);
        }
        if self.commit_ticks == 0 {
            return Err(ConfigError::ZeroCommitTicks);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    /// Loop period
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Button debounce window
    pub fn button_debounce(&self) -> Duration {
        Duration::from_millis(self.button_debounce_ms)
    }

    /// How long a face must stay up before it is committed
    pub fn commit_window(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.saturating_mul(self.commit_ticks as u64))
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
