//! Configuration compiled in from cube.toml
//!
//! build.rs has already range-checked the values; `load` checks them again
//! against the timer's own rules and falls back to defaults if they fail.

use defmt::*;
use focuscube_core::config::FocusConfig;
use focuscube_core::orientation::ClassifierConfig;

include!(concat!(env!("OUT_DIR"), "/cube_config.rs"));

/// Validated timer configuration
pub fn load() -> FocusConfig {
    match CUBE_CONFIG.validate() {
        Ok(()) => {
            info!(
                "Config: top>{} bottom<{} commit={} ticks @ {}ms",
                CUBE_CONFIG.classifier.top_threshold,
                CUBE_CONFIG.classifier.bottom_threshold,
                CUBE_CONFIG.commit_ticks,
                CUBE_CONFIG.tick_period_ms
            );
            CUBE_CONFIG
        }
        Err(e) => {
            error!("cube.toml rejected: {:?}", e);
            error!("Using default configuration");
            FocusConfig::DEFAULT
        }
    }
}
