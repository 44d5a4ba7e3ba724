//! Timer telemetry record

use focuscube_core::timer::{FocusMode, TimerSnapshot};
use serde::{Deserialize, Serialize};

use crate::frame::FrameError;

/// One timer snapshot as the bridge sees it
///
/// `mode` is one of `"none"`, `"work"` or `"personal"`; `time` is whole
/// seconds of elapsed focus time in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord<'a> {
    pub mode: &'a str,
    pub time: u32,
    /// Button held on the tick this record was taken
    pub active: bool,
    /// A mode is committed
    pub running: bool,
}

impl TelemetryRecord<'static> {
    /// Build a record from a timer snapshot
    pub fn from_snapshot(snapshot: &TimerSnapshot) -> Self {
        Self {
            mode: snapshot.mode.as_str(),
            time: snapshot.elapsed_secs(),
            active: snapshot.active,
            running: snapshot.running,
        }
    }
}

impl<'a> TelemetryRecord<'a> {
    /// Serialize into `buffer`, returning the used prefix
    pub fn encode<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8], FrameError> {
        postcard::to_slice(self, buffer).map_err(|_| FrameError::BufferTooSmall)
    }

    /// Deserialize, borrowing the mode string from `bytes`
    pub fn decode(bytes: &'a [u8]) -> Result<Self, FrameError> {
        postcard::from_bytes(bytes).map_err(|_| FrameError::InvalidPayload)
    }

    /// Mode named by this record, if it is one the cube knows
    pub fn focus_mode(&self) -> Option<FocusMode> {
        match self.mode {
            "none" => Some(FocusMode::None),
            "work" => Some(FocusMode::Work),
            "personal" => Some(FocusMode::Personal),
            _ => None,
        }
    }
}
