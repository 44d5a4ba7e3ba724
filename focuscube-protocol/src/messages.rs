//! Messages the cube sends to the radio bridge

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::telemetry::TelemetryRecord;

/// Bumped when a payload layout changes
pub const PROTOCOL_VERSION: u8 = 1;

// Message kinds: cube → bridge
pub const MSG_TELEMETRY: u8 = 0x30;
pub const MSG_HELLO: u8 = 0x31;

/// Messages from the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CubeMessage<'a> {
    /// Timer snapshot
    Telemetry(TelemetryRecord<'a>),
    /// Sent once after boot so the bridge can check compatibility
    Hello { version: u8 },
}

impl<'a> CubeMessage<'a> {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            CubeMessage::Telemetry(record) => {
                let mut buffer = [0u8; MAX_PAYLOAD_SIZE];
                let payload = record.encode(&mut buffer)?;
                Frame::new(MSG_TELEMETRY, payload)
            }
            CubeMessage::Hello { version } => Frame::new(MSG_HELLO, &[*version]),
        }
    }

    /// Parse a message from a frame, borrowing string data from it
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_TELEMETRY => TelemetryRecord::decode(&frame.payload).map(CubeMessage::Telemetry),
            MSG_HELLO => match frame.payload.as_slice() {
                [version] => Ok(CubeMessage::Hello { version: *version }),
                _ => Err(FrameError::InvalidPayload),
            },
            other => Err(FrameError::UnknownKind(other)),
        }
    }
}
