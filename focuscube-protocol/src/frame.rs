//! Framing for the telemetry UART
//!
//! Frame format:
//! - START (1 byte): 0xAA synchronization byte
//! - LENGTH (1 byte): payload length (0-64)
//! - KIND (1 byte): message kind
//! - PAYLOAD (0-64 bytes): kind-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, KIND, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xAA;

/// Maximum payload size in bytes
///
/// A telemetry record needs under 20; the rest is headroom for new kinds.
pub const MAX_PAYLOAD_SIZE: usize = 64;

/// Maximum encoded frame size (START + LENGTH + KIND + payload + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 3 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur while building, encoding or decoding frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds [`MAX_PAYLOAD_SIZE`]
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// LENGTH byte out of range
    InvalidLength,
    /// Frame kind not understood by the receiver
    UnknownKind(u8),
    /// Payload does not decode as the kind it claims
    InvalidPayload,
    /// Output buffer too small
    BufferTooSmall,
}

/// A message kind plus its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message kind identifier
    pub kind: u8,
    /// Payload bytes
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Build a frame, copying the payload
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload })
    }

    /// Build a frame with no payload
    pub fn empty(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, &b| acc ^ b)
    }

    /// Number of bytes [`Self::encode`] writes
    pub fn encoded_len(&self) -> usize {
        4 + self.payload.len()
    }

    /// Encode into `buffer`, returning the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        let out = buffer.get_mut(..len).ok_or(FrameError::BufferTooSmall)?;

        let length = self.payload.len() as u8;
        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, length, self.kind]);
        let (body, tail) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        tail[0] = Self::checksum(length, self.kind, &self.payload);

        Ok(len)
    }

    /// Encode into a fixed-capacity vector
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Scanning for START
    Sync,
    /// Got START, expecting LENGTH
    Length,
    /// Got LENGTH, expecting KIND
    Kind,
    /// Collecting payload bytes
    Payload,
    /// Expecting CHECKSUM
    Checksum,
}

/// Byte-at-a-time frame decoder
///
/// Bytes outside a frame are skipped, so the decoder resynchronizes on the
/// next START after line noise or a dropped byte.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    length: u8,
    kind: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create a decoder waiting for START
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Sync,
            length: 0,
            kind: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.state = DecodeState::Sync;
        self.length = 0;
        self.kind = 0;
        self.payload.clear();
    }

    /// Feed one byte
    ///
    /// Returns `Ok(Some(frame))` when a frame completes, `Ok(None)` while more
    /// bytes are needed, and `Err` when the partial frame had to be dropped.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            DecodeState::Sync => {
                if byte == FRAME_START {
                    self.state = DecodeState::Length;
                }
            }
            DecodeState::Length => {
                // START is never a valid length; treat it as the real frame start
                if byte == FRAME_START {
                    return Ok(None);
                }
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidLength);
                }
                self.length = byte;
                self.state = DecodeState::Kind;
            }
            DecodeState::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.state = if self.length == 0 {
                    DecodeState::Checksum
                } else {
                    DecodeState::Payload
                };
            }
            DecodeState::Payload => {
                // Bounded by the LENGTH check above
                let _ = self.payload.push(byte);
                if self.payload.len() == self.length as usize {
                    self.state = DecodeState::Checksum;
                }
            }
            DecodeState::Checksum => {
                let expected = Frame::checksum(self.length, self.kind, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }
                let frame = Frame {
                    kind: self.kind,
                    payload: self.payload.clone(),
                };
                self.reset();
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    /// Feed bytes until the first complete frame
    ///
    /// Bytes after that frame are left unconsumed; the count of consumed
    /// bytes is returned alongside the frame.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<Option<(Frame, usize)>, FrameError> {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(frame) = self.push(byte)? {
                return Ok(Some((frame, i + 1)));
            }
        }
        Ok(None)
    }
}
