//! Focus Cube Telemetry Link Protocol
//!
//! The cube streams its timer state over UART to a radio bridge module,
//! which relays it to a phone or desktop over its own wireless link. This
//! crate defines the bytes on that UART.
//!
//! # Protocol Overview
//!
//! Every message travels in a frame:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ KIND │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–64B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Telemetry payloads are [`postcard`]-encoded [`TelemetryRecord`]s. The
//! bridge owns advertising and connection handling; the cube only writes.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;
pub mod telemetry;

pub use frame::{Frame, FrameDecoder, FrameError, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{CubeMessage, PROTOCOL_VERSION};
pub use telemetry::TelemetryRecord;
