//! Board-agnostic core logic for the Focus Cube firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Orientation classification (which face of the cube is up)
//! - Focus timer state machine (orientation debounce + time accounting)
//! - Configuration type definitions
//! - Hardware abstraction traits (accelerometer)
//!
//! Nothing here reads a clock. Every time-dependent operation takes an
//! `embassy_time::Instant` supplied by the caller, so the whole crate runs
//! unchanged under host tests.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod orientation;
pub mod timer;
pub mod traits;
