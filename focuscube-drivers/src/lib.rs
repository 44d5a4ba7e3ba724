//! Hardware driver implementations
//!
//! This crate provides concrete drivers for the parts on the cube:
//!
//! - Accelerometer (MPU-6500 over async I2C), implementing the core
//!   `Accelerometer` trait
//! - OLED panel (SSD1306 128x64 over async I2C), an `embedded-graphics`
//!   draw target
//! - Push button (active-low GPIO with time-based debounce)

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod imu;
pub mod oled;
