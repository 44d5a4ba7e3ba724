//! Screen layouts for the Focus Cube OLED
//!
//! This crate provides:
//! - `Screen`, a pixel-positioned text layout for the 128x64 panel
//! - `Renderer`, which turns timer snapshots into screens
//! - `draw_screen`, which paints a screen onto any `embedded-graphics` target
//!
//! # Architecture
//!
//! Layout is kept apart from drawing so the screens can be checked on the
//! host without a panel. The firmware renders into a `Screen`, draws it into
//! the panel driver's frame buffer and flushes that over I2C.

#![no_std]

pub mod draw;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use draw::{draw_screen, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use renderer::{format_mm_ss, Renderer};
pub use screen::{Screen, TextItem, TextSize, MAX_ITEMS, TEXT_CAPACITY};
