//! Configuration types
//!
//! Values are fixed at build time; the firmware generates a `FocusConfig`
//! constant from `cube.toml` and validates it again at boot.

pub mod types;

pub use types::*;
