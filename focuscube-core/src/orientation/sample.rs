//! Accelerometer sample type

/// One 3-axis acceleration reading in units of g
///
/// At rest the vector points away from the ground, so a cube lying with its
/// top face up reads roughly `z = +1.0`.
///
/// Only `z` drives the current classification policy. `x` and `y` are
/// carried so a later tilt-rejection rule can use them without changing the
/// sensor interface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    /// Create a sample from its three components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
