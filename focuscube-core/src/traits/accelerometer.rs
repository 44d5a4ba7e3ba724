//! Accelerometer trait

use crate::orientation::AccelSample;

/// Errors that can occur reading an accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelError {
    /// Bus transaction failed
    Bus,
    /// Device did not identify as the expected part
    WrongDevice,
    /// Device has not been initialized
    NotInitialized,
}

/// Trait for 3-axis accelerometers
///
/// Implementations handle the specific part (MPU-6500, LIS3DH, ...) and
/// return readings already scaled to g.
#[allow(async_fn_in_trait)]
pub trait Accelerometer {
    /// Read one acceleration sample
    ///
    /// Must complete within a bounded bus transaction; the control loop
    /// calls this once per tick.
    async fn read_accel(&mut self) -> Result<AccelSample, AccelError>;
}
