//! Inertial measurement units

mod mpu6500;

pub use mpu6500::{ImuError, Mpu6500, MPU6500_ADDR};
