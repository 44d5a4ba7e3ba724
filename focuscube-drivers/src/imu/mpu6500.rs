//! MPU-6500 accelerometer driver
//!
//! Only the accelerometer is used; the gyro stays at its power-on settings.

use embedded_hal_async::i2c::I2c;
use focuscube_core::orientation::AccelSample;
use focuscube_core::traits::{AccelError, Accelerometer};

/// I2C address with AD0 low
pub const MPU6500_ADDR: u8 = 0x68;

/// WHO_AM_I value for the MPU-6500
const WHO_AM_I_EXPECTED: u8 = 0x70;

/// LSB per g at ±2 g full scale
const ACCEL_SCALE_2G: f32 = 16384.0;

mod reg {
    pub const CONFIG: u8 = 0x1A;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_CONFIG_2: u8 = 0x1D;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

/// MPU-6500 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// I2C transaction failed
    Bus,
    /// WHO_AM_I returned something other than an MPU-6500
    WrongDevice(u8),
    /// `read_accel` called before `init`
    NotInitialized,
}

impl From<ImuError> for AccelError {
    fn from(err: ImuError) -> Self {
        match err {
            ImuError::Bus => AccelError::Bus,
            ImuError::WrongDevice(_) => AccelError::WrongDevice,
            ImuError::NotInitialized => AccelError::NotInitialized,
        }
    }
}

/// MPU-6500 on an async I2C bus
pub struct Mpu6500<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c> Mpu6500<I2C> {
    /// Driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, MPU6500_ADDR)
    }

    /// Driver at a specific address (0x69 with AD0 high)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
        }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn read_register(&mut self, register: u8) -> Result<u8, ImuError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .await
            .map_err(|_| ImuError::Bus)?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, register: u8, value: u8) -> Result<(), ImuError> {
        self.i2c
            .write(self.address, &[register, value])
            .await
            .map_err(|_| ImuError::Bus)
    }

    /// Check that an MPU-6500 answers at the address
    pub async fn probe(&mut self) -> Result<(), ImuError> {
        match self.read_register(reg::WHO_AM_I).await? {
            WHO_AM_I_EXPECTED => Ok(()),
            other => Err(ImuError::WrongDevice(other)),
        }
    }

    /// Wake the part and configure ±2 g with the 41 Hz low-pass filter
    pub async fn init(&mut self) -> Result<(), ImuError> {
        self.probe().await?;

        // Clear SLEEP, auto-select the PLL clock
        self.write_register(reg::PWR_MGMT_1, 0x01).await?;
        // Gyro/temp DLPF 41 Hz
        self.write_register(reg::CONFIG, 0x03).await?;
        // ±2 g
        self.write_register(reg::ACCEL_CONFIG, 0x00).await?;
        // Accel DLPF 41 Hz
        self.write_register(reg::ACCEL_CONFIG_2, 0x03).await?;

        self.initialized = true;
        Ok(())
    }

    /// Burst-read the three accel axes, scaled to g
    pub async fn read_accel(&mut self) -> Result<AccelSample, ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }

        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[reg::ACCEL_XOUT_H], &mut raw)
            .await
            .map_err(|_| ImuError::Bus)?;

        let axis = |hi: u8, lo: u8| i16::from_be_bytes([hi, lo]) as f32 / ACCEL_SCALE_2G;
        Ok(AccelSample::new(
            axis(raw[0], raw[1]),
            axis(raw[2], raw[3]),
            axis(raw[4], raw[5]),
        ))
    }
}

impl<I2C: I2c> Accelerometer for Mpu6500<I2C> {
    async fn read_accel(&mut self) -> Result<AccelSample, AccelError> {
        Ok(Mpu6500::read_accel(self).await?)
    }
}
