// src/adapter.rs

//! Bridges any [`embedded_hal::i2c::I2c`] implementation to [`I2cBus`] / [`I2cDevice`].
//!
//! embedded-hal has no notion of attaching a device or of per-transfer
//! timeouts. [`HalBus`] hands its peripheral to the first device attached to
//! it; to put several devices on one physical bus, give each its own `HalBus`
//! wrapping a shared-bus device type such as those from `embedded-hal-bus`.
//! Clock speed and timeouts are configured on the HAL peripheral itself.

use crate::common::{
    config::DeviceConfig,
    hal_traits::{I2cBus, I2cDevice},
    timing::Timeout,
};
use embedded_hal::i2c::I2c;

/// Errors from the embedded-hal adapter.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError<E>
where
    E: core::fmt::Debug,
{
    /// The peripheral was already handed to a device.
    #[error("a device is already attached to this bus")]
    AlreadyAttached,

    /// Error reported by the HAL.
    #[error("I2C error: {0:?}")]
    I2c(E),
}

/// An embedded-hal I2C peripheral that can have one device attached.
#[derive(Debug)]
pub struct HalBus<I2C> {
    i2c: Option<I2C>,
}

impl<I2C> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        HalBus { i2c: Some(i2c) }
    }

    /// Returns the peripheral if no device has taken it.
    pub fn release(self) -> Option<I2C> {
        self.i2c
    }
}

impl<I2C: I2c> I2cBus for HalBus<I2C> {
    type Error = AdapterError<I2C::Error>;
    type Device = HalDevice<I2C>;

    fn attach_device(&mut self, config: &DeviceConfig) -> Result<Self::Device, Self::Error> {
        let i2c = self.i2c.take().ok_or(AdapterError::AlreadyAttached)?;
        Ok(HalDevice::new(i2c, config))
    }
}

/// An embedded-hal I2C peripheral bound to one device address.
#[derive(Debug)]
pub struct HalDevice<I2C> {
    i2c: I2C,
    address: u8,
    speed_hz: u32,
}

impl<I2C> HalDevice<I2C> {
    pub fn new(i2c: I2C, config: &DeviceConfig) -> Self {
        HalDevice { i2c, address: config.address, speed_hz: config.speed_hz }
    }

    #[inline]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Clock speed requested at attach time. Not applied to the peripheral.
    #[inline]
    pub fn speed_hz(&self) -> u32 {
        self.speed_hz
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> I2cDevice for HalDevice<I2C> {
    type Error = AdapterError<I2C::Error>;

    fn write_read(&mut self, write: &[u8], read: &mut [u8], _timeout: Timeout) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, write, read).map_err(AdapterError::I2c)
    }
}
