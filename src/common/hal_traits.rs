// src/common/hal_traits.rs

use super::config::DeviceConfig;
use super::timing::Timeout;
use core::fmt::Debug;

/// A shared I2C bus on which logical devices can be registered.
///
/// Bus arbitration, clock setup and pin assignment are the implementor's
/// concern; the driver only attaches once and then talks to the device.
pub trait I2cBus {
    /// Associated error type for attach and transfer errors.
    type Error: Debug;

    /// The logical device handle produced by [`attach_device`](I2cBus::attach_device).
    type Device: I2cDevice<Error = Self::Error>;

    /// Registers a device at `config.address`, clocked at `config.speed_hz`.
    ///
    /// Fails if the address is already in use or the bus is not ready.
    fn attach_device(&mut self, config: &DeviceConfig) -> Result<Self::Device, Self::Error>;
}

/// One addressed device on an [`I2cBus`].
pub trait I2cDevice {
    /// Associated error type for transfer errors.
    type Error: Debug;

    /// Writes `write`, then, without releasing the bus, reads `read.len()` bytes.
    ///
    /// This is a single transaction from the bus's point of view (repeated
    /// start). The implementation must give up with an error once `timeout`
    /// elapses; [`Timeout::Blocking`] waits until the bus completes or fails.
    fn write_read(&mut self, write: &[u8], read: &mut [u8], timeout: Timeout) -> Result<(), Self::Error>;
}

impl<T: I2cDevice + ?Sized> I2cDevice for &mut T {
    type Error = T::Error;

    fn write_read(&mut self, write: &[u8], read: &mut [u8], timeout: Timeout) -> Result<(), Self::Error> {
        T::write_read(self, write, read, timeout)
    }
}
