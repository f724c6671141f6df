// src/driver/mod.rs

mod transaction;

#[cfg(test)]
pub(crate) mod mock;

use crate::common::{
    command::Command,
    config::{DriverConfig, IdentityCheck},
    error::Sht40Error,
    hal_traits::{I2cBus, I2cDevice},
    response::RESPONSE_LEN,
    timing::Timeout,
    types::{Measurement, RawMeasurement, SerialNumber},
};

/// A ready SHT40 driver bound to one logical bus device.
///
/// Only [`Sht40::initialize`] (or [`Sht40::from_device`]) produces one, so an
/// existing handle always talks to a device that answered its serial number
/// request. Every method takes `&mut self`: one exchange at a time per handle.
#[derive(Debug)]
pub struct Sht40<D>
where
    D: I2cDevice,
{
    device: D,
    // Response staging for the exchange in flight; zeroed outside of one.
    buffer: [u8; RESPONSE_LEN],
    config: DriverConfig,
    serial_number: Option<SerialNumber>,
}

impl<D> Sht40<D>
where
    D: I2cDevice,
{
    /// Attaches the sensor to `bus` and confirms it responds by reading its serial number.
    ///
    /// Issues exactly one attach and, if that succeeds, exactly one bus
    /// transaction. No retries.
    ///
    /// # Errors
    ///
    /// * [`Sht40Error::BusAttach`] if the bus refuses the device.
    /// * [`Sht40Error::DeviceNotResponding`] if the serial number exchange fails on the bus.
    /// * [`Sht40Error::Checksum`] if the serial number fails its CRC and
    ///   `config.identity_check` is [`IdentityCheck::Strict`].
    pub fn initialize<B>(bus: &mut B, config: DriverConfig) -> Result<Self, Sht40Error<D::Error>>
    where
        B: I2cBus<Device = D, Error = D::Error>,
    {
        debug!(
            "attaching device at address {} ({} Hz)",
            config.device.address,
            config.device.speed_hz
        );
        let device = bus.attach_device(&config.device).map_err(|e| {
            error!("Failed to add SHT40 device to bus at address {}", config.device.address);
            Sht40Error::BusAttach(e)
        })?;

        Self::from_device(device, config)
    }

    /// Like [`initialize`](Sht40::initialize) for a device the caller already attached.
    pub fn from_device(device: D, config: DriverConfig) -> Result<Self, Sht40Error<D::Error>> {
        let mut sensor = Sht40 {
            device,
            buffer: [0; RESPONSE_LEN],
            config,
            serial_number: None,
        };

        match sensor.read_serial_number() {
            Ok(snr) => {
                info!("Device serial number {}", snr.as_u32());
                sensor.serial_number = Some(snr);
            }
            Err(Sht40Error::Transport(e)) => return Err(Sht40Error::DeviceNotResponding(e)),
            Err(e @ Sht40Error::Checksum { .. }) => match config.identity_check {
                IdentityCheck::Strict => return Err(e),
                IdentityCheck::Lenient => {
                    warn!("Device answered with a corrupted serial number, continuing");
                }
            },
            Err(e) => return Err(e),
        }

        Ok(sensor)
    }

    /// Performs a high precision measurement with the configured timeout.
    pub fn read_measurement(&mut self) -> Result<Measurement, Sht40Error<D::Error>> {
        self.read_measurement_with_timeout(self.config.timeout)
    }

    /// Performs a high precision measurement, waiting at most `timeout` for the bus.
    ///
    /// Both CRCs are verified before anything is converted; the result is
    /// clamped according to the configured [`ClampPolicy`](crate::common::ClampPolicy).
    pub fn read_measurement_with_timeout(
        &mut self,
        timeout: Timeout,
    ) -> Result<Measurement, Sht40Error<D::Error>> {
        let raw = self.read_raw_measurement_with_timeout(timeout)?;
        Ok(raw.convert(self.config.clamp))
    }

    /// Performs a high precision measurement and returns the CRC-checked ticks.
    pub fn read_raw_measurement(&mut self) -> Result<RawMeasurement, Sht40Error<D::Error>> {
        self.read_raw_measurement_with_timeout(self.config.timeout)
    }

    pub fn read_raw_measurement_with_timeout(
        &mut self,
        timeout: Timeout,
    ) -> Result<RawMeasurement, Sht40Error<D::Error>> {
        let words = self.execute_transaction(Command::MeasureHighPrecision, timeout)?;
        Ok(RawMeasurement::from_words(words))
    }

    /// Reads the serial number from the sensor with the configured timeout.
    pub fn read_serial_number(&mut self) -> Result<SerialNumber, Sht40Error<D::Error>> {
        self.read_serial_number_with_timeout(self.config.timeout)
    }

    pub fn read_serial_number_with_timeout(
        &mut self,
        timeout: Timeout,
    ) -> Result<SerialNumber, Sht40Error<D::Error>> {
        let words = self.execute_transaction(Command::ReadSerialNumber, timeout)?;
        Ok(SerialNumber::from_words(words))
    }

    /// Serial number read during initialization, if it passed its CRC check.
    #[inline]
    pub fn serial_number(&self) -> Option<SerialNumber> {
        self.serial_number
    }

    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Gives back the device handle. The device stays attached to its bus.
    pub fn release(self) -> D {
        self.device
    }
}
