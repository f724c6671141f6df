// src/common/config.rs

use super::conversion::ClampPolicy;
use super::timing::Timeout;

/// Bus address of SHT4x-A parts (and the SHT40-AD1B most boards carry).
pub const DEFAULT_ADDRESS: u8 = 0x44;
/// Standard-mode I2C clock.
pub const DEFAULT_SPEED_HZ: u32 = 100_000;

/// How the sensor is registered on the bus.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// 7-bit device address.
    pub address: u8,
    /// Bus clock for this device, in Hz.
    pub speed_hz: u32,
}

impl DeviceConfig {
    /// SHT4x-B parts answer on 0x45, SHT4x-C on 0x46.
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_speed_hz(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig { address: DEFAULT_ADDRESS, speed_hz: DEFAULT_SPEED_HZ }
    }
}

/// What `initialize` does when the serial number fails its CRC check.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdentityCheck {
    /// Initialization fails with a checksum error.
    #[default]
    Strict,
    /// The device answered, so initialization succeeds; no serial number is cached.
    Lenient,
}

/// Driver settings, fixed for the lifetime of the handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    pub device: DeviceConfig,
    /// Timeout passed to every transaction unless overridden per call.
    pub timeout: Timeout,
    pub clamp: ClampPolicy,
    pub identity_check: IdentityCheck,
}

impl DriverConfig {
    pub const fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    pub const fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    pub const fn with_identity_check(mut self, identity_check: IdentityCheck) -> Self {
        self.identity_check = identity_check;
        self
    }
}
