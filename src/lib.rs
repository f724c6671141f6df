// src/lib.rs

#![cfg_attr(not(test), no_std)] // no_std outside of tests

#[cfg(feature = "std")]
extern crate std;

// Must come first so the logging macros are visible to the modules below
mod fmt;

pub mod adapter;
pub mod common;
pub mod driver;
pub mod poller;

// Re-export key types for convenience
pub use adapter::{AdapterError, HalBus, HalDevice};
pub use common::{
    ClampPolicy, Command, DeviceConfig, DriverConfig, ErrorKind, I2cBus, I2cDevice, IdentityCheck,
    Measurement, RawMeasurement, SerialNumber, Sht40Error, Timeout,
};
pub use driver::Sht40;
pub use poller::Poller;
