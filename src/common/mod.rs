// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod config;
pub mod conversion;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod response;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::Command;

// From config.rs
pub use config::{DeviceConfig, DriverConfig, IdentityCheck};

// From conversion.rs
pub use conversion::{
    humidity_milli_percent, humidity_percent, temperature_celsius, temperature_milli_celsius,
    ClampPolicy,
};

// From crc.rs
pub use crc::{calculate_crc8, encode_word, verify_word};

// From error.rs
pub use error::{ErrorKind, Sht40Error};

// From hal_traits.rs
pub use hal_traits::{I2cBus, I2cDevice};

// From response.rs
pub use response::{RawResponse, ResponseError, RESPONSE_LEN};

// From timing.rs
pub use timing::Timeout;

// From types.rs
pub use types::{Measurement, RawMeasurement, SerialNumber};
