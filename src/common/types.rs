// src/common/types.rs

use core::fmt;

use super::conversion::{self, ClampPolicy};

// --- Measurement ---

/// Raw tick values of one measurement, CRC-checked but not converted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    pub temperature_ticks: u16,
    pub humidity_ticks: u16,
}

impl RawMeasurement {
    /// Word 0 of a measurement response is temperature, word 1 humidity.
    pub fn from_words(words: [u16; 2]) -> Self {
        RawMeasurement { temperature_ticks: words[0], humidity_ticks: words[1] }
    }

    /// Converts to physical units and applies `clamp`.
    pub fn convert(&self, clamp: ClampPolicy) -> Measurement {
        Measurement {
            temperature: clamp.temperature(conversion::temperature_celsius(self.temperature_ticks)),
            humidity: clamp.humidity(conversion::humidity_percent(self.humidity_ticks)),
        }
    }
}

/// A decoded reading.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C, {:.2} %RH", self.temperature, self.humidity)
    }
}

// --- Serial Number ---

/// 32-bit serial number of the sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialNumber(pub u32);

impl SerialNumber {
    /// Assembles the serial number from the two response words, high word first.
    #[inline]
    pub const fn from_words(words: [u16; 2]) -> Self {
        SerialNumber(((words[0] as u32) << 16) | words[1] as u32)
    }

    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<SerialNumber> for u32 {
    fn from(value: SerialNumber) -> Self {
        value.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
