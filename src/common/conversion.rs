// src/common/conversion.rs

//! Tick to physical unit conversion (SHT4x datasheet, section 4.6).
//!
//! `T[°C] = -45 + 175 * S_T / 65535` and `RH[%] = -6 + 125 * S_RH / 65535`,
//! where `S_T` and `S_RH` are the raw 16-bit ticks. The ratio is never
//! computed in integer arithmetic on its own; that would truncate it to 0 or 1.

/// Full-scale tick value (2^16 - 1).
pub const TICKS_FULL_SCALE: u16 = u16::MAX;

const FULL_SCALE: f32 = TICKS_FULL_SCALE as f32;
const FULL_SCALE_I64: i64 = TICKS_FULL_SCALE as i64;

/// Unclamped temperature in °C.
#[inline]
pub fn temperature_celsius(ticks: u16) -> f32 {
    -45.0 + 175.0 * (f32::from(ticks) / FULL_SCALE)
}

/// Unclamped relative humidity in %RH.
#[inline]
pub fn humidity_percent(ticks: u16) -> f32 {
    -6.0 + 125.0 * (f32::from(ticks) / FULL_SCALE)
}

/// Unclamped temperature in milli-degrees Celsius, rounded to nearest.
///
/// For targets without an FPU.
pub fn temperature_milli_celsius(ticks: u16) -> i32 {
    (-45_000 + div_round(175_000 * i64::from(ticks), FULL_SCALE_I64)) as i32
}

/// Unclamped relative humidity in milli-percent, rounded to nearest.
pub fn humidity_milli_percent(ticks: u16) -> i32 {
    (-6_000 + div_round(125_000 * i64::from(ticks), FULL_SCALE_I64)) as i32
}

// Both operands are non-negative here.
#[inline]
fn div_round(num: i64, den: i64) -> i64 {
    (num + den / 2) / den
}

/// Lowest temperature the part is specified for.
pub const TEMPERATURE_MIN_C: f32 = -40.0;
/// Highest temperature reported.
pub const TEMPERATURE_MAX_C: f32 = 100.0;
pub const HUMIDITY_MIN_PERCENT: f32 = 0.0;
pub const HUMIDITY_MAX_PERCENT: f32 = 100.0;

/// Which physical bounds are enforced on a converted reading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClampPolicy {
    /// Temperature into `[-40, 100]` °C, humidity into `[0, 100]` %RH.
    #[default]
    Symmetric,
    /// Only the temperature ceiling (100 °C) and the humidity floor (0 %RH).
    Reference,
    /// Raw datasheet formula, no bounds.
    None,
}

impl ClampPolicy {
    pub fn temperature(self, celsius: f32) -> f32 {
        match self {
            ClampPolicy::Symmetric => celsius.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            ClampPolicy::Reference => celsius.min(TEMPERATURE_MAX_C),
            ClampPolicy::None => celsius,
        }
    }

    pub fn humidity(self, percent: f32) -> f32 {
        match self {
            ClampPolicy::Symmetric => percent.clamp(HUMIDITY_MIN_PERCENT, HUMIDITY_MAX_PERCENT),
            ClampPolicy::Reference => percent.max(HUMIDITY_MIN_PERCENT),
            ClampPolicy::None => percent,
        }
    }
}
