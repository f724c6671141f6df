// src/common/timing.rs

use core::time::Duration;

// Datasheet values (SHT4x datasheet, Table 4 "System timing specifications").
// These are maximums; typical values are a bit lower.

/// Maximum conversion time of a high repeatability measurement.
pub const HIGH_PRECISION_MEASUREMENT_MAX: Duration = Duration::from_micros(8300);
/// The serial number is available immediately; allow the soft command time.
pub const SERIAL_NUMBER_READ_MAX: Duration = Duration::from_millis(1);

/// Default period between measurements when polling.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(2);

/// How long a transport may take to complete one bus transaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Timeout {
    /// Wait until the transport completes or fails.
    #[default]
    Blocking,
    /// Give up after the given duration.
    After(Duration),
}

impl Timeout {
    /// Timeout long enough for `command` to convert, plus `margin` for bus traffic.
    pub fn for_command(command: super::command::Command, margin: Duration) -> Self {
        Timeout::After(command.max_duration() + margin)
    }

    /// The bounded duration, or `None` for [`Timeout::Blocking`].
    #[inline]
    pub const fn as_duration(&self) -> Option<Duration> {
        match self {
            Timeout::Blocking => None,
            Timeout::After(d) => Some(*d),
        }
    }

    /// Whole milliseconds, rounded up; `-1` for blocking.
    ///
    /// Matches the convention of transports that take a signed millisecond
    /// count where a negative value means "wait forever".
    pub fn as_millis_or_forever(&self) -> i32 {
        match self {
            Timeout::Blocking => -1,
            Timeout::After(d) => {
                let ms = d.as_micros().div_ceil(1000);
                i32::try_from(ms).unwrap_or(i32::MAX)
            }
        }
    }
}

impl From<Duration> for Timeout {
    fn from(value: Duration) -> Self {
        Timeout::After(value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Timeout {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Timeout::Blocking => defmt::write!(f, "Blocking"),
            Timeout::After(d) => defmt::write!(f, "After({=u64}us)", d.as_micros() as u64),
        }
    }
}
