//! SHT40 command definitions.
//!
//! Every command is a single opcode byte written to the sensor, answered by a
//! six byte response (see [`RawResponse`](super::response::RawResponse)).

use core::fmt;
use core::time::Duration;

use super::timing;

/// Represents an SHT40 command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Measure temperature and humidity with high repeatability (`0xFD`).
    MeasureHighPrecision,
    /// Read the 32-bit serial number (`0x89`).
    ReadSerialNumber,
}

impl Command {
    /// The opcode byte sent on the bus.
    #[inline]
    pub const fn opcode(self) -> u8 {
        match self {
            Command::MeasureHighPrecision => 0xFD,
            Command::ReadSerialNumber => 0x89,
        }
    }

    /// Worst-case time the sensor needs before the response can be read.
    ///
    /// The driver issues every command as one write-then-read transaction and
    /// leaves waiting to the transport, so this is informational for
    /// transports that poll or retry an address NACK themselves.
    #[inline]
    pub const fn max_duration(self) -> Duration {
        match self {
            Command::MeasureHighPrecision => timing::HIGH_PRECISION_MEASUREMENT_MAX,
            Command::ReadSerialNumber => timing::SERIAL_NUMBER_READ_MAX,
        }
    }

    /// Frames the command as the bytes written on the bus.
    #[inline]
    pub const fn encode(self) -> [u8; 1] {
        [self.opcode()]
    }

    /// Looks up a command by opcode.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            0xFD => Some(Command::MeasureHighPrecision),
            0x89 => Some(Command::ReadSerialNumber),
            _ => None,
        }
    }
}

impl From<Command> for u8 {
    fn from(value: Command) -> Self {
        value.opcode()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MeasureHighPrecision => write!(f, "measure high precision ({:#04x})", self.opcode()),
            Command::ReadSerialNumber => write!(f, "read serial number ({:#04x})", self.opcode()),
        }
    }
}
