// src/common/error.rs

use super::response::ResponseError;

/// Errors returned by the driver, generic over the transport's error type.
#[derive(Debug, thiserror::Error)]
pub enum Sht40Error<E = ()>
where
    E: core::fmt::Debug, // Needed for the {0:?} format strings below
{
    /// The transport refused to register the device (address conflict, bus not ready).
    #[error("bus attach failed: {0:?}")]
    BusAttach(E),

    /// The identity exchange issued by `initialize` failed on the bus.
    #[error("device not responding: {0:?}")]
    DeviceNotResponding(E),

    /// A bus transaction failed during normal operation (NACK, bus fault, timeout).
    #[error("transport error: {0:?}")]
    Transport(E),

    /// A response word failed its CRC-8 check.
    #[error("checksum mismatch on word {word}: expected {expected:#04x}, calculated {calculated:#04x}")]
    Checksum { word: usize, expected: u8, calculated: u8 },
}

/// Field-less classification of [`Sht40Error`], independent of the transport.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    BusAttach,
    DeviceNotResponding,
    Transport,
    Checksum,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BusAttach => "bus attach",
            ErrorKind::DeviceNotResponding => "device not responding",
            ErrorKind::Transport => "transport",
            ErrorKind::Checksum => "checksum",
        }
    }
}

impl<E: core::fmt::Debug> Sht40Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Sht40Error::BusAttach(_) => ErrorKind::BusAttach,
            Sht40Error::DeviceNotResponding(_) => ErrorKind::DeviceNotResponding,
            Sht40Error::Transport(_) => ErrorKind::Transport,
            Sht40Error::Checksum { .. } => ErrorKind::Checksum,
        }
    }

    /// The transport's error, if this failure came from the bus.
    pub fn transport_error(&self) -> Option<&E> {
        match self {
            Sht40Error::BusAttach(e) | Sht40Error::DeviceNotResponding(e) | Sht40Error::Transport(e) => Some(e),
            Sht40Error::Checksum { .. } => None,
        }
    }
}

impl<E: core::fmt::Debug> From<ResponseError> for Sht40Error<E> {
    fn from(e: ResponseError) -> Self {
        match e {
            ResponseError::CrcMismatch { word, expected, calculated } => {
                Sht40Error::Checksum { word, expected, calculated }
            }
        }
    }
}
