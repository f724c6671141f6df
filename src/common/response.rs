// src/common/response.rs

use super::crc;
use core::fmt;

/// Number of bytes in every SHT40 response.
pub const RESPONSE_LEN: usize = 6;

/// Error type for decoding a received response.
///
/// Independent of the transport, so it carries no I/O error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// A word's CRC byte does not match the CRC computed over its two data bytes.
    CrcMismatch {
        /// Index of the failing word (0 or 1).
        word: usize,
        /// CRC byte received from the sensor.
        expected: u8,
        /// CRC computed over the received data bytes.
        calculated: u8,
    },
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::CrcMismatch { word, expected, calculated } => write!(
                f,
                "CRC mismatch on word {}: expected {:#04x}, calculated {:#04x}",
                word, expected, calculated
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResponseError {}

/// The six bytes returned for a command: `[w0_hi, w0_lo, crc0, w1_hi, w1_lo, crc1]`.
///
/// Nothing in here is trusted until [`RawResponse::words`] has checked both CRCs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RawResponse(pub [u8; RESPONSE_LEN]);

impl RawResponse {
    /// Builds a well-formed response carrying `words`, CRCs included.
    pub fn from_words(words: [u16; 2]) -> Self {
        let [a0, a1, a2] = crc::encode_word(words[0]);
        let [b0, b1, b2] = crc::encode_word(words[1]);
        RawResponse([a0, a1, a2, b0, b1, b2])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; RESPONSE_LEN] {
        &self.0
    }

    /// Validates both CRCs and returns the two big-endian words.
    ///
    /// Word 0 is checked first; on failure word 1 is not looked at.
    pub fn words(&self) -> Result<[u16; 2], ResponseError> {
        let b = &self.0;
        let first = crc::verify_word(&[b[0], b[1], b[2]], 0)?;
        let second = crc::verify_word(&[b[3], b[4], b[5]], 1)?;
        Ok([first, second])
    }
}

impl From<[u8; RESPONSE_LEN]> for RawResponse {
    fn from(value: [u8; RESPONSE_LEN]) -> Self {
        RawResponse(value)
    }
}
