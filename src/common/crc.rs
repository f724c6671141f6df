// src/common/crc.rs

use super::response::ResponseError;
use crc::{Algorithm, Crc};

/// CRC-8 used by Sensirion sensors on every 16-bit word (datasheet section 4.4).
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789"), identical to CRC-8/NRSC-5
pub const SENSIRION_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SENSIRION_CRC);

/// Calculates the CRC-8 of a data word as sent by the sensor.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Verifies one `[msb, lsb, crc]` group and returns the word it carries.
///
/// `word` is the index of the group within the response and is only used to
/// label the error.
///
/// # Returns
///
/// * `Ok(u16)` with the big-endian word if the CRC matches.
/// * `Err(ResponseError::CrcMismatch)` otherwise.
pub fn verify_word(group: &[u8; 3], word: usize) -> Result<u16, ResponseError> {
    let [msb, lsb, received] = *group;
    let calculated = calculate_crc8(&[msb, lsb]);
    if calculated == received {
        Ok(u16::from_be_bytes([msb, lsb]))
    } else {
        Err(ResponseError::CrcMismatch { word, expected: received, calculated })
    }
}

/// Appends the CRC to a word, producing the group the sensor would send.
pub fn encode_word(word: u16) -> [u8; 3] {
    let [msb, lsb] = word.to_be_bytes();
    [msb, lsb, calculate_crc8(&[msb, lsb])]
}
