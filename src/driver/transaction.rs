// src/driver/transaction.rs

use super::Sht40;
use crate::common::{
    command::Command,
    error::Sht40Error,
    hal_traits::I2cDevice,
    response::{RawResponse, ResponseError, RESPONSE_LEN},
    timing::Timeout,
};

impl<D> Sht40<D>
where
    D: I2cDevice,
{
    /// Executes one command-response exchange and returns the two CRC-checked words.
    ///
    /// The scratch buffer is cleared before the transfer and again after the
    /// response has been copied out, so nothing from one exchange can be
    /// decoded by the next. On a transport error the buffer is never read.
    pub(super) fn execute_transaction(
        &mut self,
        command: Command,
        timeout: Timeout,
    ) -> Result<[u16; 2], Sht40Error<D::Error>> {
        self.buffer = [0; RESPONSE_LEN];

        trace!("sending command {}", command.opcode());
        let transfer = self.device.write_read(&command.encode(), &mut self.buffer, timeout);
        let response = RawResponse(self.buffer);
        self.buffer = [0; RESPONSE_LEN];

        if let Err(e) = transfer {
            error!("Command {} failed: transport error", command.opcode());
            return Err(Sht40Error::Transport(e));
        }

        response.words().map_err(|e| {
            let ResponseError::CrcMismatch { word, .. } = e;
            error!("Command {} failed: checksum mismatch on word {}", command.opcode(), word);
            Sht40Error::from(e)
        })
    }
}
