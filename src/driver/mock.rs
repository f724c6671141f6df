// src/driver/mock.rs

//! Recording mock transport shared by the driver and poller tests.

use crate::common::{
    config::DeviceConfig,
    hal_traits::{I2cBus, I2cDevice},
    response::{RawResponse, RESPONSE_LEN},
    timing::Timeout,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MockCommError {
    AddressConflict,
    Nack,
    BusFault,
    Timeout,
}

/// One recorded `write_read` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exchange {
    pub write: Vec<u8>,
    pub read_len: usize,
    pub timeout: Timeout,
}

#[derive(Debug)]
enum Reply {
    Bytes([u8; RESPONSE_LEN]),
    // Fill the read buffer, then fail anyway.
    Error(MockCommError, Option<[u8; RESPONSE_LEN]>),
    // Succeed without touching the read buffer.
    Untouched,
}

#[derive(Debug, Default)]
struct DeviceState {
    replies: VecDeque<Reply>,
    exchanges: Vec<Exchange>,
}

// --- Mock Device ---
/// Clones share their state, so a test can keep a handle after moving one into the driver.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockDevice {
    state: Rc<RefCell<DeviceState>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_response(&self, bytes: [u8; RESPONSE_LEN]) {
        self.state.borrow_mut().replies.push_back(Reply::Bytes(bytes));
    }

    pub fn stage_error(&self, error: MockCommError) {
        self.state.borrow_mut().replies.push_back(Reply::Error(error, None));
    }

    pub fn stage_error_with_bytes(&self, error: MockCommError, bytes: [u8; RESPONSE_LEN]) {
        self.state.borrow_mut().replies.push_back(Reply::Error(error, Some(bytes)));
    }

    pub fn stage_untouched(&self) {
        self.state.borrow_mut().replies.push_back(Reply::Untouched);
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.state.borrow().exchanges.clone()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().exchanges.clear();
    }

    pub fn shares_state_with(&self, other: &MockDevice) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl I2cDevice for MockDevice {
    type Error = MockCommError;

    fn write_read(&mut self, write: &[u8], read: &mut [u8], timeout: Timeout) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.exchanges.push(Exchange { write: write.to_vec(), read_len: read.len(), timeout });
        match state.replies.pop_front() {
            Some(Reply::Bytes(bytes)) => {
                read.copy_from_slice(&bytes[..read.len()]);
                Ok(())
            }
            Some(Reply::Error(e, bytes)) => {
                if let Some(bytes) = bytes {
                    read.copy_from_slice(&bytes[..read.len()]);
                }
                Err(e)
            }
            Some(Reply::Untouched) => Ok(()),
            // Nothing staged: the device does not answer.
            None => Err(MockCommError::Nack),
        }
    }
}

// --- Mock Bus ---
#[derive(Debug, Default)]
pub(crate) struct MockBus {
    /// Handed out (as a clone) by every successful attach.
    pub device: MockDevice,
    attach_error: Option<MockCommError>,
    attach_calls: Vec<DeviceConfig>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_attach(&mut self, error: MockCommError) {
        self.attach_error = Some(error);
    }

    pub fn attach_calls(&self) -> &[DeviceConfig] {
        &self.attach_calls
    }
}

impl I2cBus for MockBus {
    type Error = MockCommError;
    type Device = MockDevice;

    fn attach_device(&mut self, config: &DeviceConfig) -> Result<Self::Device, Self::Error> {
        self.attach_calls.push(*config);
        match self.attach_error {
            Some(e) => Err(e),
            None => Ok(self.device.clone()),
        }
    }
}

/// A well-formed measurement response carrying the given ticks.
pub(crate) fn measurement_response(temperature_ticks: u16, humidity_ticks: u16) -> [u8; RESPONSE_LEN] {
    RawResponse::from_words([temperature_ticks, humidity_ticks]).0
}
