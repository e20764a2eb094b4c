use crate::common::{COMMAND_STREAM, DATA_STREAM, I2C_ADDRESS};
use crate::error::Error;
use embedded_hal::i2c::{I2c, Operation};
use log::{trace, warn};

/// Batches outgoing bytes into one addressed write transaction per call.
///
/// Transfer failures are logged and recorded, never returned.
pub(crate) struct Interface<I2C: I2c> {
    i2c: I2C,
    last_error: Option<Error<I2C::Error>>,
    error_count: u32,
}

impl<I2C: I2c> Interface<I2C> {
    pub(crate) fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            last_error: None,
            error_count: 0,
        }
    }

    pub(crate) fn command(&mut self, command: u8) {
        trace!("OLED: command 0x{command:02X}");
        self.write(COMMAND_STREAM, &[command]);
    }

    pub(crate) fn command_list(&mut self, commands: &[u8]) {
        trace!("OLED: command list {commands:02X?}");
        self.write(COMMAND_STREAM, commands);
    }

    pub(crate) fn data(&mut self, data: &[u8]) {
        self.write(DATA_STREAM, data);
        trace!("OLED: sent {} bytes of data", data.len());
    }

    /// Selector and payload are adjacent writes, so they share one
    /// start/address/stop frame on the wire.
    fn write(&mut self, selector: u8, payload: &[u8]) {
        let prefix = [selector];
        let mut operations = [Operation::Write(&prefix), Operation::Write(payload)];
        if let Err(e) = self.i2c.transaction(I2C_ADDRESS, &mut operations) {
            warn!(
                "OLED: I2C write of {} bytes (selector 0x{selector:02X}) failed: {e:?}",
                payload.len()
            );
            self.error_count = self.error_count.saturating_add(1);
            self.last_error = Some(Error::Bus(e));
        }
    }

    pub(crate) fn last_error(&self) -> Option<&Error<I2C::Error>> {
        self.last_error.as_ref()
    }

    pub(crate) fn take_error(&mut self) -> Option<Error<I2C::Error>> {
        self.last_error.take()
    }

    pub(crate) fn error_count(&self) -> u32 {
        self.error_count
    }

    pub(crate) fn release(self) -> I2C {
        self.i2c
    }
}
