//! Recording I2C bus shared by the integration tests.
#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use ssd1306_oled::{Config, Ssd1306};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const COMMAND: u8 = 0x00;
pub const DATA: u8 = 0x40;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub address: u8,
    pub bytes: Vec<u8>,
}

impl Transaction {
    pub fn selector(&self) -> u8 {
        self.bytes[0]
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }
}

/// Logs every transaction as one flat byte string. Clones share the log, so a
/// test keeps one handle while the driver owns the other.
#[derive(Clone, Default)]
pub struct MockI2c {
    log: Rc<RefCell<Vec<Transaction>>>,
    fail: Rc<Cell<bool>>,
}

impl MockI2c {
    pub fn transactions(&self) -> Vec<Transaction> {
        self.log.borrow().clone()
    }

    /// Payloads of all transactions, each prefixed with its selector.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.log.borrow().iter().map(|t| t.bytes.clone()).collect()
    }

    pub fn reset(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bytes = Vec::new();
        for operation in operations.iter() {
            match operation {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Read(_) => panic!("the display is write-only"),
            }
        }
        self.log.borrow_mut().push(Transaction { address, bytes });
        if self.fail.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

pub fn no_splash() -> Config {
    Config {
        splash: false,
        ..Config::default()
    }
}

/// Initialized driver with a blank buffer and an empty bus log.
pub fn ready(width: u8, height: u8) -> (Ssd1306<MockI2c>, MockI2c) {
    let bus = MockI2c::default();
    let mut display = Ssd1306::with_config(bus.clone(), width, height, no_splash());
    display.begin().unwrap();
    bus.reset();
    (display, bus)
}

pub fn cmd(bytes: &[u8]) -> Vec<u8> {
    let mut out = vec![COMMAND];
    out.extend_from_slice(bytes);
    out
}
