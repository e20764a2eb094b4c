use core::convert::Infallible;
use linux_embedded_hal::I2CError;
use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error("Could not allocate a {bytes}-byte frame buffer")]
    Allocation { bytes: usize },
    #[error("I2C bus error: {0:?}")]
    Bus(E),
}

pub type OledResult<T, E> = Result<T, Error<E>>;

/// Errors from opening a panel on a Linux I2C character device.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("I2C device error: {0}")]
    I2c(#[from] LinuxI2CError),
    #[error("Display error: {0}")]
    Display(#[from] Error<I2CError>),
    #[error("Infallible")]
    Infallible(#[from] Infallible),
}

pub type DeviceResult<T> = Result<T, DeviceError>;
