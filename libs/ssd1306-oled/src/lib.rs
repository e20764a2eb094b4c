pub mod buffer;
mod bus;
pub mod command;
pub mod common;
pub mod device;
pub mod driver;
mod error;
#[cfg(feature = "splash")]
pub mod splash;

pub use buffer::{Bitmap, FrameBuffer};
pub use common::{Geometry, PixelMode, Rotation};
pub use device::{DeviceConfig, open};
pub use driver::{Config, Ssd1306};
pub use error::{DeviceError, DeviceResult, Error, OledResult};
