use crate::common::Rotation;
use crate::driver::{Config, Ssd1306};
use crate::error::DeviceResult;
use linux_embedded_hal::I2cdev;
use log::info;

const DEFAULT_I2C_BUS_PATH: &str = "/dev/i2c-1";
const DEFAULT_WIDTH: u8 = 128;
const DEFAULT_HEIGHT: u8 = 64;
const DEFAULT_ROTATION: Rotation = Rotation::Deg0;

#[derive(Default)]
pub struct DeviceConfig {
    pub i2c_bus_path: Option<String>,
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub rotation: Option<Rotation>,
    pub splash: Option<bool>,
}

/// Opens the panel on a Linux I2C character device and runs `begin()`.
pub fn open(config: DeviceConfig) -> DeviceResult<Ssd1306<I2cdev>> {
    let i2c_bus_path = config
        .i2c_bus_path
        .unwrap_or_else(|| DEFAULT_I2C_BUS_PATH.to_string());
    let width = config.width.unwrap_or(DEFAULT_WIDTH);
    let height = config.height.unwrap_or(DEFAULT_HEIGHT);
    let driver_config = Config {
        rotation: config.rotation.unwrap_or(DEFAULT_ROTATION),
        splash: config.splash.unwrap_or(Config::default().splash),
        ..Config::default()
    };

    info!("Initializing {width}x{height} OLED on {i2c_bus_path}...");
    let i2c_bus = I2cdev::new(&i2c_bus_path)?;

    let mut display = Ssd1306::with_config(i2c_bus, width, height, driver_config);
    display.begin()?;
    info!("OLED initialized.");

    Ok(display)
}
