use crate::buffer::{Bitmap, FrameBuffer};
use crate::bus::Interface;
use crate::command::{CHARGE_PUMP_ON, Command, CommandList, PRECHARGE_PERIODS};
use crate::common::{Geometry, PixelMode, Rotation};
use crate::error::{Error, OledResult};
use core::convert::Infallible;
use embedded_graphics::{
    geometry::Dimensions,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, PointsIter, Size},
    primitives::Rectangle,
};
use embedded_hal::i2c::I2c;
use log::{debug, warn};

pub trait AsFillByte {
    fn as_byte(&self) -> u8;
}

impl AsFillByte for BinaryColor {
    fn as_byte(&self) -> u8 {
        if self.is_on() { 0xFF } else { 0x00 }
    }
}

impl From<BinaryColor> for PixelMode {
    fn from(color: BinaryColor) -> Self {
        if color.is_on() {
            PixelMode::Set
        } else {
            PixelMode::Clear
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub rotation: Rotation,
    /// Draw the boot logo into the buffer during `begin()`. Has no effect
    /// when the `splash` feature is disabled.
    pub splash: bool,
    /// Largest frame buffer `begin()` may allocate, in bytes.
    pub buffer_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rotation: Rotation::Deg0,
            splash: cfg!(feature = "splash"),
            buffer_limit: None,
        }
    }
}

pub struct Ssd1306<I2C: I2c> {
    interface: Interface<I2C>,
    geometry: Geometry,
    rotation: Rotation,
    config: Config,
    buffer: Option<FrameBuffer>,
    contrast: u8,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Binds a driver to `i2c`. No bus traffic happens until `begin()`.
    pub fn new(i2c: I2C, width: u8, height: u8) -> Self {
        Self::with_config(i2c, width, height, Config::default())
    }

    pub fn with_config(i2c: I2C, width: u8, height: u8, config: Config) -> Self {
        Self {
            interface: Interface::new(i2c),
            geometry: Geometry::new(width, height),
            rotation: config.rotation,
            config,
            buffer: None,
            contrast: Geometry::default_contrast(),
        }
    }

    /// Allocates the frame buffer on first use, clears it and runs the
    /// controller power-up sequence.
    ///
    /// If the buffer cannot be allocated nothing is sent to the panel.
    pub fn begin(&mut self) -> OledResult<(), I2C::Error> {
        let Geometry { width, height } = self.geometry;
        debug!("OLED: begin {width}x{height}");

        if self.buffer.is_none() {
            let bytes = self.geometry.buffer_len();
            let buffer = FrameBuffer::allocate(self.geometry, self.config.buffer_limit)
                .ok_or(Error::Allocation { bytes })?;
            self.buffer = Some(buffer);
        }
        self.clear_display();
        self.draw_splash();

        let (com_pins, contrast) = self.geometry.panel_params();
        self.contrast = contrast;

        self.command_list(CommandList::InitClockAndMux);
        self.interface.command(height.saturating_sub(1));
        self.command_list(CommandList::InitOffsetAndPump);
        self.interface.command(CHARGE_PUMP_ON);
        self.command_list(CommandList::InitAddressing);
        self.interface.command(Command::SetComPins.byte());
        self.interface.command(com_pins);
        self.interface.command(Command::SetContrast.byte());
        self.interface.command(contrast);
        self.interface.command(Command::SetPrecharge.byte());
        self.interface.command(PRECHARGE_PERIODS);
        self.command_list(CommandList::InitFinish);

        debug!("OLED: init sent, com pins 0x{com_pins:02X}, contrast 0x{contrast:02X}");
        Ok(())
    }

    #[cfg(feature = "splash")]
    fn draw_splash(&mut self) {
        if !self.config.splash {
            return;
        }
        let logo = crate::splash::for_height(self.geometry.height);
        let x = (i32::from(self.geometry.width) - logo.width.cast_signed()) / 2;
        let y = (i32::from(self.geometry.height) - logo.height.cast_signed()) / 2;
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.draw_bitmap(x, y, logo, Rotation::Deg0, PixelMode::Set);
        }
    }

    #[cfg(not(feature = "splash"))]
    fn draw_splash(&mut self) {}

    /// Pushes the whole frame buffer to the panel.
    pub fn display(&mut self) {
        let Some(buffer) = self.buffer.as_ref() else {
            warn!("OLED: display() before begin(), nothing to send");
            return;
        };
        let window = CommandList::DisplayWindow.as_slice();
        let column_end = self.geometry.width.saturating_sub(1);
        self.interface.command_list(window);
        self.interface.command(column_end);
        self.interface.data(buffer.as_bytes());
    }

    /// Zeroes the frame buffer. The panel is untouched until `display()`.
    pub fn clear_display(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.clear();
        }
    }

    /// Applies `mode` at logical `(x, y)`; out-of-bounds pixels are ignored.
    pub fn draw_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        let rotation = self.rotation;
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.set_pixel(x, y, rotation, mode);
        }
    }

    /// Reads logical `(x, y)` from the buffer, false when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.buffer
            .as_ref()
            .is_some_and(|buffer| buffer.get_pixel(x, y, self.rotation))
    }

    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, mode: PixelMode) {
        let rotation = self.rotation;
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.draw_bitmap(x, y, bitmap, rotation, mode);
        }
    }

    /// Raw frame buffer, `width * ceil(height / 8)` bytes in page order.
    /// Empty until `begin()` succeeds.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        match self.buffer.as_ref() {
            Some(buffer) => buffer.as_bytes(),
            None => &[],
        }
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        match self.buffer.as_mut() {
            Some(buffer) => buffer.as_bytes_mut(),
            None => &mut [],
        }
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Logical width under the current rotation.
    #[must_use]
    pub fn width(&self) -> u32 {
        if self.rotation.is_transposed() {
            u32::from(self.geometry.height)
        } else {
            u32::from(self.geometry.width)
        }
    }

    /// Logical height under the current rotation.
    #[must_use]
    pub fn height(&self) -> u32 {
        if self.rotation.is_transposed() {
            u32::from(self.geometry.width)
        } else {
            u32::from(self.geometry.height)
        }
    }

    /// Contrast chosen for this panel by `begin()`.
    #[must_use]
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Sends one raw command byte.
    pub fn command(&mut self, command: u8) {
        self.interface.command(command);
    }

    /// Swaps lit and unlit pixels in hardware. The buffer is unchanged.
    pub fn invert(&mut self, invert: bool) {
        let command = if invert {
            Command::InvertDisplay
        } else {
            Command::NormalDisplay
        };
        self.interface.command(command.byte());
    }

    /// Drops contrast to zero, or restores the panel's nominal contrast.
    pub fn dim(&mut self, dim: bool) {
        let level = if dim { 0x00 } else { self.contrast };
        self.interface.command(Command::SetContrast.byte());
        self.interface.command(level);
    }

    /// Scrolls pages `start..=stop` right. Values go to the panel unchecked.
    pub fn start_scroll_right(&mut self, start: u8, stop: u8) {
        self.horizontal_scroll(CommandList::RightScrollHead, start, stop);
    }

    pub fn start_scroll_left(&mut self, start: u8, stop: u8) {
        self.horizontal_scroll(CommandList::LeftScrollHead, start, stop);
    }

    /// Scrolls pages `start..=stop` right while moving the whole panel up.
    pub fn start_scroll_diag_right(&mut self, start: u8, stop: u8) {
        self.diagonal_scroll(CommandList::DiagRightScrollHead, start, stop);
    }

    pub fn start_scroll_diag_left(&mut self, start: u8, stop: u8) {
        self.diagonal_scroll(CommandList::DiagLeftScrollHead, start, stop);
    }

    pub fn stop_scroll(&mut self) {
        self.interface.command(Command::DeactivateScroll.byte());
    }

    fn horizontal_scroll(&mut self, head: CommandList, start: u8, stop: u8) {
        self.command_list(head);
        self.scroll_pages(start, stop);
        self.command_list(CommandList::HorizontalScrollTail);
    }

    fn diagonal_scroll(&mut self, head: CommandList, start: u8, stop: u8) {
        self.command_list(CommandList::VerticalScrollArea);
        self.interface.command(self.geometry.height);
        self.command_list(head);
        self.scroll_pages(start, stop);
        self.command_list(CommandList::DiagonalScrollTail);
    }

    fn command_list(&mut self, list: CommandList) {
        self.interface.command_list(list.as_slice());
    }

    /// Start page, frame interval, end page.
    fn scroll_pages(&mut self, start: u8, stop: u8) {
        self.interface.command(start);
        self.interface.command(0x00);
        self.interface.command(stop);
    }

    /// Most recent swallowed bus failure, if any.
    #[must_use]
    pub fn last_bus_error(&self) -> Option<&Error<I2C::Error>> {
        self.interface.last_error()
    }

    pub fn take_bus_error(&mut self) -> Option<Error<I2C::Error>> {
        self.interface.take_error()
    }

    /// Number of bus transactions that have failed since construction.
    #[must_use]
    pub fn bus_error_count(&self) -> u32 {
        self.interface.error_count()
    }

    /// Gives the bus back, dropping the frame buffer.
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<I2C: I2c> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let rotation = self.rotation;
        let Some(buffer) = self.buffer.as_mut() else {
            return Ok(());
        };
        for Pixel(coord, color) in pixels {
            buffer.set_pixel(coord.x, coord.y, rotation, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());

        if clipped_area.is_zero_sized() {
            return Ok(());
        }

        self.draw_iter(clipped_area.points().map(|p| Pixel(p, color)))
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.fill(color.as_byte());
        }
        Ok(())
    }
}

impl<I2C: I2c> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
