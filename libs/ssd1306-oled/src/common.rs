use log::debug;

/// Fixed 7-bit bus address of the controller.
pub const I2C_ADDRESS: u8 = 0x3C;

/// Stream selector for command bytes.
pub const COMMAND_STREAM: u8 = 0x00;
/// Stream selector for display RAM bytes.
pub const DATA_STREAM: u8 = 0x40;

/// Rows per controller page.
pub const PAGE_HEIGHT: u8 = 8;

const DEFAULT_COM_PINS: u8 = 0x02;
const DEFAULT_CONTRAST: u8 = 0x8F;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Maps `0..=3` onto the four rotations; higher bits are ignored.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// True when logical width and height are swapped relative to the panel.
    #[must_use]
    pub fn is_transposed(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Maps a logical coordinate to the panel's native column/row.
    ///
    /// `width` and `height` are the native (unrotated) panel dimensions. The
    /// caller is responsible for bounds checking against the logical size.
    #[must_use]
    pub fn to_physical(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => {
                let (x, y) = (y, x);
                (width - 1 - x, y)
            }
            Rotation::Deg180 => (width - 1 - x, height - 1 - y),
            Rotation::Deg270 => {
                let (x, y) = (y, x);
                (x, height - 1 - y)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelMode {
    Set,
    Clear,
    Invert,
}

/// Native panel dimensions, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u8,
    pub height: u8,
}

impl Geometry {
    #[must_use]
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn pages(&self) -> usize {
        (self.height as usize).div_ceil(PAGE_HEIGHT as usize)
    }

    /// Frame buffer length: one byte per column per page.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.pages()
    }

    /// COM-pin hardware configuration and nominal contrast for this panel.
    ///
    /// Unknown sizes get the 128x32 defaults.
    #[must_use]
    pub fn panel_params(&self) -> (u8, u8) {
        match (self.width, self.height) {
            (128, 32) => (0x02, 0x8F),
            (128, 64) => (0x12, 0xCF),
            (96, 16) => (0x02, 0xAF),
            (width, height) => {
                debug!("OLED: no panel parameters for {width}x{height}, using defaults");
                (DEFAULT_COM_PINS, DEFAULT_CONTRAST)
            }
        }
    }

    #[must_use]
    pub const fn default_contrast() -> u8 {
        DEFAULT_CONTRAST
    }
}
