//! Boot logo drawn into the frame buffer by `begin()`.
//!
//! Both images are built at compile time: a one-pixel frame with both
//! diagonals, in row-major MSB-first 1 bpp layout.

use crate::buffer::Bitmap;

pub const TALL_WIDTH: u32 = 48;
pub const TALL_HEIGHT: u32 = 32;
pub const SHORT_WIDTH: u32 = 32;
pub const SHORT_HEIGHT: u32 = 16;

const TALL_LEN: usize = (TALL_WIDTH as usize).div_ceil(8) * TALL_HEIGHT as usize;
const SHORT_LEN: usize = (SHORT_WIDTH as usize).div_ceil(8) * SHORT_HEIGHT as usize;

static TALL_DATA: [u8; TALL_LEN] = framed_cross::<TALL_LEN>(TALL_WIDTH, TALL_HEIGHT);
static SHORT_DATA: [u8; SHORT_LEN] = framed_cross::<SHORT_LEN>(SHORT_WIDTH, SHORT_HEIGHT);

/// Logo for panels taller than 32 rows.
pub static TALL: Bitmap<'static> = Bitmap::new(&TALL_DATA, TALL_WIDTH, TALL_HEIGHT);
/// Logo for 32-row and shorter panels.
pub static SHORT: Bitmap<'static> = Bitmap::new(&SHORT_DATA, SHORT_WIDTH, SHORT_HEIGHT);

/// Picks the logo variant for a panel of the given height.
#[must_use]
pub fn for_height(height: u8) -> &'static Bitmap<'static> {
    if height > 32 { &TALL } else { &SHORT }
}

const fn framed_cross<const N: usize>(width: u32, height: u32) -> [u8; N] {
    let mut data = [0u8; N];
    let row_bytes = width.div_ceil(8) as usize;
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            // Diagonals scaled from the rectangle's corners
            let down = x * (height - 1) == y * (width - 1);
            let up = x * (height - 1) == (height - 1 - y) * (width - 1);
            if edge || down || up {
                data[y as usize * row_bytes + x as usize / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    data
}
