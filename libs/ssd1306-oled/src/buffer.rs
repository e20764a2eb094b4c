use crate::common::{Geometry, PAGE_HEIGHT, PixelMode, Rotation};

/// Row-major 1 bpp image, MSB first, each row padded to a whole byte.
#[derive(Clone, Copy, Debug)]
pub struct Bitmap<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> Bitmap<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// One bit per pixel, packed in the controller's page layout: byte
/// `x + (y / 8) * width` holds column `x` of page `y / 8`, bit 0 on top.
pub struct FrameBuffer {
    geometry: Geometry,
    bytes: Box<[u8]>,
}

impl FrameBuffer {
    /// Allocates a zeroed buffer, or `None` if it would exceed `limit` bytes
    /// or the allocator refuses.
    pub(crate) fn allocate(geometry: Geometry, limit: Option<usize>) -> Option<Self> {
        let len = geometry.buffer_len();
        if limit.is_some_and(|limit| len > limit) {
            return None;
        }
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).ok()?;
        bytes.resize(len, 0x00);
        Some(Self {
            geometry,
            bytes: bytes.into_boxed_slice(),
        })
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0x00);
    }

    pub(crate) fn fill(&mut self, byte: u8) {
        self.bytes.fill(byte);
    }

    /// Byte index and bit mask for a logical coordinate, `None` when it falls
    /// outside the rotated screen.
    fn locate(&self, x: i32, y: i32, rotation: Rotation) -> Option<(usize, u8)> {
        let native_width = i32::from(self.geometry.width);
        let native_height = i32::from(self.geometry.height);
        let (width, height) = if rotation.is_transposed() {
            (native_height, native_width)
        } else {
            (native_width, native_height)
        };
        if !(0..width).contains(&x) || !(0..height).contains(&y) {
            return None;
        }

        let (x, y) = rotation.to_physical(x, y, native_width, native_height);
        let page = (y.cast_unsigned() / u32::from(PAGE_HEIGHT)) as usize;
        let index = x.cast_unsigned() as usize + page * usize::from(self.geometry.width);
        Some((index, 1 << (y & 7)))
    }

    /// Applies `mode` to one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, rotation: Rotation, mode: PixelMode) {
        let Some((index, mask)) = self.locate(x, y, rotation) else {
            return;
        };
        match mode {
            PixelMode::Set => self.bytes[index] |= mask,
            PixelMode::Clear => self.bytes[index] &= !mask,
            PixelMode::Invert => self.bytes[index] ^= mask,
        }
    }

    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32, rotation: Rotation) -> bool {
        self.locate(x, y, rotation)
            .is_some_and(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// Draws `bitmap` with its top-left corner at `(x, y)`. Only set bits are
    /// drawn; clear bits leave the buffer untouched.
    // Bitmaps are bounded by the panel, well inside i32
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &Bitmap<'_>,
        rotation: Rotation,
        mode: PixelMode,
    ) {
        if bitmap.width == 0 || bitmap.height == 0 {
            return;
        }
        let row_bytes = bitmap.width.div_ceil(8) as usize;
        for (row, line) in bitmap
            .data
            .chunks(row_bytes)
            .take(bitmap.height as usize)
            .enumerate()
        {
            for col in 0..bitmap.width as usize {
                let Some(byte) = line.get(col / 8) else {
                    break;
                };
                if byte & (0x80 >> (col % 8)) != 0 {
                    let px = x.saturating_add(col as i32);
                    let py = y.saturating_add(row as i32);
                    self.set_pixel(px, py, rotation, mode);
                }
            }
        }
    }
}
