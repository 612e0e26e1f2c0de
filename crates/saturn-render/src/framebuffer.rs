//! Bit-packed 1-bit-per-pixel framebuffer with the SSD1306 page layout.
//!
//! The buffer is split into horizontal pages of 8 rows. Each byte holds one
//! column of a page, least significant bit on top:
//!
//! ```text
//! byte index = x + (y / 8) * width
//! bit index  = y % 8
//! ```

/// Width of the simulated display in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
/// Height of the simulated display in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Monochrome raster. All writes go through [`set_pixel`](Self::set_pixel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Framebuffer {
    /// Create a cleared framebuffer of `ceil(height / 8) * width` bytes.
    pub fn new(width: u32, height: u32) -> Self {
        let pages = height.div_ceil(8);
        Self {
            width,
            height,
            bytes: vec![0; (pages * width) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Light or clear one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, lit: bool) {
        let Some((byte, bit)) = self.locate(x, y) else {
            return;
        };
        if lit {
            self.bytes[byte] |= 1 << bit;
        } else {
            self.bytes[byte] &= !(1 << bit);
        }
    }

    /// Read one pixel. Out-of-range coordinates read as unlit.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(byte, bit)| (self.bytes[byte] >> bit) & 1 == 1)
    }

    /// Raw page-ordered bytes, as a display controller would receive them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether `(x, y)` lies on the display.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u32)> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        Some(((x + (y / 8) * self.width) as usize, y % 8))
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_matches_page_layout() {
        assert_eq!(Framebuffer::default().as_bytes().len(), 1024);
        // Partial trailing page still takes a full row of bytes.
        assert_eq!(Framebuffer::new(10, 9).as_bytes().len(), 20);
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let fb = Framebuffer::default();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_set_get_roundtrip_every_pixel() {
        let mut fb = Framebuffer::default();
        for y in 0..DISPLAY_HEIGHT as i32 {
            for x in 0..DISPLAY_WIDTH as i32 {
                fb.set_pixel(x, y, true);
                assert!(fb.get_pixel(x, y), "pixel ({x}, {y}) not lit");
                fb.set_pixel(x, y, false);
                assert!(!fb.get_pixel(x, y), "pixel ({x}, {y}) not cleared");
            }
        }
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_bit_layout() {
        let mut fb = Framebuffer::default();
        fb.set_pixel(5, 0, true);
        assert_eq!(fb.as_bytes()[5], 0b0000_0001);

        fb.set_pixel(5, 7, true);
        assert_eq!(fb.as_bytes()[5], 0b1000_0001);

        fb.set_pixel(3, 10, true);
        assert_eq!(fb.as_bytes()[3 + 128], 0b0000_0100);

        fb.set_pixel(127, 63, true);
        assert_eq!(fb.as_bytes()[127 + 7 * 128], 0b1000_0000);
    }

    #[test]
    fn test_clearing_one_bit_keeps_neighbours() {
        let mut fb = Framebuffer::default();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(0, 1, true);
        fb.set_pixel(0, 0, false);
        assert!(!fb.get_pixel(0, 0));
        assert!(fb.get_pixel(0, 1));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut fb = Framebuffer::default();
        let before = fb.clone();
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 64), (i32::MIN, i32::MAX), (500, 500)] {
            fb.set_pixel(x, y, true);
            assert!(!fb.get_pixel(x, y));
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut fb = Framebuffer::default();
        for i in 0..64 {
            fb.set_pixel(i * 2, i, true);
        }
        assert_eq!(fb.lit_count(), 64);
        fb.clear();
        for y in 0..DISPLAY_HEIGHT as i32 {
            for x in 0..DISPLAY_WIDTH as i32 {
                assert!(!fb.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_custom_dimensions() {
        let mut fb = Framebuffer::new(16, 12);
        assert!(fb.contains(15, 11));
        assert!(!fb.contains(16, 0));
        fb.set_pixel(15, 11, true);
        assert_eq!(fb.as_bytes()[15 + 16], 0b0000_1000);
    }
}
