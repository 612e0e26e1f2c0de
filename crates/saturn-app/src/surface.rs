//! Upscaled RGBA8 view of the monochrome framebuffer.

use saturn_config::MAX_SURFACE_PIXELS;
use saturn_render::Framebuffer;

const LIT: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const UNLIT: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

/// RGBA8 image of a framebuffer, each display pixel drawn as a
/// `scale × scale` block. Lit pixels are white, unlit pixels opaque black.
pub struct ScaledSurface {
    width: u32,
    height: u32,
    scale: u32,
    pixels: Vec<u8>,
}

impl ScaledSurface {
    /// Surface for a `width × height` display. A zero scale is treated as 1.
    /// Returns `None` when the scaled image exceeds [`MAX_SURFACE_PIXELS`].
    pub fn new(width: u32, height: u32, scale: u32) -> Option<Self> {
        let scale = scale.max(1);
        let width = width.checked_mul(scale)?;
        let height = height.checked_mul(scale)?;
        let pixel_count = u64::from(width).checked_mul(u64::from(height))?;
        if pixel_count > MAX_SURFACE_PIXELS {
            return None;
        }
        let len = usize::try_from(pixel_count).ok()?.checked_mul(4)?;
        Some(Self {
            width,
            height,
            scale,
            pixels: vec![0; len],
        })
    }

    /// Redraw from `framebuffer`, which must match the display size the
    /// surface was created for.
    pub fn draw(&mut self, framebuffer: &Framebuffer) {
        let row_bytes = self.width as usize * 4;
        for (y, row) in self.pixels.chunks_exact_mut(row_bytes).enumerate() {
            let source_y = (y as u32 / self.scale) as i32;
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let source_x = (x as u32 / self.scale) as i32;
                let lit = framebuffer.get_pixel(source_x, source_y);
                pixel.copy_from_slice(if lit { &LIT } else { &UNLIT });
            }
        }
    }

    /// Width in output pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in output pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Row-major RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
