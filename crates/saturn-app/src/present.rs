//! Frame presentation backends.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use saturn_render::Framebuffer;

use crate::error::AppError;
use crate::surface::ScaledSurface;

/// Destination for finished frames.
pub trait Present {
    /// Show one finished frame.
    fn present(&mut self, framebuffer: &Framebuffer) -> Result<(), AppError>;

    /// Whether the user asked to stop. Checked between frames.
    fn quit_requested(&mut self) -> Result<bool, AppError> {
        Ok(false)
    }
}

/// Headless presenter writing every frame as `frame_NNNNN.png`.
pub struct PngSnapshots {
    dir: PathBuf,
    surface: ScaledSurface,
    next_index: u64,
}

impl PngSnapshots {
    /// Writer for a `width × height` display upscaled by `scale`. `dir` is
    /// created if missing.
    pub fn new(dir: &Path, width: u32, height: u32, scale: u32) -> Result<Self, AppError> {
        let surface = ScaledSurface::new(width, height, scale).ok_or(
            AppError::SurfaceTooLarge {
                width,
                height,
                scale,
            },
        )?;
        std::fs::create_dir_all(dir).map_err(|source| AppError::Snapshot {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            surface,
            next_index: 0,
        })
    }

    /// Path the next frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", self.next_index))
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.next_index
    }
}

impl Present for PngSnapshots {
    fn present(&mut self, framebuffer: &Framebuffer) -> Result<(), AppError> {
        self.surface.draw(framebuffer);

        let path = self.next_path();
        let file = File::create(&path).map_err(|source| AppError::Snapshot {
            path: path.clone(),
            source,
        })?;

        let mut encoder = png::Encoder::new(
            BufWriter::new(file),
            self.surface.width(),
            self.surface.height(),
        );
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.surface.pixels())?;
        writer.finish()?;

        tracing::debug!("Wrote {}", path.display());
        self.next_index += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_naming() {
        let tmp = tempfile::tempdir().unwrap();
        let mut snapshots = PngSnapshots::new(tmp.path(), 16, 8, 1).unwrap();
        assert_eq!(snapshots.next_path(), tmp.path().join("frame_00000.png"));

        snapshots.present(&Framebuffer::new(16, 8)).unwrap();
        snapshots.present(&Framebuffer::new(16, 8)).unwrap();
        assert_eq!(snapshots.frames_written(), 2);
        assert!(tmp.path().join("frame_00000.png").exists());
        assert!(tmp.path().join("frame_00001.png").exists());
    }

    #[test]
    fn test_snapshot_decodes_to_scaled_image() {
        let tmp = tempfile::tempdir().unwrap();
        let mut fb = Framebuffer::new(16, 8);
        fb.set_pixel(1, 0, true);

        let mut snapshots = PngSnapshots::new(tmp.path(), 16, 8, 3).unwrap();
        snapshots.present(&fb).unwrap();

        let file = File::open(tmp.path().join("frame_00000.png")).unwrap();
        let mut reader = png::Decoder::new(file).read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (48, 24));
        assert_eq!(info.color_type, png::ColorType::Rgba);

        // Display pixel (1, 0) covers output columns 3..6 of the first rows.
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
        assert_eq!(&buf[3 * 4..3 * 4 + 4], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_oversized_surface_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = PngSnapshots::new(tmp.path(), 128, 64, 100_000);
        assert!(matches!(
            result,
            Err(AppError::SurfaceTooLarge {
                scale: 100_000,
                ..
            })
        ));
    }

    #[test]
    fn test_snapshot_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        PngSnapshots::new(&nested, 128, 64, 1).unwrap();
        assert!(nested.is_dir());
    }
}
