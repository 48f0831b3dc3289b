//! PNG writer backed by the `image` crate.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::IconError;
use crate::ports::IconWriter;

/// Writes icons as RGBA PNG files.
#[derive(Debug, Default)]
pub struct PngWriter;

impl IconWriter for PngWriter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn is_available(&self) -> bool {
        ImageFormat::Png.writing_enabled()
    }

    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), IconError> {
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
