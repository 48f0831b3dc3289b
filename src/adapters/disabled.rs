//! Writer used when no image encoder is available.

use std::path::Path;

use image::RgbaImage;

use crate::error::IconError;
use crate::ports::IconWriter;

/// Reports itself unavailable and refuses every write.
#[derive(Debug, Default)]
pub struct DisabledWriter;

impl IconWriter for DisabledWriter {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn write(&self, _image: &RgbaImage, _path: &Path) -> Result<(), IconError> {
        Err(IconError::EncoderUnavailable)
    }
}
