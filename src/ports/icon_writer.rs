//! Icon writer port: encodes a finished canvas and persists it.

use std::path::Path;

use image::RgbaImage;

use crate::error::IconError;

/// Encodes icons and writes them to disk.
pub trait IconWriter {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this writer can encode at all.
    ///
    /// Checked once before a batch starts so that a missing encoder
    /// produces no partial output.
    fn is_available(&self) -> bool;

    /// Encode `image` and write it to `path`.
    ///
    /// The parent directory is expected to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the file write fails.
    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), IconError>;
}
