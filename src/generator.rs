//! Drawing and saving the icon set.

use std::path::Path;

use crate::canvas::draw_badge;
use crate::error::IconError;
use crate::ports::IconWriter;
use crate::request::IconRequest;

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Icons written successfully.
    pub succeeded: usize,
    /// Icons attempted.
    pub total: usize,
}

impl Summary {
    /// Whether every icon was written.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Draw one icon and save it to `path`, creating missing directories.
///
/// # Errors
///
/// Returns an error if `size` is zero, the directory cannot be created,
/// or the writer fails.
pub fn render_icon(writer: &dyn IconWriter, size: u32, path: &Path) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let image = draw_badge(size);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    writer.write(&image, path)
}

/// Generate a single icon, reporting the outcome on stdout.
///
/// Failures are reported and turned into `false`; they never propagate.
pub fn generate(writer: &dyn IconWriter, size: u32, path: &Path) -> bool {
    match render_icon(writer, size, path) {
        Ok(()) => {
            println!("✅ Created icon: {}", path.display());
            true
        }
        Err(e) => {
            println!("❌ Failed to create {}: {e}", path.display());
            false
        }
    }
}

/// Generate every requested icon in order and print the tally.
pub fn generate_all(writer: &dyn IconWriter, requests: &[IconRequest]) -> Summary {
    println!("🎨 Generating extension icons...");

    let succeeded =
        requests.iter().filter(|request| generate(writer, request.size, &request.path)).count();
    let summary = Summary { succeeded, total: requests.len() };

    println!("\n🎉 Done! Created {}/{} icons", summary.succeeded, summary.total);
    summary
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::adapters::disabled::DisabledWriter;
    use crate::adapters::png::PngWriter;
    use crate::request::icon_set;

    /// Per-process scratch path under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{name}_{}", std::process::id()))
    }

    #[test]
    fn render_creates_missing_directories() {
        let dir = scratch("icongen_generator_mkdir_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("a/b/icon.png");

        render_icon(&PngWriter, 16, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn render_rejects_zero_size() {
        let path = scratch("icongen_generator_zero").join("icon.png");
        let err = render_icon(&PngWriter, 0, &path).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
        assert!(!path.exists());
    }

    #[test]
    fn generate_reports_failure_as_false() {
        let path = scratch("icongen_generator_disabled").join("icon.png");
        assert!(!generate(&DisabledWriter, 16, &path));
    }

    #[test]
    fn generate_all_writes_full_set() {
        let dir = scratch("icongen_generator_all_test");
        let _ = std::fs::remove_dir_all(&dir);

        let summary = generate_all(&PngWriter, &icon_set(&dir));

        assert_eq!(summary, Summary { succeeded: 3, total: 3 });
        assert!(summary.all_succeeded());
        for name in ["icon16.png", "icon48.png", "icon128.png"] {
            assert!(dir.join("icons").join(name).exists(), "{name} missing");
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn one_bad_path_does_not_stop_the_batch() {
        let dir = scratch("icongen_generator_partial_test");
        let _ = std::fs::remove_dir_all(&dir);
        // A directory squatting on the target path makes that write fail.
        std::fs::create_dir_all(dir.join("icons/icon48.png")).unwrap();

        let summary = generate_all(&PngWriter, &icon_set(&dir));

        assert_eq!(summary, Summary { succeeded: 2, total: 3 });
        assert!(!summary.all_succeeded());
        assert!(dir.join("icons/icon16.png").is_file());
        assert!(dir.join("icons/icon128.png").is_file());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
