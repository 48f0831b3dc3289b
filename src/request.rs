//! The fixed set of icons to generate.

use std::path::{Path, PathBuf};

/// Icon sizes and their paths relative to the output root.
const ICON_SET: &[(u32, &str)] =
    &[(16, "icons/icon16.png"), (48, "icons/icon48.png"), (128, "icons/icon128.png")];

/// One icon to draw: a square edge length and where to save it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Edge length in pixels.
    pub size: u32,
    /// Destination PNG path.
    pub path: PathBuf,
}

/// Build the icon requests, rooted at `root`.
#[must_use]
pub fn icon_set(root: &Path) -> Vec<IconRequest> {
    ICON_SET
        .iter()
        .map(|&(size, rel)| IconRequest { size, path: root.join(rel) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_fixed_sizes() {
        let sizes: Vec<u32> = icon_set(Path::new(".")).iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![16, 48, 128]);
    }

    #[test]
    fn paths_are_rooted() {
        let requests = icon_set(Path::new("out"));
        assert_eq!(requests[0].path, PathBuf::from("out/icons/icon16.png"));
        assert_eq!(requests[1].path, PathBuf::from("out/icons/icon48.png"));
        assert_eq!(requests[2].path, PathBuf::from("out/icons/icon128.png"));
    }
}
