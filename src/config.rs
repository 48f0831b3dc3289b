//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output location settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where generated icons are written.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Root directory the `icons/` folder is created under.
    pub dir: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Resolve the output root.
    ///
    /// An explicit `--out-dir` wins, then `ICONGEN_OUT_DIR`, then the config
    /// file, then the current directory.
    #[must_use]
    pub fn output_root(&self, explicit: Option<&str>) -> PathBuf {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var("ICONGEN_OUT_DIR").ok())
            .or_else(|| self.output.dir.clone())
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `ICONGEN_CONFIG` environment variable
/// 3. `~/.config/icongen/config.toml`, or `./icongen.toml` when `HOME` is unset
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("ICONGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/icongen/config.toml")
    } else {
        PathBuf::from("icongen.toml")
    }
}
