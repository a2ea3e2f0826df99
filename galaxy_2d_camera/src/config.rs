//! Startup configuration: the design resolution every camera scales against.
//!
//! The design resolution is read once (usually from a `[display]` table in
//! the project TOML file) and frozen into a `DisplayReference`.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::engine_bail;

/// Design resolution as written in the project file
///
/// ```toml
/// [display]
/// width = 1280
/// height = 720
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Design width in pixels
    pub width: u32,
    /// Design height in pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
        }
    }
}

/// Top-level project file layout; only the `[display]` table is consumed.
#[derive(Debug, Default, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    display: DisplayConfig,
}

impl DisplayConfig {
    /// Parse the `[display]` table of a TOML document.
    ///
    /// A missing table or missing keys fall back to the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        match toml::from_str::<ProjectFile>(content) {
            Ok(project) => Ok(project.display),
            Err(e) => engine_bail!(InvalidConfig, "galaxy2d::Config",
                "Failed to parse display configuration: {}", e),
        }
    }

    /// Read and parse a TOML project file.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => engine_bail!(InvalidConfig, "galaxy2d::Config",
                "Failed to read '{}': {}", path.display(), e),
        }
    }
}

/// Immutable design-resolution constants.
///
/// Built once at startup; owned by the `CameraManager` afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayReference {
    width: f32,
    height: f32,
    aspect_ratio: f32,
}

impl DisplayReference {
    /// Validate a configuration and cache its aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero.
    pub fn new(config: &DisplayConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            engine_bail!(InvalidConfig, "galaxy2d::Config",
                "Display resolution must be positive, got {}x{}", config.width, config.height);
        }

        let width = config.width as f32;
        let height = config.height as f32;
        Ok(Self {
            width,
            height,
            aspect_ratio: width / height,
        })
    }

    /// Design width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Design height in pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
