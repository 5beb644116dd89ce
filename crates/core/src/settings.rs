//! Toolbar dimensions, colors and settings loading.
//!
//! Settings can be built in code or loaded from a RON file when the
//! `serde` feature is enabled:
//!
//! ```ron
//! (
//!     metrics: (item_width: 56.0, toolbar_height: 48.0, pip_width: 20.0, pip_height: 10.0),
//!     style: (
//!         background: (r: 0.2, g: 0.2, b: 0.2, a: 1.0),
//!         pip: (r: 0.2, g: 0.2, b: 0.2, a: 1.0),
//!         icon_tint: (r: 1.0, g: 1.0, b: 1.0, a: 1.0),
//!     ),
//!     preview_duration: (secs: 2, nanos: 0),
//! )
//! ```

use crate::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::path::Path;
use std::time::Duration;

/// The fixed dimensions of a toolbar, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    /// Width of every item in the row.
    pub item_width: f32,
    /// Height of the item row.
    pub toolbar_height: f32,
    /// Width of the pointer pip.
    pub pip_width: f32,
    /// Height of the pointer pip.
    pub pip_height: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            item_width: 48.0,
            toolbar_height: 48.0,
            pip_width: 20.0,
            pip_height: 10.0,
        }
    }
}

/// The colors of a toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    /// Background of the item row.
    pub background: Color,
    /// Fill of the pointer pip.
    pub pip: Color,
    /// Tint applied to item icons.
    pub icon_tint: Color,
}

impl Default for Style {
    fn default() -> Self {
        let background = Color::from_rgb8(0x33, 0x33, 0x33);

        Self {
            background,
            pip: background,
            icon_tint: Color::WHITE,
        }
    }
}

/// Everything configurable about a toolbar that is not part of its menu.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Dimensions.
    pub metrics: Metrics,
    /// Colors.
    pub style: Style,
    /// How long a long-press label preview stays on screen.
    pub preview_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            metrics: Metrics::default(),
            style: Style::default(),
            preview_duration: Duration::from_millis(2000),
        }
    }
}

/// An error loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse settings file.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

/// Loads [`Settings`] from a file path.
///
/// Supports RON format (.ron extension).
pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Settings, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "ron" => {
            let content = std::fs::read_to_string(path)?;
            parse_ron(&content)
        }
        _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
    }
}

/// Loads [`Settings`] from a file, falling back to the defaults on any error.
pub fn load_settings_or_default(path: impl AsRef<Path>) -> Settings {
    match load_settings_from_file(path.as_ref()) {
        Ok(settings) => settings,
        Err(error) => {
            log::warn!(
                "using default toolbar settings, {} could not be loaded: {error}",
                path.as_ref().display()
            );
            Settings::default()
        }
    }
}

#[cfg(feature = "serde")]
fn parse_ron(content: &str) -> Result<Settings, LoadError> {
    ron::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(not(feature = "serde"))]
fn parse_ron(_content: &str) -> Result<Settings, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pip_matches_background() {
        let style = Style::default();

        assert_eq!(style.pip, style.background);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_settings_from_file("/definitely/not/here/toolbar.ron");

        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = load_settings_or_default("/definitely/not/here/toolbar.ron");

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("ayah_toolbar_settings_test.toml");
        std::fs::write(&path, "item_width = 1").expect("write temp file");

        let result = load_settings_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "toml"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_ron_uses_defaults() {
        let settings = parse_ron(
            "(metrics: (item_width: 56.0, toolbar_height: 40.0, pip_width: 16.0, pip_height: 8.0))",
        )
        .expect("valid settings");

        assert_eq!(settings.metrics.item_width, 56.0);
        assert_eq!(settings.style, Style::default());
        assert_eq!(settings.preview_duration, Duration::from_millis(2000));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        assert!(matches!(parse_ron("(metrics: 3"), Err(LoadError::Parse(_))));
    }
}
