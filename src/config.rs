//! Editor settings
//!
//! Stored as RON in the platform config directory. Missing fields take their
//! defaults, so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::texture::{Color24, ResizeMode, DEFAULT_PALETTE, DEFAULT_SIZE};

/// Largest canvas edge accepted from a config file
pub const MAX_CANVAS_EDGE: u32 = 1024;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Fill for new and cleared canvases
    pub background: Color24,
    /// Color selected at startup
    pub brush_color: Color24,
    pub palette: Vec<Color24>,
    pub export_file_name: String,
    pub resize_mode: ResizeMode,
    /// Preview camera distance at startup
    pub orbit_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// off / error / warn / info / debug / trace
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_SIZE.0,
            canvas_height: DEFAULT_SIZE.1,
            background: Color24::CANVAS_GRAY,
            brush_color: Color24::BLACK,
            palette: DEFAULT_PALETTE.to_vec(),
            export_file_name: "skin.png".to_string(),
            resize_mode: ResizeMode::Stretch,
            orbit_distance: 100.0,
            min_distance: 2.0,
            max_distance: 1000.0,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Default settings file location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skin-editor")
            .join("settings.ron")
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = Self::path();
            if !path.exists() {
                return Self::default();
            }
            match Self::load_from(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            }
        }
    }

    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        Ok(config.sanitized())
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Clamp values that would make the editor unusable
    ///
    /// The skin layout is square, so the canvas height follows the width.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.canvas_width = self.canvas_width.clamp(1, MAX_CANVAS_EDGE);
        if self.canvas_height != self.canvas_width {
            log::warn!(
                "canvas must be square: using {0}x{0} instead of {0}x{1}",
                self.canvas_width,
                self.canvas_height
            );
            self.canvas_height = self.canvas_width;
        }
        if self.palette.is_empty() {
            self.palette = defaults.palette;
        }
        if self.export_file_name.trim().is_empty() {
            self.export_file_name = defaults.export_file_name;
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            self.min_distance = defaults.min_distance;
        }
        if !(self.max_distance.is_finite() && self.max_distance >= self.min_distance) {
            self.max_distance = self.min_distance.max(defaults.max_distance);
        }
        if !self.orbit_distance.is_finite() {
            self.orbit_distance = defaults.orbit_distance;
        }
        self.orbit_distance = self.orbit_distance.clamp(self.min_distance, self.max_distance);
        self
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas_size(), (64, 64));
        assert_eq!(config.background.to_hex(), "#aaaaaa");
        assert_eq!(config.brush_color, Color24::BLACK);
        assert_eq!(config.palette.len(), 16);
        assert_eq!(config.export_file_name, "skin.png");
        assert_eq!(config.resize_mode, ResizeMode::Stretch);
        assert_eq!((config.min_distance, config.max_distance), (2.0, 1000.0));
        assert_eq!(config.orbit_distance, 100.0);
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = EditorConfig::default();
        config.brush_color = Color24::new(0x12, 0xab, 0xef);
        config.resize_mode = ResizeMode::CropCenter;
        config.log_level = "debug".to_string();

        let text = config.to_ron().unwrap();
        assert!(text.contains("\"#12abef\""));
        assert_eq!(EditorConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = EditorConfig::from_ron("(brush_color: \"#ff0000\")").unwrap();
        assert_eq!(config.brush_color, Color24::new(255, 0, 0));
        assert_eq!(config.canvas_size(), (64, 64));
        assert_eq!(config.export_file_name, "skin.png");
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = EditorConfig::from_ron("(background: \"#12345\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_sanitize() {
        let config = EditorConfig::from_ron(
            "(canvas_width: 0, canvas_height: 5000, palette: [], min_distance: 10.0, max_distance: 5.0, orbit_distance: 1.0)",
        )
        .unwrap();
        assert_eq!(config.canvas_size(), (1, 1));
        assert_eq!(config.palette.len(), 16);
        assert_eq!(config.min_distance, 10.0);
        assert!(config.max_distance >= config.min_distance);
        assert_eq!(config.orbit_distance, 10.0);
    }

    #[test]
    fn test_canvas_is_kept_square() {
        let config = EditorConfig::from_ron("(canvas_width: 128, canvas_height: 64)").unwrap();
        assert_eq!(config.canvas_size(), (128, 128));

        let config = EditorConfig::from_ron("(canvas_width: 4096, canvas_height: 32)").unwrap();
        assert_eq!(config.canvas_size(), (MAX_CANVAS_EDGE, MAX_CANVAS_EDGE));

        let config = EditorConfig::from_ron("(canvas_height: 32)").unwrap();
        assert_eq!(config.canvas_size(), (64, 64));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.ron");
        let mut config = EditorConfig::default();
        config.export_file_name = "steve.png".to_string();
        config.save_to(&path).unwrap();

        let loaded = EditorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load_from(dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
