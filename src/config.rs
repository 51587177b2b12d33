//! Display and edit configuration
//!
//! Stored in `~/.config/grid-core/config.yaml`. Every field has a default,
//! so a partial file (or none at all) still loads.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GridError, Result};

/// RGBA color, written as `#RRGGBB` or `#RRGGBBAA` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        let invalid = |reason: String| GridError::InvalidColor {
            value: s.to_string(),
            reason,
        };
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            let digits = hex.get(range).ok_or_else(|| invalid("not ASCII hex".into()))?;
            u8::from_str_radix(digits, 16).map_err(|e| invalid(e.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
            n => Err(invalid(format!("expected 6 or 8 hex digits, got {}", n))),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Colors the host uses to paint the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub grid_line: Color,
    pub header_background: Color,
    pub selection: Color,
    pub active_cell_border: Color,
    pub editor_background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1e, 0x1f, 0x22),
            foreground: Color::rgb(0xdf, 0xe1, 0xe5),
            grid_line: Color::rgb(0x39, 0x3b, 0x40),
            header_background: Color::rgb(0x2b, 0x2d, 0x30),
            selection: Color::rgba(0x35, 0x74, 0xf0, 0x40),
            active_cell_border: Color::rgb(0x35, 0x74, 0xf0),
            editor_background: Color::rgb(0x2b, 0x2d, 0x30),
        }
    }
}

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub font_size: f32,
    pub row_height: u32,
    /// Pattern for displaying dates; also breaks day/month ties when parsing
    pub date_pattern: String,
    /// Width assumed for columns without an explicit width
    pub default_column_width: u32,
    /// Pointer travel (pixels) before a press becomes a drag
    pub drag_threshold_px: f32,
    pub palette: Palette,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            row_height: 28,
            date_pattern: "dd.mm.yyyy".to_string(),
            default_column_width: 120,
            drag_threshold_px: 4.0,
            palette: Palette::default(),
        }
    }
}

impl GridConfig {
    /// Load config from the user config dir, or return defaults if missing/invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GridError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Save config, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| GridError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(write_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save to the user config dir
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().ok_or(GridError::NoConfigDir)?;
        self.save_to(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex("00000080").unwrap(), Color::rgba(0, 0, 0, 128));
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_color_hex_round_trip() {
        let c = Color::rgba(0x35, 0x74, 0xf0, 0x40);
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GridConfig = serde_yaml::from_str("date_pattern: mm/dd/yyyy\n").unwrap();
        assert_eq!(config.date_pattern, "mm/dd/yyyy");
        assert_eq!(config.row_height, GridConfig::default().row_height);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_palette_yaml_colors() {
        let yaml = "palette:\n  selection: '#112233'\n";
        let config: GridConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.palette.selection, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.palette.background, Palette::default().background);
    }
}
