//! Configuration system
//!
//! Configuration files are TOML or RON, picked by file extension.

pub use serde::{Serialize, Deserialize};

use crate::scene::TextStyle;
use std::path::Path;

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text in `format`
    fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Render configuration as text in `format`
    fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_as(&contents, format)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_as(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// # Scene Configuration
///
/// Defaults applied when building a [`crate::scene::Scene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Initial capacity of the node storage
    pub node_capacity: usize,
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Style given to nodes created without one
    pub default_style: TextStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            node_capacity: 64,
            log_filter: "info".to_string(),
            default_style: TextStyle::default(),
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Load from `path` and validate
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Scene configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Parse("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TextAlign;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scene_text_{}_{name}", std::process::id()))
    }

    fn sample() -> SceneConfig {
        SceneConfig {
            default_style: TextStyle::new()
                .with_font("bold 20pt Arial")
                .with_align(TextAlign::Center),
            node_capacity: 8,
            log_filter: "debug".to_string(),
        }
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = temp_path("config.toml");

        sample().save_to_file(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_ron_file_roundtrip() {
        let path = temp_path("config.ron");

        sample().save_to_file(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: SceneConfig = toml::from_str("node_capacity = 3").unwrap();

        assert_eq!(config.node_capacity, 3);
        assert_eq!(config.log_filter, "info");
        assert!(config.default_style.is_empty());
    }

    #[test]
    fn test_text_roundtrip_in_both_formats() {
        for format in [ConfigFormat::Toml, ConfigFormat::Ron] {
            let text = sample().to_string_as(format).unwrap();
            assert_eq!(SceneConfig::from_str_as(&text, format).unwrap(), sample(), "{format:?}");
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneConfig::default().save_to_file("scene.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_empty_log_filter_is_rejected() {
        let config = SceneConfig {
            log_filter: "  ".to_string(),
            ..SceneConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("missing.toml");
        let result = SceneConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
