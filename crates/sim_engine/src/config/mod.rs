//! Configuration loading and saving

use std::path::Path;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

/// File-backed configuration
///
/// The on-disk format is chosen by file extension: `.toml` or `.ron`.
pub trait Config: Serialize + DeserializeOwned + Default + Sized {
    /// Load configuration from a file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration, falling back to defaults when loading fails
    fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(error) => {
                warn!(
                    "failed to load config from {}: {error}; using defaults",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),

    /// File extension names no supported format
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Bounds, Vec2};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        bounds: Bounds,
        tick_rate: f32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                bounds: Bounds::default(),
                tick_rate: 60.0,
            }
        }
    }

    impl Config for SampleConfig {}

    #[test]
    fn test_ron_round_trip() {
        let dir = std::env::temp_dir().join("sim_engine_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.ron");

        let config = SampleConfig {
            bounds: Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)),
            tick_rate: 30.0,
        };
        config.save_to_file(&path).unwrap();

        let loaded = SampleConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SampleConfig::default().save_to_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = SampleConfig::load_from_file("definitely/not/here.ron");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = SampleConfig::load_or_default("definitely/not/here.ron");
        assert_eq!(config, SampleConfig::default());
    }
}
