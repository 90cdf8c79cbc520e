//! Configuration management for FilmWise
//!
//! Handles config file loading/saving. Config is stored at
//! ~/.config/filmwise/config.toml unless a path is given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Route;
use crate::ui::carousel::{
    CarouselConfig, CarouselConfigError, DEFAULT_INTERVAL, DEFAULT_TRANSITION,
};
use crate::ui::disclosure::DEFAULT_COMPACT_WIDTH;

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Carousel section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Milliseconds between autoplay advances
    pub interval_ms: u64,
    /// Milliseconds a transition lasts
    pub transition_ms: u64,
    pub autoplay: bool,
    /// Wrap around at the ends
    pub infinite: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            transition_ms: DEFAULT_TRANSITION.as_millis() as u64,
            autoplay: true,
            infinite: true,
        }
    }
}

/// Layout section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Terminal width below which the header collapses into a menu
    pub compact_width: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page opened on launch, as a path ("/movies")
    pub start_route: Option<String>,
    pub carousel: CarouselSettings,
    pub layout: LayoutSettings,
}

impl Config {
    /// Get config file path (~/.config/filmwise/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("filmwise").join("config.toml"))
    }

    /// Load from `path`. A missing file silently gives the defaults; an
    /// unreadable or malformed one gives the defaults and the error.
    pub fn load_checked(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!("no config at {}; using defaults", path.display());
                (Self::default(), None)
            }
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load and parse the file at `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Route to open on launch
    pub fn start_route(&self) -> Route {
        self.start_route
            .as_deref()
            .map(Route::from_path)
            .unwrap_or_default()
    }

    /// Check the carousel timings
    pub fn validate(&self) -> Result<(), CarouselConfigError> {
        CarouselConfig::from_millis(self.carousel.interval_ms, self.carousel.transition_ms).validate()
    }

    /// Carousel settings as engine config.
    ///
    /// Invalid timings are replaced by the defaults.
    pub fn carousel_config(&self) -> CarouselConfig {
        let timings = match self.validate() {
            Ok(()) => CarouselConfig::from_millis(self.carousel.interval_ms, self.carousel.transition_ms),
            Err(e) => {
                log::warn!("invalid carousel config ({}); using default timings", e);
                CarouselConfig::default()
            }
        };
        timings
            .with_autoplay(self.carousel.autoplay)
            .with_infinite(self.carousel.infinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.start_route.is_none());
        assert_eq!(config.carousel.interval_ms, 2000);
        assert_eq!(config.carousel.transition_ms, 2000);
        assert!(config.carousel.autoplay);
        assert_eq!(config.layout.compact_width, 80);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[carousel]\ninterval_ms = 5000\n").unwrap();
        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.carousel.transition_ms, 2000);
        assert_eq!(config.layout, LayoutSettings::default());
    }

    #[test]
    fn test_start_route() {
        let mut config = Config::default();
        assert_eq!(config.start_route(), Route::Home);

        config.start_route = Some("/movies".into());
        assert_eq!(config.start_route(), Route::Movies);

        config.start_route = Some("/nowhere".into());
        assert_eq!(config.start_route(), Route::NotFound);
    }

    #[test]
    fn test_carousel_config_conversion() {
        let mut config = Config::default();
        config.carousel.interval_ms = 3000;
        config.carousel.transition_ms = 500;
        config.carousel.autoplay = false;

        let carousel = config.carousel_config();
        assert_eq!(carousel.interval, Duration::from_millis(3000));
        assert_eq!(carousel.transition, Duration::from_millis(500));
        assert!(!carousel.autoplay);
    }

    #[test]
    fn test_zero_timings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.carousel.interval_ms = 0;
        config.carousel.autoplay = false;

        let carousel = config.carousel_config();
        assert_eq!(carousel.interval, DEFAULT_INTERVAL);
        assert!(!carousel.autoplay);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.start_route = Some("/series".into());
        config.layout.compact_width = 100;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Read { .. })));
        assert_eq!(Config::load_checked(&path).0, Config::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "carousel = [not valid").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(Config::load_checked(&path).0, Config::default());
    }

    #[test]
    fn test_load_checked_reports_only_real_problems() {
        let dir = tempfile::tempdir().unwrap();

        let (config, problem) = Config::load_checked(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
        assert!(problem.is_none());

        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\ncompact_width = \"wide\"\n").unwrap();
        let (config, problem) = Config::load_checked(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(problem, Some(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_transition() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.carousel.transition_ms = 0;
        assert_eq!(config.validate(), Err(CarouselConfigError::ZeroTransition));
    }
}
