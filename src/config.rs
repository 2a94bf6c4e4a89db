// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration
//!
//! Configuration is optional and read-only: it is loaded once on start from
//! the file named by `WORLD_CLOCK_CONFIG` (see [`Options::from_env`]) and never
//! written back.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env::var;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use world_clock_core::Location;

/// Configuration read/format/validation errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("config deserialisation from JSON failed")]
    Json(#[from] serde_json::Error),

    #[error("config deserialisation from TOML failed")]
    TomlDe(#[from] toml::de::Error),

    #[error("error reading config file")]
    IoError(#[from] std::io::Error),

    #[error("format not supported: {0}")]
    UnsupportedFormat(Format),

    #[error("invalid font size: {0}")]
    FontSize(f32),

    #[error("tick interval must be non-zero")]
    TickInterval,

    #[error("unknown initial location: {0:?}")]
    UnknownLocation(String),
}

/// Configuration file formats
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
pub enum Format {
    /// Not specified: guess from the path
    #[default]
    #[error("no format")]
    None,

    /// JavaScript Object Notation
    #[error("JSON")]
    Json,

    /// Tom's Obvious Minimal Language
    #[error("TOML")]
    Toml,

    /// Error: unable to guess format
    #[error("(unknown format)")]
    Unknown,
}

impl Format {
    /// Guess format from the path name
    ///
    /// This does not open the file. On failure, returns [`Format::Unknown`].
    pub fn guess_from_path(path: &Path) -> Format {
        match path.extension() {
            Some(ext) if ext == "json" => Format::Json,
            Some(ext) if ext == "toml" => Format::Toml,
            _ => Format::Unknown,
        }
    }

    /// Read from a string
    pub fn read_str<T: DeserializeOwned>(self, contents: &str) -> Result<T, Error> {
        match self {
            Format::Json => Ok(serde_json::from_str(contents)?),
            Format::Toml => Ok(toml::from_str(contents)?),
            _ => Err(Error::UnsupportedFormat(self)),
        }
    }

    /// Read from a path
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, Error> {
        log::info!("read_path: path={}, format={:?}", path.display(), self);
        if matches!(self, Format::None | Format::Unknown) {
            return Err(Error::UnsupportedFormat(self));
        }
        let contents = std::fs::read_to_string(path)?;
        self.read_str(&contents)
    }

    /// Guess format and load from a path
    #[inline]
    pub fn guess_and_read_path<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
        Self::guess_from_path(path).read_path(path)
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Font size (points) used for all text
    pub font_size: f32,
    /// Interval between clock refreshes, in milliseconds
    pub tick_interval_ms: u64,
    /// Theme colour scheme (e.g. `"dark"`); default: theme default
    pub color_scheme: Option<String>,
    /// Display name of a location to select on start
    pub initial_location: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "World Clock".to_string(),
            font_size: 20.0,
            tick_interval_ms: 1000,
            color_scheme: None,
            initial_location: None,
        }
    }
}

impl Config {
    /// Check values
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::FontSize(self.font_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::TickInterval);
        }
        if let Some(name) = self.initial_location.as_deref() {
            if Location::find(name).is_none() {
                return Err(Error::UnknownLocation(name.to_string()));
            }
        }
        Ok(())
    }

    /// Interval between clock refreshes
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The location to select on start, if configured and known
    pub fn initial_location(&self) -> Option<&'static Location> {
        self.initial_location.as_deref().and_then(Location::find)
    }
}

/// Application options
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Config file path. Default: empty. See `WORLD_CLOCK_CONFIG` doc.
    pub config_path: PathBuf,
}

impl Options {
    /// Construct a new instance, reading from environment variables
    ///
    /// The `WORLD_CLOCK_CONFIG` variable, if given, provides a path to a config
    /// file in TOML (`.toml`) or JSON (`.json`) format. If not specified,
    /// default configuration is used.
    ///
    /// Toolkit options (`KAS_CONFIG` etc.) are read separately by KAS.
    pub fn from_env() -> Self {
        let mut options = Options::default();

        if let Ok(v) = var("WORLD_CLOCK_CONFIG") {
            options.config_path = v.into();
        }

        options
    }

    /// Load and validate config
    pub fn read_config(&self) -> Result<Config, Error> {
        if self.config_path.as_os_str().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = Format::guess_and_read_path(&self.config_path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Log an error and its sources
pub fn warn_about_error(msg: &str, mut error: &dyn std::error::Error) {
    log::warn!("{msg}: {error}");
    while let Some(source) = error.source() {
        log::warn!("Source: {source}");
        error = source;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.font_size, 20.0);
        assert!(config.initial_location().is_none());
    }

    #[test]
    fn toml() {
        let text = r#"
title = "Clocks"
tick_interval_ms = 500
initial_location = "France 🇫🇷"
"#;
        let config: Config = Format::Toml.read_str(text).unwrap();
        assert_eq!(config.title, "Clocks");
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.font_size, 20.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_location().unwrap().zone_id(), "Europe/Paris");
    }

    #[test]
    fn json() {
        let text = r#"{ "font_size": 32.0, "color_scheme": "dark" }"#;
        let config: Config = Format::Json.read_str(text).unwrap();
        assert_eq!(config.font_size, 32.0);
        assert_eq!(config.color_scheme.as_deref(), Some("dark"));
        assert_eq!(config.title, "World Clock");
    }

    #[test]
    fn unknown_field() {
        let r: Result<Config, _> = Format::Toml.read_str("colour = 1");
        assert!(matches!(r, Err(Error::TomlDe(_))));
    }

    #[test]
    fn guess_format() {
        assert_eq!(Format::guess_from_path(Path::new("a/b.toml")), Format::Toml);
        assert_eq!(Format::guess_from_path(Path::new("b.json")), Format::Json);
        assert_eq!(Format::guess_from_path(Path::new("b.yaml")), Format::Unknown);
        assert_eq!(Format::guess_from_path(Path::new("config")), Format::Unknown);
    }

    #[test]
    fn unsupported_format() {
        let r: Result<Config, _> = Format::guess_and_read_path(Path::new("config.ini"));
        assert!(matches!(r, Err(Error::UnsupportedFormat(Format::Unknown))));
    }

    #[test]
    fn invalid_values() {
        let mut config = Config {
            font_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::FontSize(_))));

        config.font_size = f32::NAN;
        assert!(matches!(config.validate(), Err(Error::FontSize(_))));

        config.font_size = 12.0;
        config.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(Error::TickInterval)));

        config.tick_interval_ms = 1000;
        config.initial_location = Some("Atlantis".into());
        assert!(matches!(config.validate(), Err(Error::UnknownLocation(_))));
    }

    #[test]
    fn read_file() {
        let path = std::env::temp_dir().join(format!("world-clock-{}.toml", std::process::id()));
        std::fs::write(&path, "tick_interval_ms = 250\n").unwrap();
        let options = Options {
            config_path: path.clone(),
        };
        let config = options.read_config();
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.unwrap().tick_interval_ms, 250);
    }

    #[test]
    fn read_file_invalid() {
        let path = std::env::temp_dir().join(format!("world-clock-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "tick_interval_ms": 0 }"#).unwrap();
        let options = Options {
            config_path: path.clone(),
        };
        let config = options.read_config();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(config, Err(Error::TickInterval)));
    }

    #[test]
    fn missing_file() {
        let options = Options {
            config_path: PathBuf::from("/nonexistent/world-clock.toml"),
        };
        assert!(matches!(options.read_config(), Err(Error::IoError(_))));
    }

    #[test]
    fn no_path() {
        assert_eq!(Options::default().read_config().unwrap(), Config::default());
    }
}
