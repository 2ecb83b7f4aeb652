//! Tool configuration
//!
//! Where assets go, which external commands to run and how long to wait
//! for them. Loaded from TOML; every key is optional:
//!
//! ```toml
//! work_dir = "."
//! bundled_dir = "AWS"
//! chip = "esp32"
//! esptool = ["python3", "esptool.py"]
//! pio = "pio"
//! build_timeout_secs = 120
//! connect_timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Locations searched when no config file is given explicitly
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["ncdflash.toml", "/etc/ncdflash/config.toml"];

/// External tool and filesystem settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Directory assets are written to
    pub work_dir: PathBuf,
    /// Directory holding bundled assets; relative paths are taken from `work_dir`
    pub bundled_dir: PathBuf,
    /// Chip type passed to esptool
    pub chip: String,
    /// Command (program and leading arguments) that runs esptool
    pub esptool: Vec<String>,
    /// PlatformIO executable used to build SPIFFS images
    pub pio: String,
    /// Upper bound for the SPIFFS build
    pub build_timeout_secs: u64,
    /// How long to wait for an HTTP connection; downloads are not time-limited
    pub connect_timeout_secs: u64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            bundled_dir: PathBuf::from("AWS"),
            chip: "esp32".to_string(),
            esptool: vec!["esptool.py".to_string()],
            pio: "pio".to_string(),
            build_timeout_secs: 120,
            connect_timeout_secs: 30,
        }
    }
}

impl ToolConfig {
    /// Parse a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ToolConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load the explicit config, else the first default location that
    /// exists, else built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::from_toml_file(path)?;
            log::info!("Loaded configuration from {}", path.display());
            return Ok(config);
        }

        for candidate in DEFAULT_CONFIG_PATHS {
            let path = Path::new(candidate);
            if path.is_file() {
                let config = Self::from_toml_file(path)?;
                log::debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.esptool.is_empty() || self.esptool[0].trim().is_empty() {
            return Err(Error::Config("esptool command must not be empty".into()));
        }
        if self.chip.trim().is_empty() {
            return Err(Error::Config("chip must not be empty".into()));
        }
        if self.build_timeout_secs == 0 {
            return Err(Error::Config("build_timeout_secs must be positive".into()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(Error::Config("connect_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Resolved bundled asset directory
    pub fn bundled_path(&self) -> PathBuf {
        if self.bundled_dir.is_absolute() {
            self.bundled_dir.clone()
        } else {
            self.work_dir.join(&self.bundled_dir)
        }
    }

    /// SPIFFS build timeout
    pub fn build_timeout(&self) -> Duration {
        Duration::from_secs(self.build_timeout_secs)
    }

    /// HTTP connect timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(ToolConfig::from_toml_str("").unwrap(), ToolConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = ToolConfig::from_toml_str(
            r#"
work_dir = "/var/lib/ncdflash"
esptool = ["python3", "/opt/flasher/esptool.py"]
build_timeout_secs = 300
"#,
        )
        .unwrap();
        assert_eq!(config.work_dir, PathBuf::from("/var/lib/ncdflash"));
        assert_eq!(config.esptool, ["python3", "/opt/flasher/esptool.py"]);
        assert_eq!(config.build_timeout(), Duration::from_secs(300));
        assert_eq!(config.chip, "esp32");
        assert_eq!(config.bundled_path(), PathBuf::from("/var/lib/ncdflash/AWS"));
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_absolute_bundled_dir() {
        let config = ToolConfig::from_toml_str(r#"bundled_dir = "/srv/aws""#).unwrap();
        assert_eq!(config.bundled_path(), PathBuf::from("/srv/aws"));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            ToolConfig::from_toml_str("esptool = []"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ToolConfig::from_toml_str("build_timeout_secs = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ToolConfig::from_toml_str("connect_timeout_secs = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ToolConfig::from_toml_str("unknown_key = 1"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ncdflash.toml");
        fs::write(&path, "chip = \"esp32s3\"\n").unwrap();
        assert_eq!(ToolConfig::load(Some(&path)).unwrap().chip, "esp32s3");

        let missing = dir.path().join("nope.toml");
        assert!(matches!(ToolConfig::load(Some(&missing)), Err(Error::Io { .. })));
    }
}
