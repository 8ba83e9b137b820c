//! JSON config file adapter.
//!
//! Implements [`ConfigPort`] by reading a [`ButtonConfig`] from disk.
//! The installer drops the file at [`DEFAULT_CONFIG_PATH`]; if it is
//! missing there the built-in defaults apply.  A path given explicitly
//! on the command line must exist.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::ButtonConfig;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/powerbutton.json";

pub struct JsonConfigFile {
    path: PathBuf,
    /// Missing file is an error rather than "use defaults".
    required: bool,
}

impl JsonConfigFile {
    /// A file the operator named explicitly.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// The installer's location, optional.
    pub fn default_location() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            required: false,
        }
    }

    /// First command-line argument (after the program name), else the
    /// default location.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        args
            .nth(1)
            .map_or_else(Self::default_location, |path| Self::new(PathBuf::from(path)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<ButtonConfig, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let config = ButtonConfig::from_json(&text)?;
                info!("Config loaded from {}", self.path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !self.required => {
                warn!("{} not found, using defaults", self.path.display());
                Ok(ButtonConfig::default())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ConfigError::NotFound(self.path.display().to_string()))
            }
            Err(e) => Err(ConfigError::Io(format!("{}: {}", self.path.display(), e))),
        }
    }
}
