//! Button configuration.
//!
//! Read once at startup (see [`ConfigPort`](crate::app::ports::ConfigPort))
//! and immutable for the lifetime of the process.  Every field has a
//! default, so a config file only needs the values it changes:
//!
//! ```json
//! { "pin_id": 3, "mode": "NC" }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::pins;

/// Fixed debounce window between detecting a press and confirming it.
pub const DEBOUNCE_MS: u32 = 50;

/// Consecutive failed reads treated as a dead pin.
pub const MAX_CONSECUTIVE_READ_FAILURES: u32 = 3;

/// How the switch is wired.  The pin always has its pull-up enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonMode {
    /// Normally open: idle HIGH via the pull-up, pressed pulls the pin LOW.
    #[serde(rename = "NO", alias = "no")]
    NormallyOpen,
    /// Normally closed: idle LOW through the switch, pressed lets it float HIGH.
    #[serde(rename = "NC", alias = "nc")]
    NormallyClosed,
}

impl ButtonMode {
    /// Map a sampled level to "pressed" for this wiring.
    pub const fn is_pressed(self, level_high: bool) -> bool {
        match self {
            Self::NormallyOpen => !level_high,
            Self::NormallyClosed => level_high,
        }
    }
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormallyOpen => write!(f, "NO"),
            Self::NormallyClosed => write!(f, "NC"),
        }
    }
}

/// Static button configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonConfig {
    /// BCM GPIO number the button is wired to.
    pub pin_id: u8,
    /// Switch type; decides which level counts as pressed.
    pub mode: ButtonMode,
    /// Sleep between samples (milliseconds).
    pub poll_interval_ms: u32,
    /// Text broadcast to logged-in users before shutting down.
    pub wall_message: String,
    /// Program and arguments run to shut the host down.
    pub shutdown_command: Vec<String>,
    /// Log the shutdown command instead of running it.
    pub dry_run: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            pin_id: pins::DEFAULT_BUTTON_GPIO,
            mode: ButtonMode::NormallyOpen,
            poll_interval_ms: 10,
            wall_message: "Shutdown initiated by button press.".into(),
            shutdown_command: vec!["shutdown".into(), "-h".into(), "now".into()],
            dry_run: false,
        }
    }
}

impl ButtonConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the monitor cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !pins::is_header_gpio(self.pin_id) {
            return Err(ConfigError::ValidationFailed(
                "pin_id must be a BCM GPIO on the 40-pin header (0-27)",
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.poll_interval_ms >= DEBOUNCE_MS {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be shorter than the 50 ms debounce window",
            ));
        }
        match self.shutdown_command.first() {
            None => {
                return Err(ConfigError::ValidationFailed("shutdown_command must not be empty"));
            }
            Some(program) if program.trim().is_empty() => {
                return Err(ConfigError::ValidationFailed(
                    "shutdown_command program must not be blank",
                ));
            }
            Some(_) => {}
        }
        Ok(())
    }
}
