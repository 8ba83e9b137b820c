//! Unified error type for the power button monitor.
//!
//! Every fatal condition funnels into [`Error`], and every variant maps to
//! a distinct process exit code so a service manager (or an operator
//! reading `systemctl status`) can tell the failure classes apart.
//! Recoverable conditions (a single failed pin read, a failed broadcast)
//! never reach this type; the monitor handles them in place.

use core::fmt;

use crate::app::ports::{ConfigError, PowerError};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Loop stopped by SIGINT/SIGTERM.
pub const EXIT_STOPPED: u8 = 0;
/// Bootstrap failed for a reason outside the taxonomy below.
pub const EXIT_UNEXPECTED: u8 = 1;
/// Configuration invalid or pin unavailable at startup.
pub const EXIT_CONFIG: u8 = 2;
/// Pin reads failed persistently.
pub const EXIT_HARDWARE_FAULT: u8 = 3;
/// Shutdown command could not be executed.
pub const EXIT_SHUTDOWN_FAILED: u8 = 4;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration or unavailable pin.  Surfaced before polling.
    Config(ConfigError),
    /// Consecutive pin reads failed up to the fault threshold.
    HardwareFault { pin: u8, consecutive_failures: u32 },
    /// The shutdown command failed.  The monitor does not retry.
    Shutdown(PowerError),
}

impl Error {
    /// Process exit code for this failure class.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::HardwareFault { .. } => EXIT_HARDWARE_FAULT,
            Self::Shutdown(_) => EXIT_SHUTDOWN_FAILED,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::HardwareFault {
                pin,
                consecutive_failures,
            } => write!(
                f,
                "hardware fault: GPIO {pin} failed {consecutive_failures} consecutive reads, check the wiring"
            ),
            Self::Shutdown(e) => write!(f, "shutdown: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PowerError> for Error {
    fn from(e: PowerError) -> Self {
        Self::Shutdown(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
