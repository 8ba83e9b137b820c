//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing monitor events to the `log` facade
//! (stderr via `env_logger`, which journald captures under systemd).

use log::{debug, info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started { pin, mode } => {
                info!("START | gpio={} mode={}", pin, mode);
            }
            MonitorEvent::PressSuspected => debug!("PRESS | edge seen, debouncing"),
            MonitorEvent::GlitchRejected => info!("PRESS | rejected as noise"),
            MonitorEvent::PressConfirmed => info!("PRESS | confirmed"),
            MonitorEvent::ReadFailed { consecutive } => {
                warn!("READ  | failed, consecutive={}", consecutive);
            }
            MonitorEvent::NotificationFailed(e) => warn!("WALL  | {}", e),
            MonitorEvent::ShutdownRequested => info!("HALT  | shutdown requested"),
            MonitorEvent::Stopped => info!("STOP  | poll loop stopped"),
        }
    }
}
