//! Outbound monitor events.
//!
//! The [`ButtonMonitor`](super::service::ButtonMonitor) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (log them, count them in a test).

use crate::config::ButtonMode;

use super::ports::NotifyError;

/// Structured events emitted by the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The pin was claimed and polling is about to begin.
    Started { pin: u8, mode: ButtonMode },

    /// A transition into the pressed level was seen; confirmation pending.
    PressSuspected,

    /// The confirmation sample no longer read pressed.
    GlitchRejected,

    /// The press survived the debounce window.
    PressConfirmed,

    /// A pin read failed.  `consecutive` counts this failure.
    ReadFailed { consecutive: u32 },

    /// The user broadcast failed; shutdown continues regardless.
    NotificationFailed(NotifyError),

    /// The shutdown command was issued successfully.
    ShutdownRequested,

    /// The loop left on an external stop request.
    Stopped,
}
