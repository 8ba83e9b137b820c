//! Button monitor — the domain core.
//!
//! [`ButtonMonitor`] owns the claimed pin and every piece of loop state
//! (previous pressed level, read-failure counter, shutdown flag).  All I/O
//! flows through port traits injected at call sites, so the whole loop
//! runs against scripted pins and a virtual clock in tests.
//!
//! ```text
//!   InputPin ──▶ ┌──────────────────────────┐ ──▶ NotifyPort
//!                │       ButtonMonitor       │ ──▶ PowerPort
//!    DelayNs ◀── │  sample · debounce · act  │ ──▶ EventSink
//!                └──────────────────────────┘
//! ```
//!
//! ## Debounce
//!
//! Confirm-after-delay: a transition from released to pressed starts a
//! [`DEBOUNCE_MS`] wait, then the pin is sampled once more.  The press is
//! confirmed only if that second sample still reads pressed.  The first
//! good sample after startup is the baseline, so a button already held
//! at boot does not shut the host down until it is released and pressed
//! again.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use log::{debug, info, warn};

use crate::config::{ButtonConfig, DEBOUNCE_MS};
use crate::drivers::button::{ButtonInput, Sample};
use crate::error::Result;

use super::events::MonitorEvent;
use super::ports::{EventSink, GpioPort, NotifyPort, PowerPort};

/// Monitor lifecycle.  `ShuttingDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Waiting,
    ShuttingDown,
}

/// Why [`ButtonMonitor::run`] returned without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A confirmed press issued the shutdown command.
    ShutdownRequested,
    /// The stop flag was raised.
    Stopped,
}

pub struct ButtonMonitor<P> {
    input: ButtonInput<P>,
    poll_interval_ms: u32,
    wall_message: String,
    state: MonitorState,
    /// Pressed level of the previous sample.  `None` until the first good read.
    last_pressed: Option<bool>,
}

impl<P: InputPin> ButtonMonitor<P> {
    /// Validate `config` and claim the pin with its pull-up enabled.
    ///
    /// Nothing is read from the pin here; on error no pin is held.
    pub fn initialize<G>(
        config: &ButtonConfig,
        gpio: &mut G,
        sink: &mut impl EventSink,
    ) -> Result<Self>
    where
        G: GpioPort<Pin = P>,
    {
        config.validate()?;
        let pin = gpio.claim_input_pullup(config.pin_id)?;

        info!(
            "Watching GPIO {} ({} button, poll every {} ms)",
            config.pin_id, config.mode, config.poll_interval_ms
        );
        sink.emit(&MonitorEvent::Started {
            pin: config.pin_id,
            mode: config.mode,
        });

        Ok(Self {
            input: ButtonInput::new(pin, config.pin_id, config.mode),
            poll_interval_ms: config.poll_interval_ms,
            wall_message: config.wall_message.clone(),
            state: MonitorState::Waiting,
            last_pressed: None,
        })
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn pin_id(&self) -> u8 {
        self.input.pin_id()
    }

    // ── Loop ──────────────────────────────────────────────────

    /// Poll until a confirmed press shuts the host down, `stop` is raised,
    /// or the pin fails persistently.
    pub fn run(
        &mut self,
        delay: &mut impl DelayNs,
        notifier: &mut impl NotifyPort,
        power: &mut impl PowerPort,
        sink: &mut impl EventSink,
        stop: &AtomicBool,
    ) -> Result<Outcome> {
        loop {
            if stop.load(Ordering::Relaxed) {
                info!("Stop requested, leaving poll loop");
                sink.emit(&MonitorEvent::Stopped);
                return Ok(Outcome::Stopped);
            }
            if let Some(outcome) = self.poll_once(delay, notifier, power, sink)? {
                return Ok(outcome);
            }
            delay.delay_ms(self.poll_interval_ms);
        }
    }

    /// One loop iteration: sample, and on a fresh press run the debounce
    /// confirmation and the shutdown action.
    ///
    /// Returns `Some` once the monitor has nothing left to do.
    pub fn poll_once(
        &mut self,
        delay: &mut impl DelayNs,
        notifier: &mut impl NotifyPort,
        power: &mut impl PowerPort,
        sink: &mut impl EventSink,
    ) -> Result<Option<Outcome>> {
        if self.state == MonitorState::ShuttingDown {
            return Ok(Some(Outcome::ShutdownRequested));
        }

        let sample = self.sample(sink)?;
        let pressed = sample.is_pressed();
        let previous = self.last_pressed;
        if matches!(sample, Sample::Pressed | Sample::Released) || previous.is_some() {
            self.last_pressed = Some(pressed);
        }

        if !(pressed && previous == Some(false)) {
            return Ok(None);
        }

        debug!("GPIO {}: press edge, confirming in {} ms", self.pin_id(), DEBOUNCE_MS);
        sink.emit(&MonitorEvent::PressSuspected);
        delay.delay_ms(DEBOUNCE_MS);

        if self.sample(sink)?.is_pressed() {
            sink.emit(&MonitorEvent::PressConfirmed);
            self.on_confirmed_press(notifier, power, sink)?;
            Ok(Some(Outcome::ShutdownRequested))
        } else {
            debug!("GPIO {}: press not held through debounce, ignored", self.pin_id());
            sink.emit(&MonitorEvent::GlitchRejected);
            self.last_pressed = Some(false);
            Ok(None)
        }
    }

    // ── Action ────────────────────────────────────────────────

    /// Warn logged-in users, then shut the host down.
    ///
    /// Runs at most once: the state flips to `ShuttingDown` before the
    /// shutdown command, so a failed or slow shutdown is never re-issued.
    pub fn on_confirmed_press(
        &mut self,
        notifier: &mut impl NotifyPort,
        power: &mut impl PowerPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.state == MonitorState::ShuttingDown {
            debug!("Shutdown already requested, ignoring press");
            return Ok(());
        }
        self.state = MonitorState::ShuttingDown;
        warn!("Power button pressed on GPIO {}, shutting down", self.pin_id());

        if let Err(e) = notifier.broadcast(&self.wall_message) {
            warn!("User broadcast failed ({}), shutting down anyway", e);
            sink.emit(&MonitorEvent::NotificationFailed(e));
        }

        power.power_off()?;
        sink.emit(&MonitorEvent::ShutdownRequested);
        Ok(())
    }

    // ── Internal ──────────────────────────────────────────────

    fn sample(&mut self, sink: &mut impl EventSink) -> Result<Sample> {
        let sample = self.input.sample()?;
        if let Sample::ReadFailed { consecutive } = sample {
            sink.emit(&MonitorEvent::ReadFailed { consecutive });
        }
        Ok(sample)
    }
}
