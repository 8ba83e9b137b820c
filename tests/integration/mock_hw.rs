//! Mock hardware for integration tests.
//!
//! A shared virtual clock drives everything: the delay adapter advances
//! it instead of sleeping, and the scripted pin answers each read from a
//! timeline keyed on the current virtual time.  Every port call is
//! recorded so tests can assert on what happened and when.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

use powerbutton::Error;
use powerbutton::app::events::MonitorEvent;
use powerbutton::app::ports::{
    ConfigError, EventSink, GpioPort, NotifyError, NotifyPort, PowerError, PowerPort,
};
use powerbutton::app::service::{ButtonMonitor, Outcome};
use powerbutton::config::ButtonConfig;

// ── Virtual clock ─────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }

    fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

// ── Pin timeline ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    High,
    Low,
    Fail,
}

#[allow(dead_code)]
impl Reading {
    pub fn inverted(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
            Self::Fail => Self::Fail,
        }
    }
}

/// Piecewise-constant pin behaviour: each entry holds from its start
/// time until the next entry's.
#[derive(Debug, Clone)]
pub struct Timeline(Vec<(u64, Reading)>);

#[allow(dead_code)]
impl Timeline {
    pub fn starting(reading: Reading) -> Self {
        Self(vec![(0, reading)])
    }

    pub fn then_at(mut self, ms: u64, reading: Reading) -> Self {
        assert!(self.0.last().is_none_or(|(t, _)| *t < ms), "timeline must be ordered");
        self.0.push((ms, reading));
        self
    }

    pub fn at(&self, ms: u64) -> Reading {
        self.0
            .iter()
            .rev()
            .find(|(t, _)| *t <= ms)
            .map_or(self.0[0].1, |(_, r)| *r)
    }

    pub fn inverted(&self) -> Self {
        Self(self.0.iter().map(|(t, r)| (*t, r.inverted())).collect())
    }
}

// ── Scripted pin ──────────────────────────────────────────────

#[derive(Default)]
pub struct PinProbe {
    pub reads: Cell<u32>,
    pub released: Cell<bool>,
}

#[derive(Debug)]
pub struct MockReadError;

impl embedded_hal::digital::Error for MockReadError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct ScriptedPin {
    clock: Clock,
    timeline: Timeline,
    probe: Rc<PinProbe>,
}

impl ErrorType for ScriptedPin {
    type Error = MockReadError;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, MockReadError> {
        self.probe.reads.set(self.probe.reads.get() + 1);
        match self.timeline.at(self.clock.now_ms()) {
            Reading::High => Ok(true),
            Reading::Low => Ok(false),
            Reading::Fail => Err(MockReadError),
        }
    }

    fn is_low(&mut self) -> Result<bool, MockReadError> {
        self.is_high().map(|h| !h)
    }
}

impl Drop for ScriptedPin {
    fn drop(&mut self) {
        self.probe.released.set(true);
    }
}

// ── MockGpio ──────────────────────────────────────────────────

pub struct MockGpio {
    clock: Clock,
    timeline: Timeline,
    pub probe: Rc<PinProbe>,
    pub claims: Vec<u8>,
    /// Refuse every claim, as if the pin were already in use.
    pub busy: bool,
}

impl GpioPort for MockGpio {
    type Pin = ScriptedPin;

    fn claim_input_pullup(&mut self, pin: u8) -> Result<ScriptedPin, ConfigError> {
        self.claims.push(pin);
        if self.busy {
            return Err(ConfigError::PinUnavailable {
                pin,
                reason: "pin already in use".into(),
            });
        }
        Ok(ScriptedPin {
            clock: self.clock.clone(),
            timeline: self.timeline.clone(),
            probe: Rc::clone(&self.probe),
        })
    }
}

// ── VirtualDelay ──────────────────────────────────────────────

/// Advances the clock instead of sleeping, and raises the stop flag
/// once the clock reaches `horizon_ms`.
pub struct VirtualDelay {
    clock: Clock,
    horizon_ms: u64,
    stop: Arc<AtomicBool>,
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(ns.into());
        if self.clock.now_ms() >= self.horizon_ms {
            self.stop.store(true, Ordering::Relaxed);
        }
    }
}

// ── Notification / power recorders ────────────────────────────

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
    pub fail: bool,
}

impl NotifyPort for RecordingNotifier {
    fn broadcast(&mut self, message: &str) -> Result<(), NotifyError> {
        self.messages.push(message.to_string());
        if self.fail {
            return Err(NotifyError::Spawn("wall: not found".into()));
        }
        Ok(())
    }
}

pub struct RecordingPower {
    clock: Clock,
    /// Virtual time (ms) of each power-off call.
    pub calls: Vec<u64>,
    pub fail: bool,
}

impl PowerPort for RecordingPower {
    fn power_off(&mut self) -> Result<(), PowerError> {
        self.calls.push(self.clock.now_ms());
        if self.fail {
            return Err(PowerError::Status(Some(1)));
        }
        Ok(())
    }
}

// ── Event recorder ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<MonitorEvent>,
}

impl RecordingSink {
    pub fn count(&self, event: &MonitorEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// Every mock wired to one clock.
pub struct Rig {
    pub clock: Clock,
    pub gpio: MockGpio,
    pub delay: VirtualDelay,
    pub notifier: RecordingNotifier,
    pub power: RecordingPower,
    pub sink: RecordingSink,
    pub stop: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl Rig {
    /// Pin follows `timeline`; the loop is stopped at `horizon_ms`.
    pub fn new(timeline: Timeline, horizon_ms: u64) -> Self {
        let clock = Clock::default();
        let stop = Arc::new(AtomicBool::new(false));
        Self {
            gpio: MockGpio {
                clock: clock.clone(),
                timeline,
                probe: Rc::default(),
                claims: Vec::new(),
                busy: false,
            },
            delay: VirtualDelay {
                clock: clock.clone(),
                horizon_ms,
                stop: Arc::clone(&stop),
            },
            notifier: RecordingNotifier::default(),
            power: RecordingPower {
                clock: clock.clone(),
                calls: Vec::new(),
                fail: false,
            },
            sink: RecordingSink::default(),
            clock,
            stop,
        }
    }

    /// Initialise and run a monitor to completion.  The monitor (and the
    /// pin it owns) is dropped before this returns.
    pub fn run(&mut self, config: &ButtonConfig) -> Result<Outcome, Error> {
        let mut monitor = ButtonMonitor::initialize(config, &mut self.gpio, &mut self.sink)?;
        monitor.run(
            &mut self.delay,
            &mut self.notifier,
            &mut self.power,
            &mut self.sink,
            &self.stop,
        )
    }

    pub fn reads(&self) -> u32 {
        self.gpio.probe.reads.get()
    }

    pub fn pin_released(&self) -> bool {
        self.gpio.probe.released.get()
    }
}
