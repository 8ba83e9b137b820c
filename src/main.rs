//! PowerButton — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  RpiGpio      WallNotifier   CommandPower   LogEventSink     │
//! │  (GpioPort)   (NotifyPort)   (PowerPort)    (EventSink)      │
//! │  JsonConfigFile (ConfigPort) StdDelay (DelayNs)  stop flag   │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          ButtonMonitor (pure logic)                │      │
//! │  │  sample · debounce · one-shot shutdown             │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};

use powerbutton::adapters::config_file::JsonConfigFile;
use powerbutton::adapters::gpio::RpiGpio;
use powerbutton::adapters::log_sink::LogEventSink;
use powerbutton::adapters::notify::WallNotifier;
use powerbutton::adapters::power::CommandPower;
use powerbutton::adapters::signals;
use powerbutton::adapters::time::StdDelay;
use powerbutton::app::ports::ConfigPort;
use powerbutton::app::service::{ButtonMonitor, Outcome};
use powerbutton::{EXIT_STOPPED, EXIT_UNEXPECTED, Error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::from(EXIT_STOPPED),
        Err(e) => {
            error!("{:#}", e);
            let code = e
                .downcast_ref::<Error>()
                .map_or(EXIT_UNEXPECTED, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    info!("PowerButton v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Stop flag before anything is claimed ───────────────
    let stop = signals::register_stop_flag().context("registering signal handlers")?;

    // ── 2. Config (fatal on error, no retry) ──────────────────
    let source = JsonConfigFile::from_args(std::env::args());
    let config = source.load().map_err(Error::from)?;

    // ── 3. Adapters ───────────────────────────────────────────
    let mut gpio = RpiGpio::new();
    let mut delay = StdDelay::new();
    let mut notifier = WallNotifier::new();
    let mut power = CommandPower::from_config(&config);
    let mut sink = LogEventSink::new();

    // ── 4. Claim the pin and poll ─────────────────────────────
    // The monitor owns the pin; it is released when `monitor` drops,
    // on every path out of this block.
    let outcome = {
        let mut monitor = ButtonMonitor::initialize(&config, &mut gpio, &mut sink)?;
        monitor.run(&mut delay, &mut notifier, &mut power, &mut sink, &stop)?
    };

    // ── 5. Wait out the host shutdown ─────────────────────────
    if outcome == Outcome::ShutdownRequested && !config.dry_run {
        info!("Shutdown in progress, waiting for termination");
        signals::wait_for_stop(&stop, &mut delay);
    }
    Ok(())
}
