//! Termination signal handling.
//!
//! SIGINT, SIGTERM and SIGQUIT raise a shared stop flag; the poll loop
//! checks it once per iteration and exits cleanly, releasing the pin.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

/// How often [`wait_for_stop`] re-checks the flag.
const STOP_POLL_MS: u32 = 100;

/// Register the termination signals and return the flag they set.
pub fn register_stop_flag() -> io::Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    for sig in TERM_SIGNALS {
        flag::register(*sig, Arc::clone(&stop))?;
    }
    Ok(stop)
}

/// Block until `stop` is raised.  Used after the shutdown command has
/// been issued, while the host's service manager tears processes down.
pub fn wait_for_stop(stop: &AtomicBool, delay: &mut impl DelayNs) {
    while !stop.load(Ordering::Relaxed) {
        delay.delay_ms(STOP_POLL_MS);
    }
}
