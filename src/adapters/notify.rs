//! `wall` broadcast adapter.
//!
//! Implements [`NotifyPort`] by spawning `wall <message>`.  The child is
//! reaped on a detached thread so `broadcast` returns at once and a stuck
//! terminal never holds up the shutdown.

use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::app::ports::{NotifyError, NotifyPort};

pub struct WallNotifier {
    program: String,
}

impl WallNotifier {
    pub fn new() -> Self {
        Self::with_program("wall")
    }

    /// Use a different broadcast program (same `<program> <message>` shape).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for WallNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyPort for WallNotifier {
    fn broadcast(&mut self, message: &str) -> Result<(), NotifyError> {
        let mut child = Command::new(&self.program)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NotifyError::Spawn(format!("{}: {}", self.program, e)))?;
        let pid = child.id();
        debug!("{} spawned (pid {})", self.program, pid);
        std::thread::spawn(move || match child.wait() {
            Ok(status) => debug!("broadcast (pid {}) exited: {}", pid, status),
            Err(e) => warn!("broadcast (pid {}) not reaped: {}", pid, e),
        });
        Ok(())
    }
}
