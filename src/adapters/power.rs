//! Host shutdown adapter.
//!
//! Implements [`PowerPort`] by running the configured shutdown command
//! (`shutdown -h now` by default) and checking its exit status.  With
//! `dry_run` set the command is only logged, which lets an operator test
//! the button wiring without powering the board off.

use std::process::Command;

use log::{info, warn};

use crate::app::ports::{PowerError, PowerPort};
use crate::config::ButtonConfig;

pub struct CommandPower {
    argv: Vec<String>,
    dry_run: bool,
}

impl CommandPower {
    pub fn new(argv: Vec<String>, dry_run: bool) -> Self {
        Self { argv, dry_run }
    }

    pub fn from_config(config: &ButtonConfig) -> Self {
        Self::new(config.shutdown_command.clone(), config.dry_run)
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl PowerPort for CommandPower {
    fn power_off(&mut self) -> Result<(), PowerError> {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(PowerError::Spawn("empty shutdown command".into()));
        };

        if self.dry_run {
            warn!("Dry run: would run {}", self.argv.join(" "));
            return Ok(());
        }

        info!("Running {}", self.argv.join(" "));
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| PowerError::Spawn(format!("{}: {}", program, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(PowerError::Status(status.code()))
        }
    }
}
