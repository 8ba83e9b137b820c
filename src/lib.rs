//! PowerButton library.
//!
//! Exposes the pure-logic modules for integration testing.  The
//! Raspberry Pi GPIO adapter is compiled only with the `rpi` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod pins;

mod error;

pub use error::{
    EXIT_CONFIG, EXIT_HARDWARE_FAULT, EXIT_SHUTDOWN_FAILED, EXIT_STOPPED, EXIT_UNEXPECTED, Error,
    Result,
};
