//! Application core — pure domain logic, zero I/O.
//!
//! The debounce loop and the shutdown action live in [`service`].  All
//! interaction with the pin, the users, and the host goes through the
//! **port traits** in [`ports`], keeping this layer testable without a
//! Raspberry Pi.

pub mod events;
pub mod ports;
pub mod service;
