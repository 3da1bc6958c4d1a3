//! Gibbous front-end driver.
//!
//! Library half of the `gib` binary: command handlers, error reporting and
//! logging setup live here so they can be tested without spawning a process.

pub mod commands;
mod error;
pub mod tracing_setup;

pub use error::DriverError;
