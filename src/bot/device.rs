//! Device discovery and control module
//!
//! This module provides the transport toward the emulator's adb surface and
//! the one-shot locator that picks the endpoint used for the rest of the run.

mod adb;
mod locator;
mod transport;
pub mod types;

pub use adb::AdbTransport;
pub use locator::{DEFAULT_PORTS, default_candidates, locate};
pub use transport::DeviceTransport;
pub use types::{Address, Endpoint};
