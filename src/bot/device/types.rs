//! Device addressing types

use std::fmt;

/// A candidate emulator control address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub host: String,
    pub port: u16,
}

impl Address {
    /// Address of a local emulator listening on `port`.
    pub fn local(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A connected device handle, identified by its adb serial.
///
/// Created once by the locator and shared read-only for the life of the
/// process; the connection is never re-established if it is lost mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub serial: String,
}

impl Endpoint {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
        }
    }
}
