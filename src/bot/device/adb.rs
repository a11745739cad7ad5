//! Device transport implementation driving the platform `adb` client.
//!
//! Every operation is a single invocation of the adb binary. Screenshots go
//! through `exec-out`, which keeps the PNG byte stream binary-safe (`shell`
//! would translate line endings and corrupt it). `adb connect` reports most
//! failures on stdout with a zero exit status, so the reply text is checked
//! as well as the status.

use std::process::{Command, Output};

use tracing::debug;

use crate::bot::common::error::{BotError, Result};
use crate::bot::device::transport::DeviceTransport;
use crate::bot::device::types::{Address, Endpoint};

/// Transport that shells out to the `adb` client binary.
#[derive(Debug, Clone)]
pub struct AdbTransport {
    adb: String,
}

impl AdbTransport {
    /// Create a transport using the given adb executable (a bare name is
    /// resolved through `PATH`).
    pub fn new(adb: impl Into<String>) -> Self {
        Self { adb: adb.into() }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        debug!("{} {}", self.adb, args.join(" "));
        Command::new(&self.adb)
            .args(args)
            .output()
            .map_err(|e| BotError::Spawn(self.adb.clone(), e.to_string()))
    }
}

impl DeviceTransport for AdbTransport {
    fn connect(&self, addr: &Address) -> Result<()> {
        let target = addr.to_string();
        let output = self.run(&["connect", &target])?;
        let reply = String::from_utf8_lossy(&output.stdout);
        // adb exits 0 even when the connection is refused; the verdict is
        // only in the reply text.
        if !output.status.success()
            || reply.contains("cannot connect")
            || reply.contains("failed to connect")
        {
            return Err(BotError::Connect(target, reply.trim().to_string()));
        }
        debug!("connect {}: {}", target, reply.trim());
        Ok(())
    }

    fn devices(&self) -> Result<Vec<Endpoint>> {
        let output = self.run(&["devices"])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BotError::DeviceList(stderr.trim().to_string()));
        }
        Ok(parse_devices(&String::from_utf8_lossy(&output.stdout)))
    }

    fn screencap(&self, endpoint: &Endpoint) -> Result<Vec<u8>> {
        let output = self.run(&["-s", &endpoint.serial, "exec-out", "screencap", "-p"])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BotError::Capture(
                endpoint.serial.clone(),
                stderr.trim().to_string(),
            ));
        }
        Ok(output.stdout)
    }

    fn tap(&self, endpoint: &Endpoint, x: u32, y: u32) -> Result<()> {
        let (x, y) = (x.to_string(), y.to_string());
        let output = self.run(&["-s", &endpoint.serial, "shell", "input", "tap", &x, &y])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BotError::Dispatch(
                endpoint.serial.clone(),
                stderr.trim().to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse `adb devices` output, keeping only endpoints in state `device`
/// (offline and unauthorized entries are unusable).
fn parse_devices(raw: &str) -> Vec<Endpoint> {
    raw.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let serial = parts.next()?;
            let state = parts.next()?;
            (state == "device").then(|| Endpoint::new(serial))
        })
        .collect()
}
