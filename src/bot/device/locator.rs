//! One-shot device discovery across the common emulator control ports.

use tracing::{debug, info};

use crate::bot::common::error::{BotError, Result};
use crate::bot::device::transport::DeviceTransport;
use crate::bot::device::types::{Address, Endpoint};

/// Control ports of the common Android emulators:
/// MuMu (7555), LDPlayer/BlueStacks (5555), Nox (62001), MEmu (21503).
pub const DEFAULT_PORTS: [u16; 4] = [7555, 5555, 62001, 21503];

/// The default candidate list: every known port on the local host.
pub fn default_candidates() -> Vec<Address> {
    DEFAULT_PORTS.iter().map(|&port| Address::local(port)).collect()
}

/// Scan every candidate address and return the first reachable endpoint.
///
/// Individual connect failures are expected (most candidates have no
/// emulator behind them) and never abort the scan. More than one candidate
/// may end up connected; only the first endpoint the transport enumerates
/// is used. Runs once per process; `BotError::NoDevice` is fatal to the run.
pub fn locate<T: DeviceTransport>(transport: &T, candidates: &[Address]) -> Result<Endpoint> {
    info!("Scanning {} candidate addresses", candidates.len());
    for addr in candidates {
        match transport.connect(addr) {
            Ok(()) => debug!("Candidate {} connected", addr),
            Err(e) => debug!("Candidate {} unreachable: {}", addr, e),
        }
    }

    let devices = transport.devices()?;
    devices.into_iter().next().ok_or(BotError::NoDevice)
}
