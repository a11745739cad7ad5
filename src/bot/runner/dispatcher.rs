//! Tap dispatch toward the connected endpoint.

use crate::bot::common::error::Result;
use crate::bot::device::{DeviceTransport, Endpoint};
use crate::bot::runner::supervisor::TapSink;
use crate::bot::vision::types::TargetPoint;

/// Issues tap commands at frame coordinates. No scaling is applied: the
/// frame is captured at the endpoint's native resolution, so frame pixel
/// space and input space coincide. Retries live in the supervisor, not here.
pub struct Dispatcher<T: DeviceTransport> {
    transport: T,
    endpoint: Endpoint,
}

impl<T: DeviceTransport> Dispatcher<T> {
    pub fn new(transport: T, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }
}

impl<T: DeviceTransport> TapSink for Dispatcher<T> {
    fn tap(&mut self, point: TargetPoint) -> Result<()> {
        self.transport.tap(&self.endpoint, point.x, point.y)
    }
}
