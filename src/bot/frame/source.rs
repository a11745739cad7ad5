//! Frame acquisition: one screenshot from the device per call.

use tracing::debug;

use crate::bot::common::error::Result;
use crate::bot::device::{DeviceTransport, Endpoint};
use crate::bot::frame::decoder::ScreenshotDecoder;
use crate::bot::frame::png_decoder::PngDecoder;
use crate::bot::frame::types::Frame;

/// Pulls screenshots from one endpoint and decodes them into frames.
///
/// Every call re-captures; nothing is cached. On success the frame's
/// dimensions are the endpoint's current display resolution.
pub struct FrameSource<T: DeviceTransport, D: ScreenshotDecoder> {
    transport: T,
    decoder: D,
    endpoint: Endpoint,
}

impl<T: DeviceTransport> FrameSource<T, PngDecoder> {
    pub fn new(transport: T, endpoint: Endpoint) -> Self {
        Self {
            transport,
            decoder: PngDecoder,
            endpoint,
        }
    }
}

impl<T: DeviceTransport, D: ScreenshotDecoder> FrameSource<T, D> {
    pub fn with_decoder(transport: T, decoder: D, endpoint: Endpoint) -> Self {
        Self {
            transport,
            decoder,
            endpoint,
        }
    }

    /// Capture and decode one frame.
    pub fn capture(&self) -> Result<Frame> {
        let bytes = self.transport.screencap(&self.endpoint)?;
        debug!("Captured {} screenshot bytes", bytes.len());
        self.decoder.decode(&bytes)
    }
}
