//! Screenshot decoder implementation using the image library.
//!
//! `screencap -p` serves RGBA PNG; the detector consumes packed BGR, so the
//! decoded pixels are swizzled here. An empty payload is rejected before
//! decoding — adb produces empty output when the device shell dies mid
//! capture, and the image library's "unsupported format" error for it would
//! hide the real cause.

use tracing::debug;

use crate::bot::common::error::{BotError, Result};
use crate::bot::frame::decoder::ScreenshotDecoder;
use crate::bot::frame::types::Frame;

/// Screenshot decoder for the PNG byte stream produced by `screencap -p`.
pub struct PngDecoder;

impl ScreenshotDecoder for PngDecoder {
    fn decode(&self, data: &[u8]) -> Result<Frame> {
        if data.is_empty() {
            return Err(BotError::EmptyScreenshot);
        }

        debug!("Decoding screenshot, {} bytes", data.len());

        let decoded =
            image::load_from_memory(data).map_err(|e| BotError::Decode(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut bgr = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for pixel in rgb.pixels() {
            let [r, g, b] = pixel.0;
            bgr.extend_from_slice(&[b, g, r]);
        }

        debug!("Decoded frame: {}x{}", width, height);

        Ok(Frame::new(width, height, bgr))
    }
}
