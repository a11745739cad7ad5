use crate::bot::common::error::Result;
use crate::bot::frame::types::Frame;

pub trait ScreenshotDecoder {
    fn decode(&self, data: &[u8]) -> Result<Frame>;
}
