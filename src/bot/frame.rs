//! Frame acquisition module
//!
//! This module turns the device's raw screenshot bytes into decoded pixel
//! buffers, one fresh frame per request.

mod decoder;
mod png_decoder;
mod source;
pub mod types;

pub use decoder::ScreenshotDecoder;
pub use png_decoder::PngDecoder;
pub use source::FrameSource;
pub use types::Frame;
