//! Detect-and-act pipeline module
//!
//! This module provides the full perception-action loop, with separate
//! modules for device control, frame acquisition, color-based detection,
//! and the supervising loop.

pub mod common;
pub mod device;
pub mod frame;
pub mod runner;
pub mod vision;

pub use common::{
    BotError,
    Result,
};

pub use device::{
    AdbTransport,
    Address,
    DeviceTransport,
    Endpoint,
};

pub use frame::{
    Frame,
    FrameSource,
    PngDecoder,
    ScreenshotDecoder,
};

pub use vision::{
    BoundingBox,
    ColorRange,
    Detection,
    Region,
    RegionDetector,
    TargetPoint,
};

pub use runner::{
    CancelToken,
    CaptureSource,
    Dispatcher,
    LoopState,
    Pacing,
    Supervisor,
    TapSink,
    TickOutcome,
};
