use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Failed to launch {0}: {1}")]
    Spawn(String, String),

    #[error("Failed to connect to {0}: {1}")]
    Connect(String, String),

    #[error("Failed to list devices: {0}")]
    DeviceList(String),

    #[error("No reachable device after scanning all candidate addresses")]
    NoDevice,

    #[error("Screen capture failed on {0}: {1}")]
    Capture(String, String),

    #[error("Screenshot payload was empty")]
    EmptyScreenshot,

    #[error("Failed to decode screenshot: {0}")]
    Decode(String),

    #[error("Tap dispatch failed on {0}: {1}")]
    Dispatch(String, String),

    #[error("Invalid color range: channel {0} lower bound {1} exceeds upper bound {2}")]
    InvalidColorRange(usize, u8, u8),
}

pub type Result<T> = std::result::Result<T, BotError>;
