//! blobtap watches an Android emulator's screen over adb, finds the largest
//! region matching a configured HSV color range, and taps its centroid.

pub mod bot;
pub mod config;
pub mod logger;
