//! Color-based target detection module
//!
//! This module converts frames into HSV space, masks the configured color
//! range, extracts connected regions, and selects the largest one.

mod contours;
mod detector;
mod hsv;
pub mod types;

pub use contours::extract_regions;
pub use detector::RegionDetector;
pub use hsv::{bgr_to_hsv, in_range_mask};
pub use types::{BoundingBox, ColorRange, Detection, Region, TargetPoint};
