//! Detection domain types

use crate::bot::common::error::{BotError, Result};

/// Inclusive lower/upper bounds in 8-bit HSV space (H 0-179, S/V 0-255).
///
/// Built once at startup and passed into the detector explicitly; there is
/// no ambient color configuration anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    lower: [u8; 3],
    upper: [u8; 3],
}

impl ColorRange {
    /// Build a range, rejecting any channel whose lower bound exceeds its
    /// upper bound.
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Result<Self> {
        for channel in 0..3 {
            if lower[channel] > upper[channel] {
                return Err(BotError::InvalidColorRange(
                    channel,
                    lower[channel],
                    upper[channel],
                ));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Whether an HSV value falls within the bounds, inclusive on both ends.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Axis-aligned bounding box in frame pixel coordinates, inclusive extents
/// (`width = max_x - min_x + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Centre of the box, with floor-division half offsets.
    pub fn center(&self) -> TargetPoint {
        TargetPoint {
            x: self.x + self.width / 2,
            y: self.y + self.height / 2,
        }
    }
}

/// Tap coordinate in frame pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPoint {
    pub x: u32,
    pub y: u32,
}

/// A connected set of matching pixels with its derived measurements.
///
/// The area is the geometric (polygon) area of the region's traced outer
/// boundary, not its pixel count; a single pixel or a one-pixel-thin line
/// measures 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub area: f64,
    pub bbox: BoundingBox,
}

/// Outcome of one detection pass over a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// The largest matching region cleared the area threshold.
    Found { point: TargetPoint, area: f64 },
    /// Matching regions exist, but the largest is at or below the threshold.
    BelowThreshold { area: f64 },
    /// No pixel matched the color range.
    NoRegions,
}
