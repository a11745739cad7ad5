//! Largest-region detection over one frame.

use tracing::debug;

use crate::bot::frame::types::Frame;
use crate::bot::vision::contours::extract_regions;
use crate::bot::vision::hsv::in_range_mask;
use crate::bot::vision::types::{ColorRange, Detection, Region};

/// Detects the largest frame region matching a color range.
///
/// Holds the immutable detection configuration; `detect` is a pure function
/// of the frame and that configuration, so identical inputs always yield
/// identical results.
#[derive(Debug, Clone)]
pub struct RegionDetector {
    range: ColorRange,
    min_area: f64,
}

impl RegionDetector {
    pub fn new(range: ColorRange, min_area: f64) -> Self {
        Self { range, min_area }
    }

    pub fn min_area(&self) -> f64 {
        self.min_area
    }

    /// Run one detection pass: mask the color range, extract connected
    /// regions, select the single largest, and gate it on the area
    /// threshold. Selecting one region rather than all matches keeps noise
    /// from turning into a burst of taps when several small blobs match.
    pub fn detect(&self, frame: &Frame) -> Detection {
        let mask = in_range_mask(frame, &self.range);
        let regions = extract_regions(&mask, frame.width, frame.height);
        debug!("{} matching regions", regions.len());

        let mut largest: Option<&Region> = None;
        for region in &regions {
            // Strictly greater, so the earliest of equal-area regions wins.
            if largest.is_none_or(|best| region.area > best.area) {
                largest = Some(region);
            }
        }

        let Some(region) = largest else {
            return Detection::NoRegions;
        };

        if region.area <= self.min_area {
            return Detection::BelowThreshold { area: region.area };
        }

        Detection::Found {
            point: region.bbox.center(),
            area: region.area,
        }
    }
}
