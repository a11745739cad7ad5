//! BGR to HSV conversion and color-range masking.
//!
//! Follows the 8-bit HSV conventions used by mainstream vision tooling:
//! hue is halved into [0, 179], saturation and value stay in [0, 255].

use crate::bot::frame::types::Frame;
use crate::bot::vision::types::ColorRange;

/// Convert one BGR pixel to 8-bit HSV.
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [u8; 3] {
    let [b, g, r] = bgr;
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (v - min) as f32;

    if delta == 0.0 {
        // Achromatic: hue and saturation are undefined, zeroed by convention.
        return [0, 0, v];
    }

    let (b, g, r) = (b as f32, g as f32, r as f32);
    let mut h_deg = if v == bgr[2] {
        60.0 * (g - b) / delta
    } else if v == bgr[1] {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h_deg < 0.0 {
        h_deg += 360.0;
    }

    let h = (h_deg / 2.0).round() as u16 % 180;
    let s = (delta * 255.0 / v as f32).round() as u8;
    [h as u8, s, v]
}

/// Build the binary in-range mask for a frame: one entry per pixel, set
/// where the converted HSV value falls inside `range`.
pub fn in_range_mask(frame: &Frame, range: &ColorRange) -> Vec<bool> {
    frame
        .data
        .chunks_exact(3)
        .map(|px| range.contains(bgr_to_hsv([px[0], px[1], px[2]])))
        .collect()
}
