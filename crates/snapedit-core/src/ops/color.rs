//! Tonal operations: grayscale, brightness and contrast.

use crate::luminance::rgb_to_luma;
use crate::types::{Image, PixelLayout};

use super::map_bytes;

/// Lower bound of the contrast multiplier.
const MIN_CONTRAST_FACTOR: f32 = 0.1;

/// Convert an image to single-channel luma.
///
/// A gray input is returned as a copy.
pub fn to_grayscale(image: &Image) -> Image {
    match image.layout {
        PixelLayout::Gray => image.clone(),
        PixelLayout::Rgb => Image {
            width: image.width,
            height: image.height,
            layout: PixelLayout::Gray,
            pixels: rgb_to_luma(&image.pixels),
        },
    }
}

/// Shift every channel by `delta`, saturating at 0 and 255.
///
/// Formula: `output = clamp(round(input + delta), 0, 255)`
pub fn adjust_brightness(image: &Image, delta: f32) -> Image {
    map_bytes(image, |v| saturate(v as f32 + delta))
}

/// Multiplier used by [`adjust_contrast`] for a slider delta.
///
/// `1 + delta / 100`, floored at 0.1 so the scale never reaches zero or
/// goes negative.
#[inline]
pub fn contrast_factor(delta: f32) -> f32 {
    (1.0 + delta / 100.0).max(MIN_CONTRAST_FACTOR)
}

/// Scale every channel by [`contrast_factor`], saturating at 255.
///
/// Formula: `output = clamp(round(input * factor), 0, 255)`
pub fn adjust_contrast(image: &Image, delta: f32) -> Image {
    let factor = contrast_factor(delta);
    map_bytes(image, |v| saturate(v as f32 * factor))
}

#[inline]
fn saturate(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
