//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the grayscale conversion and by edge detection, which
//! grayscales its input before running the detector.

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// # Returns
/// Luminance value (0-255), rounded to nearest.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

/// Convert packed RGB bytes to one luma byte per pixel.
///
/// A trailing partial pixel is ignored.
pub fn rgb_to_luma(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(3)
        .map(|px| calculate_luminance_u8(px[0], px[1], px[2]))
        .collect()
}
