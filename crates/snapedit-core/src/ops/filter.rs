//! Neighbourhood filters: Gaussian blur and Canny edge detection.
//!
//! Both wrap `imageproc`. Blur works per channel on either layout; edge
//! detection grayscales first and always returns a gray image.

use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::types::{Image, PixelLayout};

use super::{map_buffer, to_grayscale};

/// Lower hysteresis threshold for edge detection (0-255 scale).
pub const EDGE_LOW_THRESHOLD: f32 = 100.0;

/// Upper hysteresis threshold for edge detection (0-255 scale).
pub const EDGE_HIGH_THRESHOLD: f32 = 200.0;

/// Square kernel size for a blur intensity.
///
/// `max(1, floor(intensity))`, bumped to the next odd number when even.
/// Intensities of zero, below zero or NaN give a kernel of 1.
///
/// ```text
/// intensity: 1  2  3  4  5
/// kernel:    1  3  3  5  5
/// ```
pub fn blur_kernel_size(intensity: f32) -> u32 {
    let k = (intensity.floor() as i64).clamp(1, u32::MAX as i64) as u32;
    if k % 2 == 0 {
        k + 1
    } else {
        k
    }
}

/// Gaussian standard deviation for a square kernel of size `kernel`.
///
/// Formula: `sigma = 0.3 * ((kernel - 1) * 0.5 - 1) + 0.8`
#[inline]
pub fn blur_sigma(kernel: u32) -> f32 {
    0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Gaussian blur with an odd kernel derived from `intensity`.
///
/// A kernel of size 1 leaves the image unchanged.
pub fn blur(image: &Image, intensity: f32) -> Image {
    let kernel = blur_kernel_size(intensity);
    if kernel == 1 || image.is_empty() {
        return image.clone();
    }

    let sigma = blur_sigma(kernel);
    map_buffer(
        image,
        |buf| gaussian_blur_f32(buf, sigma),
        |buf| gaussian_blur_f32(buf, sigma),
    )
}

/// Canny edge map of the image.
///
/// The input is converted to gray first; the result is a gray image with
/// edge pixels set to 255 and everything else 0.
pub fn detect_edges(image: &Image) -> Image {
    let gray = to_grayscale(image);
    if gray.is_empty() {
        return gray;
    }

    match gray.to_gray_image() {
        Some(buf) => Image::from_gray_image(canny(&buf, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD)),
        None => Image::blank(gray.width, gray.height, PixelLayout::Gray),
    }
}
