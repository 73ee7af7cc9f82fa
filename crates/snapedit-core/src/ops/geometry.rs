//! Geometric operations: quarter-turn rotation, mirroring and scaling.

use image::imageops::{self, FilterType};

use crate::types::Image;

use super::{map_buffer, FlipMode, Rotation};

/// Rotate by a quarter-turn multiple.
///
/// `Cw90` and `Ccw90` swap width and height. `Rotation::None` returns an
/// unchanged copy.
pub fn rotate(image: &Image, rotation: Rotation) -> Image {
    match rotation {
        Rotation::None => image.clone(),
        Rotation::Cw90 => map_buffer(
            image,
            |buf| imageops::rotate90(buf),
            |buf| imageops::rotate90(buf),
        ),
        Rotation::Rot180 => map_buffer(
            image,
            |buf| imageops::rotate180(buf),
            |buf| imageops::rotate180(buf),
        ),
        Rotation::Ccw90 => map_buffer(
            image,
            |buf| imageops::rotate270(buf),
            |buf| imageops::rotate270(buf),
        ),
    }
}

/// Mirror the image. `FlipMode::None` returns an unchanged copy.
pub fn flip(image: &Image, mode: FlipMode) -> Image {
    match mode {
        FlipMode::None => image.clone(),
        FlipMode::Horizontal => map_buffer(
            image,
            |buf| imageops::flip_horizontal(buf),
            |buf| imageops::flip_horizontal(buf),
        ),
        FlipMode::Vertical => map_buffer(
            image,
            |buf| imageops::flip_vertical(buf),
            |buf| imageops::flip_vertical(buf),
        ),
    }
}

/// Target dimensions for a percentage scale.
///
/// `floor(width * scale / 100)` and `floor(height * scale / 100)`. There is
/// no lower clamp: a scale of zero or below gives `(0, 0)`.
pub fn scaled_dimensions(width: u32, height: u32, scale_percent: f32) -> (u32, u32) {
    let scale = scale_percent as f64 / 100.0;
    let w = (width as f64 * scale).floor() as u32;
    let h = (height as f64 * scale).floor() as u32;
    (w, h)
}

/// Scale by a percentage of the current size.
///
/// A zero target dimension yields an empty image of that size rather than
/// an error; callers bound the usable range.
pub fn resize(image: &Image, scale_percent: f32) -> Image {
    let (width, height) = scaled_dimensions(image.width, image.height, scale_percent);

    if width == 0 || height == 0 {
        return Image::blank(width, height, image.layout);
    }

    // Fast path: if dimensions match, just clone
    if (width, height) == image.dimensions() {
        return image.clone();
    }

    map_buffer(
        image,
        |buf| imageops::resize(buf, width, height, FilterType::Triangle),
        |buf| imageops::resize(buf, width, height, FilterType::Triangle),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::PixelLayout;

    /// Read the RGB triple at (x, y).
    fn rgb_at(image: &Image, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * image.width + x) * 3) as usize;
        [image.pixels[i], image.pixels[i + 1], image.pixels[i + 2]]
    }

    // ===== Rotation Tests =====

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let img = gradient_rgb(10, 4);
        let result = rotate(&img, Rotation::Cw90);
        assert_eq!(result.dimensions(), (4, 10));
    }

    #[test]
    fn test_rotate_270_swaps_dimensions() {
        let img = gradient_rgb(10, 4);
        let result = rotate(&img, Rotation::Ccw90);
        assert_eq!(result.dimensions(), (4, 10));
    }

    #[test]
    fn test_rotate_180_keeps_dimensions() {
        let img = gradient_rgb(10, 4);
        let result = rotate(&img, Rotation::Rot180);
        assert_eq!(result.dimensions(), (10, 4));
        assert_eq!(rgb_at(&result, 0, 0), rgb_at(&img, 9, 3));
    }

    #[test]
    fn test_rotate_90_is_clockwise() {
        let img = gradient_rgb(3, 2);
        let result = rotate(&img, Rotation::Cw90);
        // Bottom-left of the source lands at top-left
        assert_eq!(rgb_at(&result, 0, 0), rgb_at(&img, 0, 1));
        // Top-left of the source lands at top-right
        assert_eq!(rgb_at(&result, 1, 0), rgb_at(&img, 0, 0));
    }

    #[test]
    fn test_rotate_270_is_counter_clockwise() {
        let img = gradient_rgb(3, 2);
        let result = rotate(&img, Rotation::Ccw90);
        // Top-right of the source lands at top-left
        assert_eq!(rgb_at(&result, 0, 0), rgb_at(&img, 2, 0));
    }

    #[test]
    fn test_rotate_none_is_identity() {
        let img = gradient_rgb(7, 5);
        assert_eq!(rotate(&img, Rotation::from_degrees(45)), img);
    }

    #[test]
    fn test_four_quarter_turns_round_trip() {
        let img = gradient_gray(6, 4);
        let mut result = img.clone();
        for _ in 0..4 {
            result = rotate(&result, Rotation::Cw90);
        }
        assert_eq!(result, img);
    }

    // ===== Flip Tests =====

    #[test]
    fn test_flip_horizontal() {
        let img = gradient_rgb(5, 3);
        let result = flip(&img, FlipMode::Horizontal);
        assert_eq!(result.dimensions(), (5, 3));
        assert_eq!(rgb_at(&result, 0, 1), rgb_at(&img, 4, 1));
    }

    #[test]
    fn test_flip_vertical() {
        let img = gradient_rgb(5, 3);
        let result = flip(&img, FlipMode::Vertical);
        assert_eq!(rgb_at(&result, 2, 0), rgb_at(&img, 2, 2));
    }

    #[test]
    fn test_flip_twice_is_identity() {
        let img = gradient_gray(5, 3);
        let once = flip(&img, FlipMode::Vertical);
        assert_eq!(flip(&once, FlipMode::Vertical), img);
    }

    #[test]
    fn test_flip_unknown_mode_is_identity() {
        let img = gradient_rgb(5, 3);
        let mode: FlipMode = "diagonal".parse().unwrap();
        assert_eq!(flip(&img, mode), img);
    }

    // ===== Resize Tests =====

    #[test]
    fn test_scaled_dimensions_floor() {
        assert_eq!(scaled_dimensions(100, 50, 50.0), (50, 25));
        assert_eq!(scaled_dimensions(99, 33, 50.0), (49, 16));
        assert_eq!(scaled_dimensions(10, 10, 200.0), (20, 20));
        assert_eq!(scaled_dimensions(10, 10, 15.0), (1, 1));
    }

    #[test]
    fn test_scaled_dimensions_degenerate() {
        assert_eq!(scaled_dimensions(100, 50, 0.0), (0, 0));
        assert_eq!(scaled_dimensions(100, 50, -20.0), (0, 0));
        assert_eq!(scaled_dimensions(100, 50, 1.0), (1, 0));
    }

    #[test]
    fn test_resize_half() {
        let img = gradient_rgb(100, 50);
        let result = resize(&img, 50.0);
        assert_eq!(result.dimensions(), (50, 25));
        assert_eq!(result.byte_size(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_upscale_gray() {
        let img = gradient_gray(10, 8);
        let result = resize(&img, 150.0);
        assert_eq!(result.dimensions(), (15, 12));
        assert_eq!(result.layout, PixelLayout::Gray);
    }

    #[test]
    fn test_resize_hundred_percent_is_identity() {
        let img = gradient_rgb(13, 7);
        assert_eq!(resize(&img, 100.0), img);
    }

    #[test]
    fn test_resize_zero_scale_is_empty() {
        let img = gradient_rgb(10, 10);
        let result = resize(&img, 0.0);
        assert_eq!(result.dimensions(), (0, 0));
        assert!(result.is_empty());
        assert_eq!(result.layout, PixelLayout::Rgb);
    }

    #[test]
    fn test_operations_accept_empty_image() {
        let empty = resize(&gradient_rgb(10, 10), -5.0);
        assert!(rotate(&empty, Rotation::Cw90).is_empty());
        assert!(flip(&empty, FlipMode::Horizontal).is_empty());
        assert!(resize(&empty, 200.0).is_empty());
    }
}
