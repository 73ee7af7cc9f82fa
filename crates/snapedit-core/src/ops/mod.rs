//! Stateless image operations.
//!
//! Every operation takes an [`Image`] by reference plus its parameters and
//! returns a new [`Image`]. Inputs are never mutated and no operation fails:
//! out-of-range parameters are clamped, and unrecognised rotation angles or
//! flip modes return an unchanged copy of the input.
//!
//! # Operations
//!
//! | Operation | Output size | Output layout |
//! |---|---|---|
//! | [`to_grayscale`] | same | Gray |
//! | [`blur`] | same | same |
//! | [`detect_edges`] | same | Gray |
//! | [`adjust_brightness`] | same | same |
//! | [`adjust_contrast`] | same | same |
//! | [`rotate`] | swapped for 90/270 | same |
//! | [`flip`] | same | same |
//! | [`resize`] | scaled, floored | same |
//!
//! [`Edit`] bundles an operation with its parameters so callers can treat
//! edits as values.

mod color;
mod edit;
mod filter;
mod geometry;

pub use color::{adjust_brightness, adjust_contrast, contrast_factor, to_grayscale};
pub use edit::{Edit, FlipMode, ParseEditError, Rotation};
pub use filter::{
    blur, blur_kernel_size, blur_sigma, detect_edges, EDGE_HIGH_THRESHOLD, EDGE_LOW_THRESHOLD,
};
pub use geometry::{flip, resize, rotate, scaled_dimensions};

use image::{GrayImage, RgbImage};

use crate::types::{Image, PixelLayout};

/// Run a buffer-level transform matching the image's layout.
///
/// A pixel buffer whose length disagrees with the dimensions cannot be
/// viewed as an image buffer; such input is returned unchanged.
fn map_buffer(
    image: &Image,
    rgb: impl FnOnce(&RgbImage) -> RgbImage,
    gray: impl FnOnce(&GrayImage) -> GrayImage,
) -> Image {
    match image.layout {
        PixelLayout::Rgb => match image.to_rgb_image() {
            Some(buf) => Image::from_rgb_image(rgb(&buf)),
            None => image.clone(),
        },
        PixelLayout::Gray => match image.to_gray_image() {
            Some(buf) => Image::from_gray_image(gray(&buf)),
            None => image.clone(),
        },
    }
}

/// Apply a per-byte mapping to every channel of every pixel.
fn map_bytes(image: &Image, f: impl Fn(u8) -> u8) -> Image {
    Image {
        width: image.width,
        height: image.height,
        layout: image.layout,
        pixels: image.pixels.iter().map(|&v| f(v)).collect(),
    }
}
