//! The in-memory image value shared by every module.

/// Channel layout of an [`Image`]'s pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelLayout {
    /// Single 8-bit luma channel.
    Gray,
    /// Three 8-bit channels in R, G, B order.
    #[default]
    Rgb,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::Rgb => 3,
        }
    }
}

/// An image with 8-bit pixel data.
///
/// Equality is byte-for-byte: two images are equal when they have the same
/// dimensions, layout and pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub layout: PixelLayout,
    /// Pixel data in row-major order.
    /// Length should be width * height * layout.channels().
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create a new Image with the given dimensions, layout and pixel data.
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create a zero-filled image.
    pub fn blank(width: u32, height: u32, layout: PixelLayout) -> Self {
        let len = width as usize * height as usize * layout.channels();
        Self::new(width, height, layout, vec![0; len])
    }

    /// Create an Image from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb,
            pixels: img.into_raw(),
        }
    }

    /// Create an Image from an image::GrayImage.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Gray,
            pixels: img.into_raw(),
        }
    }

    /// View as an image::RgbImage. Returns `None` for gray images or a
    /// mismatched buffer.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        match self.layout {
            PixelLayout::Rgb => {
                image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            PixelLayout::Gray => None,
        }
    }

    /// View as an image::GrayImage. Returns `None` for RGB images or a
    /// mismatched buffer.
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        match self.layout {
            PixelLayout::Gray => {
                image::GrayImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            PixelLayout::Rgb => None,
        }
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per pixel.
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this image has no pixels (degenerate resize output).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
