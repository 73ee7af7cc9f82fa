//! File codec: decode images from disk and encode them back.
//!
//! Uses the `image` crate's JPEG, PNG and BMP codecs. Decoded images are
//! always RGB (alpha is dropped, gray files are expanded). Encoding writes
//! gray images as 8-bit luma and RGB images as 8-bit RGB.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ExtendedColorType, ImageFormat, ImageReader};
use thiserror::Error;

use crate::types::{Image, PixelLayout};

/// Extensions offered by open dialogs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Extension appended when a save path has none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Errors that can occur while reading or writing image files.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error during file reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes could not be decoded as an image.
    #[error("Could not decode image: {0}")]
    Decode(String),

    /// Encoding failed inside the codec.
    #[error("Could not encode image: {0}")]
    Encode(String),

    /// The file extension is not one of the supported formats.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A zero-area image has nothing to write.
    #[error("Cannot save an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Decode an image from bytes, guessing the format from its contents.
///
/// # Errors
///
/// Returns `CodecError::Decode` if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<Image, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    Ok(Image::from_rgb_image(img.into_rgb8()))
}

/// Read and decode an image file.
pub fn open_image(path: &Path) -> Result<Image, CodecError> {
    let bytes = std::fs::read(path)?;
    let image = decode_image(&bytes)?;
    log::info!(
        "opened {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Append `default_extension` when `path` has no extension.
pub fn with_default_extension(path: &Path, default_extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(default_extension)
    }
}

/// Map a path's extension to an output format.
///
/// # Errors
///
/// Returns `CodecError::UnsupportedFormat` for a missing or unknown
/// extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat, CodecError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "bmp" => Ok(ImageFormat::Bmp),
        _ => Err(CodecError::UnsupportedFormat(ext)),
    }
}

/// Encode an image into `format`.
pub fn encode_image(image: &Image, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    if image.is_empty() {
        return Err(CodecError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.pixel_count() as usize * image.channels();
    if image.pixels.len() != expected {
        return Err(CodecError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let color = match image.layout {
        PixelLayout::Gray => ExtendedColorType::L8,
        PixelLayout::Rgb => ExtendedColorType::Rgb8,
    };

    let mut buffer = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut buffer,
        &image.pixels,
        image.width,
        image.height,
        color,
        format,
    )
    .map_err(|e| CodecError::Encode(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode and write an image, returning the path actually written.
///
/// A path without an extension gets `default_extension` appended first.
pub fn save_image(
    image: &Image,
    path: &Path,
    default_extension: &str,
) -> Result<PathBuf, CodecError> {
    let path = with_default_extension(path, default_extension);
    let format = format_for_path(&path)?;
    let bytes = encode_image(image, format)?;
    std::fs::write(&path, bytes)?;
    log::info!(
        "saved {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(path)
}
