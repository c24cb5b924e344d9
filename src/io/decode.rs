//! Turning uploaded PNG/JPEG files into `PixelBuffer`s.
use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::{Array2, Array3};
use tracing::{debug, info};

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// File extensions accepted by the adapter, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Lowercased extension of `path`, or an empty string when it has none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Reject anything that is not `.png`, `.jpg` or `.jpeg` (case-insensitive).
pub fn validate_extension(path: &Path) -> Result<()> {
    let extension = file_extension(path);
    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat { extension })
    }
}

fn gray_to_buffer(gray: GrayImage) -> Result<PixelBuffer> {
    let (width, height) = gray.dimensions();
    let data = Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())?;
    Ok(PixelBuffer::from_gray(data))
}

fn rgb_to_buffer(rgb: RgbImage) -> Result<PixelBuffer> {
    let (width, height) = rgb.dimensions();
    let data = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())?;
    Ok(PixelBuffer::from_rgb(data))
}

/// Gray images keep a single channel whatever their bit depth; every other layout
/// becomes 8-bit RGB. Alpha is dropped.
pub fn dynamic_to_buffer(img: DynamicImage) -> Result<PixelBuffer> {
    match img {
        DynamicImage::ImageLuma8(gray) => gray_to_buffer(gray),
        gray @ (DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)) => gray_to_buffer(gray.to_luma8()),
        other => rgb_to_buffer(other.to_rgb8()),
    }
}

/// Decode encoded image bytes, guessing the format from their content.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(Error::DecodeFailure)?;
    debug!(
        "Decoded {}x{} image ({:?})",
        img.width(),
        img.height(),
        img.color()
    );
    dynamic_to_buffer(img)
}

/// Check the extension, read the file and decode it.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    validate_extension(path)?;
    let bytes = std::fs::read(path)?;
    info!("Loading image: {:?} ({} bytes)", path, bytes.len());
    decode_bytes(&bytes)
}
