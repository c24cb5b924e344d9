use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use tracing::info;

use crate::core::buffer::BinaryBuffer;
use crate::error::{Error, Result};

/// Download name offered for a combine result.
pub const RESULT_FILE_NAME: &str = "logical_operation_result.png";

/// MIME type of the encoded result.
pub const RESULT_CONTENT_TYPE: &str = "image/png";

pub fn to_gray_image(binary: &BinaryBuffer) -> GrayImage {
    let data = binary.as_array();
    GrayImage::from_fn(binary.width() as u32, binary.height() as u32, |x, y| {
        Luma([data[[y as usize, x as usize]]])
    })
}

/// Encode a binary result as an 8-bit grayscale PNG.
pub fn encode_png(binary: &BinaryBuffer) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    to_gray_image(binary)
        .write_to(&mut out, ImageFormat::Png)
        .map_err(Error::Encode)?;
    Ok(out.into_inner())
}

pub fn write_png(output: &Path, binary: &BinaryBuffer) -> Result<()> {
    let bytes = encode_png(binary)?;
    std::fs::write(output, &bytes)?;
    info!("Wrote {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}
