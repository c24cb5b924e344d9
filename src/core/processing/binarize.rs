use ndarray::{Array2, ArrayView3, Axis, Zip};

use crate::core::BINARY_THRESHOLD;

// ITU-R BT.601 luma weights in 14-bit fixed point; they sum to exactly 1 << 14,
// so a neutral gray maps to itself.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Weighted RGB to gray conversion of a single pixel.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

#[inline]
pub fn threshold(v: u8) -> u8 {
    if v > BINARY_THRESHOLD { 255 } else { 0 }
}

/// Collapse a `(height, width, channels)` grid to one gray channel.
/// Channels other than 1 or 3 are rejected upstream by `PixelBuffer::validate`.
pub fn to_grayscale(pixels: ArrayView3<'_, u8>) -> Array2<u8> {
    if pixels.len_of(Axis(2)) == 1 {
        return pixels.index_axis(Axis(2), 0).to_owned();
    }
    Zip::from(pixels.lanes(Axis(2))).map_collect(|px| luma(px[0], px[1], px[2]))
}

/// Grayscale conversion followed by the fixed threshold: every element ends up 0 or 255.
pub fn binarize(pixels: ArrayView3<'_, u8>) -> Array2<u8> {
    let mut gray = to_grayscale(pixels);
    gray.mapv_inplace(threshold);
    gray
}
