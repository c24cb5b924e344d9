use std::borrow::Cow;

use ndarray::Array3;
use tracing::debug;

use crate::core::buffer::{PixelBuffer, Samples};

/// Bring samples to 8-bit. Wider types saturate into 0..=255; floats are
/// truncated toward zero and NaN maps to 0.
pub fn normalize_to_u8(buf: &PixelBuffer) -> Cow<'_, Array3<u8>> {
    match buf.samples() {
        Samples::U8(a) => Cow::Borrowed(a),
        Samples::U16(a) => {
            debug!("Casting {} samples to uint8", buf.element_type());
            Cow::Owned(a.mapv(|v| v.min(u8::MAX as u16) as u8))
        }
        Samples::F32(a) => {
            debug!("Casting {} samples to uint8", buf.element_type());
            // `as` saturates out-of-range floats and maps NaN to 0
            Cow::Owned(a.mapv(|v| v as u8))
        }
    }
}
