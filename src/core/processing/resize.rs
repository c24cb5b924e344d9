use std::borrow::Cow;

use ndarray::{Array2, Array3, Axis, Zip};
use tracing::{debug, info};

use crate::core::buffer::{PixelBuffer, Samples};
use crate::types::Dimension;

/// Shrink `original` so its long side fits in `max_side`, keeping the aspect ratio.
/// Dimensions already within the limit are returned unchanged.
pub fn calculate_ceiling_dimensions(original: Dimension, max_side: usize) -> Dimension {
    if original.height <= max_side && original.width <= max_side {
        return original;
    }

    // Integer arithmetic keeps the long side at exactly `max_side` and floors the short one
    let long_side = original.long_side();
    let height = (original.height * max_side / long_side).clamp(1, max_side);
    let width = (original.width * max_side / long_side).clamp(1, max_side);

    Dimension::new(height, width)
}

/// Element types the area resampler accumulates in `f64` and writes back.
pub trait AreaSample: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl AreaSample for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.round().clamp(0.0, u8::MAX as f64) as u8
    }
}

impl AreaSample for u16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

impl AreaSample for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

/// For each destination index along one axis, the source indices its footprint
/// `[d * scale, (d + 1) * scale)` touches and their overlap fractions.
/// The weights of one destination index sum to 1.
fn area_weights(src_len: usize, dst_len: usize) -> Vec<Vec<(usize, f64)>> {
    if src_len == 0 || dst_len == 0 {
        return vec![Vec::new(); dst_len];
    }

    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = ((d + 1) as f64 * scale).min(src_len as f64);
            let span = end - start;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);

            (first..last)
                .filter_map(|s| {
                    let overlap = end.min((s + 1) as f64) - start.max(s as f64);
                    (overlap > 1e-9).then_some((s, overlap / span))
                })
                .collect()
        })
        .collect()
}

/// Area-averaging resample of a `(height, width, channels)` grid.
///
/// Every destination pixel is the mean of the source pixels under its footprint,
/// each weighted by the fraction of it that the footprint covers. Rows are
/// accumulated first, so only one source-width row of `f64` is kept around.
pub fn area_resample<T: AreaSample>(data: &Array3<T>, target: Dimension) -> Array3<T> {
    let (rows, cols, channels) = data.dim();
    let row_taps = area_weights(rows, target.height);
    let col_taps = area_weights(cols, target.width);

    let mut out = Array3::from_elem((target.height, target.width, channels), T::from_f64(0.0));
    let mut acc = Array2::<f64>::zeros((cols, channels));

    for (ty, taps) in row_taps.iter().enumerate() {
        acc.fill(0.0);
        for &(sy, wy) in taps {
            Zip::from(&mut acc)
                .and(&data.index_axis(Axis(0), sy))
                .for_each(|a, &v| *a += wy * v.to_f64());
        }

        let mut out_row = out.index_axis_mut(Axis(0), ty);
        for (tx, taps) in col_taps.iter().enumerate() {
            for c in 0..channels {
                let sum: f64 = taps.iter().map(|&(sx, wx)| wx * acc[[sx, c]]).sum();
                out_row[[tx, c]] = T::from_f64(sum);
            }
        }
    }

    out
}

/// Resample a buffer to `target`, keeping its element type and channel count.
pub fn resize_buffer(buf: &PixelBuffer, target: Dimension) -> PixelBuffer {
    debug!("Resampling {} -> {}", buf.dimension(), target);
    let samples = match buf.samples() {
        Samples::U8(a) => Samples::U8(area_resample(a, target)),
        Samples::U16(a) => Samples::U16(area_resample(a, target)),
        Samples::F32(a) => Samples::F32(area_resample(a, target)),
    };
    PixelBuffer::new(samples)
}

/// Bring both buffers to their common (smallest) footprint. Buffers that already
/// share height and width are passed through untouched; nothing is ever upsampled.
pub fn reconcile_dimensions<'a>(
    a: &'a PixelBuffer,
    b: &'a PixelBuffer,
) -> (Cow<'a, PixelBuffer>, Cow<'a, PixelBuffer>) {
    let (dim_a, dim_b) = (a.dimension(), b.dimension());
    if dim_a == dim_b {
        return (Cow::Borrowed(a), Cow::Borrowed(b));
    }

    let target = dim_a.min(dim_b);
    info!(
        "Dimensions differ ({} vs {}), reducing both to {}",
        dim_a, dim_b, target
    );

    let resized_a = if dim_a == target {
        Cow::Borrowed(a)
    } else {
        Cow::Owned(resize_buffer(a, target))
    };
    let resized_b = if dim_b == target {
        Cow::Borrowed(b)
    } else {
        Cow::Owned(resize_buffer(b, target))
    };
    (resized_a, resized_b)
}

/// Downscale a buffer whose height or width exceeds `max_side`.
pub fn clamp_to_ceiling(buf: Cow<'_, PixelBuffer>, max_side: usize) -> Cow<'_, PixelBuffer> {
    let original = buf.dimension();
    let target = calculate_ceiling_dimensions(original, max_side);
    if target == original {
        return buf;
    }

    info!(
        "Image {} exceeds the {}px ceiling, downscaling to {}",
        original, max_side, target
    );
    Cow::Owned(resize_buffer(&buf, target))
}
