use tracing::{debug, info};

use crate::core::MAX_DIMENSION;
use crate::core::buffer::{BinaryBuffer, PixelBuffer};
use crate::core::processing::binarize::binarize;
use crate::core::processing::normalize::normalize_to_u8;
use crate::core::processing::ops::combine_binary;
use crate::core::processing::resize::{
    calculate_ceiling_dimensions, clamp_to_ceiling, reconcile_dimensions,
};
use crate::error::{InputSlot, Result};
use crate::types::{Dimension, LogicalOperation};

/// Dimensions `combine_pipeline` produces for these inputs, without touching pixels.
pub fn reconciled_dimension(a: &PixelBuffer, b: &PixelBuffer) -> Dimension {
    let common = a.dimension().min(b.dimension());
    calculate_ceiling_dimensions(common, MAX_DIMENSION)
}

/// Validate, reconcile, clamp, normalize, binarize and combine two buffers.
///
/// Both inputs are validated before any work starts, so a rejected call
/// allocates nothing. Mismatched dimensions are reduced to the common
/// footprint rather than rejected.
pub fn combine_pipeline(
    a: &PixelBuffer,
    b: &PixelBuffer,
    op: LogicalOperation,
) -> Result<BinaryBuffer> {
    a.validate(InputSlot::First)?;
    b.validate(InputSlot::Second)?;

    info!(
        "Logical {}: first {} ({} ch), second {} ({} ch)",
        op,
        a.dimension(),
        a.channels(),
        b.dimension(),
        b.channels()
    );

    let (a, b) = reconcile_dimensions(a, b);
    let a = clamp_to_ceiling(a, MAX_DIMENSION);
    let b = clamp_to_ceiling(b, MAX_DIMENSION);

    let a8 = normalize_to_u8(&a);
    let b8 = normalize_to_u8(&b);

    let binary_a = binarize(a8.view());
    let binary_b = binarize(b8.view());
    debug!(
        "Binarized inputs: {} and {} foreground pixels",
        binary_a.iter().filter(|&&v| v == 255).count(),
        binary_b.iter().filter(|&&v| v == 255).count()
    );

    let result = BinaryBuffer::from_array(combine_binary(&binary_a, &binary_b, op));
    info!(
        "Result {}: {} of {} pixels set",
        result.dimension(),
        result.count_set(),
        result.height() * result.width()
    );
    Ok(result)
}
