use ndarray::{Array2, Zip};

use crate::types::LogicalOperation;

/// Element-wise logical combination of two binary grids of the same shape.
/// Any non-zero element counts as set; the output holds only 0 and 255.
pub fn combine_binary(a: &Array2<u8>, b: &Array2<u8>, op: LogicalOperation) -> Array2<u8> {
    Zip::from(a)
        .and(b)
        .map_collect(|&x, &y| if op.apply(x != 0, y != 0) { 255 } else { 0 })
}
