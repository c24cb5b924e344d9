//! High-level, ergonomic library API: combine two in-memory buffers, inspect a
//! pair before combining, or run the whole file-to-PNG flow. Prefer these
//! entrypoints over the low-level processing modules when integrating IMGLOGIC.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::MAX_DIMENSION;
use crate::core::buffer::{BinaryBuffer, BufferInfo, PixelBuffer};
use crate::core::params::CombineParams;
use crate::core::processing::pipeline::{combine_pipeline, reconciled_dimension};
use crate::error::{InputSlot, Result};
use crate::io::decode::load_image;
use crate::io::writers::png::{RESULT_CONTENT_TYPE, RESULT_FILE_NAME, encode_png};
use crate::types::{Dimension, LogicalOperation};

/// Binarize both buffers and keep the pixels set in both.
pub fn combine_and(a: &PixelBuffer, b: &PixelBuffer) -> Result<BinaryBuffer> {
    combine_pipeline(a, b, LogicalOperation::And)
}

/// Binarize both buffers and keep the pixels set in either.
pub fn combine_or(a: &PixelBuffer, b: &PixelBuffer) -> Result<BinaryBuffer> {
    combine_pipeline(a, b, LogicalOperation::Or)
}

pub fn combine(a: &PixelBuffer, b: &PixelBuffer, op: LogicalOperation) -> Result<BinaryBuffer> {
    combine_pipeline(a, b, op)
}

/// Shape and element type of a buffer.
pub fn describe(buf: &PixelBuffer) -> BufferInfo {
    buf.describe()
}

/// What a combine call will do with a pair of inputs, computed without touching pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairReport {
    pub first: BufferInfo,
    pub second: BufferInfo,
    /// Inputs differ in height or width and will be reduced to the common footprint.
    pub dimensions_differ: bool,
    /// At least one input exceeds the size ceiling on some axis.
    pub oversized: bool,
    pub output: Dimension,
}

pub fn inspect_pair(a: &PixelBuffer, b: &PixelBuffer) -> PairReport {
    let first = a.describe();
    let second = b.describe();
    PairReport {
        first,
        second,
        dimensions_differ: first.dimension() != second.dimension(),
        oversized: first.exceeds_ceiling() || second.exceeds_ceiling(),
        output: reconciled_dimension(a, b),
    }
}

/// Outcome of one file-level combine request, ready to hand out as a download.
#[derive(Debug, Clone)]
pub struct CombinedImage {
    pub operation: LogicalOperation,
    pub info: BufferInfo,
    pub png: Vec<u8>,
    pub file_name: &'static str,
    pub content_type: &'static str,
}

fn load_input(path: &Path, slot: InputSlot) -> Result<PixelBuffer> {
    load_image(path).inspect_err(|e| warn!("Rejected {} image {:?}: {}", slot, path, e))
}

fn announce(report: &PairReport) {
    for (slot, info) in [
        (InputSlot::First, &report.first),
        (InputSlot::Second, &report.second),
    ] {
        if info.exceeds_ceiling() {
            warn!(
                "The {} image is {}, larger than {}px on one axis; it will be downscaled",
                slot,
                info.dimension(),
                MAX_DIMENSION
            );
        }
    }
    if report.dimensions_differ {
        info!(
            "Image sizes differ ({} vs {}); both will be reduced to {}",
            report.first.dimension(),
            report.second.dimension(),
            report.output
        );
    }
}

/// Load two image files, combine them and encode the result as PNG.
pub fn combine_files(first: &Path, second: &Path, params: &CombineParams) -> Result<CombinedImage> {
    let a = load_input(first, InputSlot::First)?;
    let b = load_input(second, InputSlot::Second)?;

    announce(&inspect_pair(&a, &b));

    let result = combine(&a, &b, params.operation)?;
    let info = result.describe();
    let png = encode_png(&result)?;

    Ok(CombinedImage {
        operation: params.operation,
        info,
        png,
        file_name: RESULT_FILE_NAME,
        content_type: RESULT_CONTENT_TYPE,
    })
}

/// Describe two image files without combining them.
pub fn inspect_files(first: &Path, second: &Path) -> Result<PairReport> {
    let a = load_input(first, InputSlot::First)?;
    let b = load_input(second, InputSlot::Second)?;
    Ok(inspect_pair(&a, &b))
}

impl CombinedImage {
    pub fn save(&self, output: &Path) -> Result<()> {
        std::fs::write(output, &self.png)?;
        info!("Saved {} result to {}", self.operation, output.display());
        Ok(())
    }
}
