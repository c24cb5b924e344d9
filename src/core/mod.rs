//! Core building blocks: the buffer model, combine parameters, and the
//! resize/normalize/binarize/combine primitives. These are consumed by the
//! high-level `api` module.
pub mod buffer;
pub mod params;
pub mod processing;

/// Binarization cut-off: values strictly above become 255, the rest 0.
pub const BINARY_THRESHOLD: u8 = 127;

/// Largest allowed height or width once both inputs are reconciled.
pub const MAX_DIMENSION: usize = 2048;
