//! Combine pipeline stages, in the order they run: `resize` (reconcile and
//! clamp), `normalize` (element type), `binarize` (luma and threshold), `ops`
//! (logical combination). `pipeline` chains them.
pub mod binarize;
pub mod normalize;
pub mod ops;
pub mod pipeline;
pub mod resize;
