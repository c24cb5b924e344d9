//! Output encoders for combine results.
pub mod png;
