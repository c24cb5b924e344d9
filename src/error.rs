//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Buffer rejections carry a tagged reason and the input they refer to, so callers
//! can point at the offending image without parsing messages.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two combine inputs an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputSlot {
    First,
    Second,
}

impl std::fmt::Display for InputSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSlot::First => write!(f, "first"),
            InputSlot::Second => write!(f, "second"),
        }
    }
}

/// Why a pixel buffer was rejected before processing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidBufferReason {
    Empty { height: usize, width: usize },
    UnsupportedChannels { channels: usize },
}

impl std::fmt::Display for InvalidBufferReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBufferReason::Empty { height, width } => {
                write!(f, "empty buffer ({}x{})", width, height)
            }
            InvalidBufferReason::UnsupportedChannels { channels } => {
                write!(f, "unsupported channel count {} (expected 1 or 3)", channels)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {input} image: {reason}")]
    InvalidBuffer {
        input: InputSlot,
        reason: InvalidBufferReason,
    },

    #[error("Unsupported file format: {extension:?}. Expected .png, .jpg or .jpeg")]
    UnsupportedFormat { extension: String },

    #[error("Failed to decode image: {0}")]
    DecodeFailure(#[source] image::ImageError),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Buffer shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// True for rejections that concern one specific input image.
    pub fn input_slot(&self) -> Option<InputSlot> {
        match self {
            Error::InvalidBuffer { input, .. } => Some(*input),
            _ => None,
        }
    }
}
