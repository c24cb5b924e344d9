//! In-memory pixel grids exchanged with the combine pipeline.
//!
//! `PixelBuffer` accepts any `(height, width, channels)` array so that malformed
//! inputs reach the pipeline and get rejected there with a tagged reason.
//! `BinaryBuffer` can only be produced by the pipeline, which guarantees that every
//! element is 0 or 255.
use ndarray::{Array2, Array3, Axis};
use serde::{Deserialize, Serialize};

use crate::core::MAX_DIMENSION;
use crate::error::{Error, InputSlot, InvalidBufferReason, Result};
use crate::types::{Dimension, ElementType};

/// Sample storage, laid out as `(height, width, channels)` with interleaved channels.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    U8(Array3<u8>),
    U16(Array3<u16>),
    F32(Array3<f32>),
}

impl Samples {
    fn dim(&self) -> (usize, usize, usize) {
        match self {
            Samples::U8(a) => a.dim(),
            Samples::U16(a) => a.dim(),
            Samples::F32(a) => a.dim(),
        }
    }
}

/// A grayscale or RGB image handed to the combiner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    samples: Samples,
}

impl PixelBuffer {
    pub fn new(samples: Samples) -> Self {
        Self { samples }
    }

    /// Single-channel 8-bit image from a `(height, width)` grid.
    pub fn from_gray(gray: Array2<u8>) -> Self {
        Self::new(Samples::U8(gray.insert_axis(Axis(2))))
    }

    /// 8-bit image from a `(height, width, channels)` grid.
    pub fn from_rgb(rgb: Array3<u8>) -> Self {
        Self::new(Samples::U8(rgb))
    }

    /// Uniform 8-bit image, mostly useful for masks and tests.
    pub fn filled(height: usize, width: usize, channels: usize, value: u8) -> Self {
        Self::new(Samples::U8(Array3::from_elem((height, width, channels), value)))
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn into_samples(self) -> Samples {
        self.samples
    }

    pub fn height(&self) -> usize {
        self.samples.dim().0
    }

    pub fn width(&self) -> usize {
        self.samples.dim().1
    }

    pub fn channels(&self) -> usize {
        self.samples.dim().2
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.height(), self.width())
    }

    pub fn element_type(&self) -> ElementType {
        match self.samples {
            Samples::U8(_) => ElementType::U8,
            Samples::U16(_) => ElementType::U16,
            Samples::F32(_) => ElementType::F32,
        }
    }

    /// Check the processing preconditions: non-empty, 1 or 3 channels.
    pub fn validate(&self, input: InputSlot) -> Result<()> {
        let (height, width, channels) = self.samples.dim();
        if height == 0 || width == 0 {
            return Err(Error::InvalidBuffer {
                input,
                reason: InvalidBufferReason::Empty { height, width },
            });
        }
        if channels != 1 && channels != 3 {
            return Err(Error::InvalidBuffer {
                input,
                reason: InvalidBufferReason::UnsupportedChannels { channels },
            });
        }
        Ok(())
    }

    pub fn describe(&self) -> BufferInfo {
        let (height, width, channels) = self.samples.dim();
        BufferInfo {
            height,
            width,
            channels,
            element_type: self.element_type(),
            element_count: height * width * channels,
        }
    }
}

impl From<Array2<u8>> for PixelBuffer {
    fn from(gray: Array2<u8>) -> Self {
        PixelBuffer::from_gray(gray)
    }
}

impl From<Array3<u8>> for PixelBuffer {
    fn from(data: Array3<u8>) -> Self {
        PixelBuffer::new(Samples::U8(data))
    }
}

impl From<Array3<u16>> for PixelBuffer {
    fn from(data: Array3<u16>) -> Self {
        PixelBuffer::new(Samples::U16(data))
    }
}

impl From<Array3<f32>> for PixelBuffer {
    fn from(data: Array3<f32>) -> Self {
        PixelBuffer::new(Samples::F32(data))
    }
}

/// Shape and type metadata of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferInfo {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub element_type: ElementType,
    pub element_count: usize,
}

impl BufferInfo {
    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.height, self.width)
    }

    /// True when the buffer will be shrunk by the size ceiling before processing.
    pub fn exceeds_ceiling(&self) -> bool {
        self.height > MAX_DIMENSION || self.width > MAX_DIMENSION
    }
}

/// Single-channel result whose elements are all 0 or 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBuffer {
    data: Array2<u8>,
}

impl BinaryBuffer {
    pub(crate) fn from_array(data: Array2<u8>) -> Self {
        debug_assert!(data.iter().all(|&v| v == 0 || v == 255));
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.height(), self.width())
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }

    pub fn describe(&self) -> BufferInfo {
        BufferInfo {
            height: self.height(),
            width: self.width(),
            channels: 1,
            element_type: ElementType::U8,
            element_count: self.data.len(),
        }
    }

    /// Number of foreground (255) pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v == 255).count()
    }
}

impl From<BinaryBuffer> for PixelBuffer {
    fn from(binary: BinaryBuffer) -> Self {
        PixelBuffer::from_gray(binary.data)
    }
}
