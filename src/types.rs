//! Shared types and enums used across IMGLOGIC.
//! Includes `LogicalOperation`, `ElementType` and `Dimension`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperation {
    #[default]
    And,
    Or,
}

impl LogicalOperation {
    #[inline]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            LogicalOperation::And => a && b,
            LogicalOperation::Or => a || b,
        }
    }
}

impl std::fmt::Display for LogicalOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOperation::And => write!(f, "AND"),
            LogicalOperation::Or => write!(f, "OR"),
        }
    }
}

/// Per-channel sample type of a `PixelBuffer`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    U8,
    U16,
    F32,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ElementType::U8 => "uint8",
            ElementType::U16 => "uint16",
            ElementType::F32 => "float32",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimension {
    pub height: usize,
    pub width: usize,
}

impl Dimension {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Componentwise minimum: the common footprint of two images.
    pub fn min(self, other: Dimension) -> Dimension {
        Dimension {
            height: self.height.min(other.height),
            width: self.width.min(other.width),
        }
    }

    pub fn long_side(self) -> usize {
        self.height.max(self.width)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
