#![doc = r#"
IMGLOGIC — binarize two images and combine them with a pixel-wise logical AND or OR.

Both inputs are reduced to their common (smallest) footprint with area averaging,
clamped to a 2048px long side, converted to 8-bit gray, thresholded at 127 and then
combined element by element. The result is a single-channel image whose pixels are
all 0 or 255. Mismatched sizes are reconciled, never rejected.

The crate powers the `imglogic` CLI and can be embedded in your own applications,
for example behind an upload form that decodes files into buffers.

Combine in-memory buffers
-------------------------
```rust
use ndarray::Array2;
use imglogic::{combine_and, combine_or, PixelBuffer};

fn main() -> imglogic::Result<()> {
    let white = PixelBuffer::from_gray(Array2::from_elem((4, 4), 255u8));
    let black = PixelBuffer::from_gray(Array2::zeros((2, 2)));

    let and = combine_and(&white, &black)?;
    let or = combine_or(&white, &black)?;

    assert_eq!((and.height(), and.width()), (2, 2));
    assert!(and.as_array().iter().all(|&v| v == 0));
    assert!(or.as_array().iter().all(|&v| v == 255));
    Ok(())
}
```

Combine files to a PNG download
-------------------------------
```rust,no_run
use std::path::Path;
use imglogic::{combine_files, CombineParams, LogicalOperation};

fn main() -> imglogic::Result<()> {
    let params = CombineParams::new(LogicalOperation::Or);
    let result = combine_files(Path::new("mask_a.png"), Path::new("mask_b.jpg"), &params)?;

    // `result.png` holds the encoded bytes; `file_name` and `content_type`
    // describe the download.
    result.save(Path::new(result.file_name))?;
    Ok(())
}
```

Error handling
--------------
All public functions return `imglogic::Result<T>`. Buffer rejections carry the input
they refer to and a tagged reason:

```rust
use ndarray::Array2;
use imglogic::{combine_and, Error, InputSlot, InvalidBufferReason, PixelBuffer};

let empty = PixelBuffer::from_gray(Array2::zeros((0, 0)));
let other = PixelBuffer::from_gray(Array2::zeros((2, 2)));

match combine_and(&empty, &other) {
    Err(Error::InvalidBuffer { input: InputSlot::First, reason: InvalidBufferReason::Empty { .. } }) => {}
    other => panic!("unexpected: {:?}", other),
}
```

Useful modules
--------------
- [`api`] — high-level entry points (`combine_and`, `combine_or`, `describe`, `combine_files`).
- [`core`] — buffer model and the resize/normalize/binarize/combine stages.
- [`io`] — extension checks, decoding, PNG output.
- [`types`] — `LogicalOperation`, `ElementType`, `Dimension`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::buffer::{BinaryBuffer, BufferInfo, PixelBuffer, Samples};
pub use crate::core::params::CombineParams;
pub use crate::core::{BINARY_THRESHOLD, MAX_DIMENSION};
pub use error::{Error, InputSlot, InvalidBufferReason, Result};
pub use types::{Dimension, ElementType, LogicalOperation};

// File adapter
pub use io::{
    RESULT_CONTENT_TYPE, RESULT_FILE_NAME, decode_bytes, encode_png, load_image,
    validate_extension, write_png,
};

// High-level API re-exports
pub use api::{
    CombinedImage, PairReport, combine, combine_and, combine_files, combine_or, describe,
    inspect_files, inspect_pair,
};
