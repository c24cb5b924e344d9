//! File adapter around the core: extension checks and PNG/JPEG decoding
//! (`decode`), and PNG output for results (`writers`).
pub mod decode;
pub use decode::{decode_bytes, load_image, validate_extension};

pub mod writers;
pub use writers::png::{RESULT_CONTENT_TYPE, RESULT_FILE_NAME, encode_png, write_png};
