use ndarray::{Array2, Array3};

/// Generates a high-contrast checkerboard, cells alternating 32 and 220.
pub fn checkerboard_u8(height: usize, width: usize, cell: usize) -> Array2<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    Array2::from_shape_fn((height, width), |(y, x)| {
        if ((x / cell) + (y / cell)) % 2 == 0 { 32 } else { 220 }
    })
}

/// Deterministic pseudo-random gray noise (xorshift), covering the whole 0..=255 range.
pub fn noise_u8(height: usize, width: usize, seed: u32) -> Array2<u8> {
    let mut state = seed.max(1);
    Array2::from_shape_fn((height, width), |_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    })
}

/// Black gray image with a white axis-aligned rectangle.
pub fn gray_rect(
    height: usize,
    width: usize,
    top: usize,
    left: usize,
    rect_h: usize,
    rect_w: usize,
) -> Array2<u8> {
    Array2::from_shape_fn((height, width), |(y, x)| {
        let inside = y >= top && y < top + rect_h && x >= left && x < left + rect_w;
        if inside { 255 } else { 0 }
    })
}

/// Same as `gray_rect`, but as an interleaved RGB image.
pub fn rgb_rect(
    height: usize,
    width: usize,
    top: usize,
    left: usize,
    rect_h: usize,
    rect_w: usize,
) -> Array3<u8> {
    let gray = gray_rect(height, width, top, left, rect_h, rect_w);
    Array3::from_shape_fn((height, width, 3), |(y, x, _)| gray[[y, x]])
}
