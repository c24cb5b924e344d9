mod common;

use common::synthetic_image::{checkerboard_u8, gray_rect, noise_u8, rgb_rect};
use imglogic::{
    BinaryBuffer, Dimension, Error, InputSlot, InvalidBufferReason, LogicalOperation, PixelBuffer,
    combine, combine_and, combine_or, inspect_pair,
};
use ndarray::{Array2, Array3};

fn binary_of(values: Array2<u8>) -> Array2<u8> {
    values.mapv(|v| if v > 127 { 255 } else { 0 })
}

fn assert_binary(result: &BinaryBuffer) {
    assert!(
        result.as_array().iter().all(|&v| v == 0 || v == 255),
        "result contains values other than 0 and 255"
    );
}

#[test]
fn identical_binary_input_is_a_fixed_point() {
    let x = PixelBuffer::from_gray(binary_of(noise_u8(37, 53, 7)));

    let and = combine_and(&x, &x).unwrap();
    let or = combine_or(&x, &x).unwrap();

    assert_eq!(PixelBuffer::from(and), x);
    assert_eq!(PixelBuffer::from(or), x);
}

#[test]
fn operations_commute_for_equal_dimensions() {
    let a = PixelBuffer::from_gray(noise_u8(40, 30, 1));
    let mut rgb = Array3::<u8>::zeros((40, 30, 3));
    for ((y, x, c), v) in rgb.indexed_iter_mut() {
        *v = ((y * 7 + x * 13 + c * 29) % 256) as u8;
    }
    let b = PixelBuffer::from_rgb(rgb);

    assert_eq!(combine_and(&a, &b).unwrap(), combine_and(&b, &a).unwrap());
    assert_eq!(combine_or(&a, &b).unwrap(), combine_or(&b, &a).unwrap());
}

#[test]
fn every_result_element_is_binary() {
    let a = PixelBuffer::from_gray(noise_u8(64, 48, 3));
    let b = PixelBuffer::from_gray(checkerboard_u8(50, 70, 5));

    for op in [LogicalOperation::And, LogicalOperation::Or] {
        let result = combine(&a, &b, op).unwrap();
        assert_binary(&result);
    }
}

#[test]
fn reconciliation_never_upsamples() {
    let cases = [
        ((10, 20), (20, 10)),
        ((1, 1), (64, 64)),
        ((33, 17), (33, 18)),
        ((5, 90), (80, 4)),
    ];
    for ((ha, wa), (hb, wb)) in cases {
        let a = PixelBuffer::from_gray(checkerboard_u8(ha, wa, 2));
        let b = PixelBuffer::from_gray(checkerboard_u8(hb, wb, 3));
        let result = combine_or(&a, &b).unwrap();

        assert_eq!(result.dimension(), Dimension::new(ha.min(hb), wa.min(wb)));
        assert_binary(&result);
    }
}

#[test]
fn zero_absorbs_and_and_full_absorbs_or() {
    let zeros = PixelBuffer::filled(24, 32, 1, 0);
    let full = PixelBuffer::filled(24, 32, 3, 255);
    let other = PixelBuffer::from_gray(noise_u8(30, 40, 11));

    let and = combine_and(&zeros, &other).unwrap();
    assert_eq!(and.dimension(), Dimension::new(24, 32));
    assert!(and.as_array().iter().all(|&v| v == 0));

    let or = combine_or(&other, &full).unwrap();
    assert_eq!(or.dimension(), Dimension::new(24, 32));
    assert!(or.as_array().iter().all(|&v| v == 255));
}

#[test]
fn white_4x4_and_black_2x2_reduce_to_2x2() {
    let a = PixelBuffer::filled(4, 4, 1, 255);
    let b = PixelBuffer::filled(2, 2, 1, 0);

    let and = combine_and(&a, &b).unwrap();
    assert_eq!(and.as_array(), &Array2::<u8>::zeros((2, 2)));

    let or = combine_or(&a, &b).unwrap();
    assert_eq!(or.as_array(), &Array2::<u8>::from_elem((2, 2), 255));
}

#[test]
fn rgb_square_and_gray_square_reproduce_the_square() {
    let a = PixelBuffer::from_rgb(rgb_rect(100, 50, 20, 10, 30, 30));
    let expected = gray_rect(100, 50, 20, 10, 30, 30);
    let b = PixelBuffer::from_gray(expected.clone());

    let and = combine_and(&a, &b).unwrap();
    assert_eq!(and.dimension(), Dimension::new(100, 50));
    assert_eq!(and.as_array(), &expected);
    assert_eq!(and.count_set(), 30 * 30);
}

#[test]
fn empty_buffer_is_rejected() {
    let empty = PixelBuffer::from_gray(Array2::zeros((0, 0)));
    let fine = PixelBuffer::filled(3, 3, 1, 255);

    match combine_and(&empty, &fine) {
        Err(Error::InvalidBuffer { input, reason }) => {
            assert_eq!(input, InputSlot::First);
            assert_eq!(reason, InvalidBufferReason::Empty { height: 0, width: 0 });
        }
        other => panic!("expected InvalidBuffer, got {:?}", other),
    }

    let err = combine_or(&fine, &PixelBuffer::filled(5, 0, 3, 0)).unwrap_err();
    assert_eq!(err.input_slot(), Some(InputSlot::Second));
}

#[test]
fn four_channel_buffer_is_rejected() {
    let rgba = PixelBuffer::filled(8, 8, 4, 255);
    let gray = PixelBuffer::filled(8, 8, 1, 255);

    match combine_or(&gray, &rgba) {
        Err(Error::InvalidBuffer { input, reason }) => {
            assert_eq!(input, InputSlot::Second);
            assert_eq!(reason, InvalidBufferReason::UnsupportedChannels { channels: 4 });
        }
        other => panic!("expected InvalidBuffer, got {:?}", other),
    }
}

#[test]
fn oversized_inputs_are_clamped_to_the_ceiling() {
    let big = PixelBuffer::filled(3000, 1000, 1, 200);

    let result = combine_and(&big, &big).unwrap();
    assert_eq!(result.dimension(), Dimension::new(2048, 682));
    assert!(result.as_array().iter().all(|&v| v == 255));
}

#[test]
fn mismatched_oversized_inputs_are_reconciled_then_clamped() {
    // top half white: rows 0..1250 of 2500
    let a = PixelBuffer::from_rgb(rgb_rect(2500, 3100, 0, 0, 1250, 3100));
    let b = PixelBuffer::filled(3000, 2100, 1, 255);

    let expected = Dimension::new(2048, 1720);
    assert_eq!(inspect_pair(&a, &b).output, expected);

    let and = combine_and(&a, &b).unwrap();
    assert_eq!(and.dimension(), expected);
    assert_eq!(and.dimension(), inspect_pair(&b, &a).output);
    assert_binary(&and);

    // 1250 source rows map onto exactly 1024 destination rows
    assert_eq!(and.count_set(), 1024 * 1720);
    assert_eq!(and.as_array()[[1023, 0]], 255);
    assert_eq!(and.as_array()[[1024, 1719]], 0);

    assert_eq!(combine_and(&b, &a).unwrap(), and);
}

#[test]
fn operations_commute_for_mismatched_dimensions() {
    let a = PixelBuffer::from_gray(noise_u8(45, 70, 9));
    let b = PixelBuffer::from_rgb(rgb_rect(60, 52, 10, 8, 30, 25));

    assert_eq!(combine_and(&a, &b).unwrap(), combine_and(&b, &a).unwrap());
    assert_eq!(combine_or(&a, &b).unwrap(), combine_or(&b, &a).unwrap());
}

#[test]
fn partial_overlap_is_averaged_before_thresholding() {
    // width 3 -> 2 averages [0, 0, 180] to [0, 120], below the threshold
    let row = PixelBuffer::from_gray(Array2::from_shape_vec((1, 3), vec![0, 0, 180]).unwrap());
    let white = PixelBuffer::filled(1, 2, 1, 255);

    let and = combine_and(&row, &white).unwrap();
    assert_eq!(and.as_array(), &Array2::<u8>::zeros((1, 2)));

    let or = combine_or(&row, &PixelBuffer::filled(1, 2, 1, 0)).unwrap();
    assert_eq!(or.as_array(), &Array2::<u8>::zeros((1, 2)));

    // 210 keeps the second pixel at 140 after averaging
    let brighter =
        PixelBuffer::from_gray(Array2::from_shape_vec((1, 3), vec![0, 0, 210]).unwrap());
    let and = combine_and(&brighter, &white).unwrap();
    assert_eq!(and.as_array().iter().copied().collect::<Vec<_>>(), vec![0, 255]);
}

#[test]
fn wide_element_types_are_normalized() {
    // u16 values saturate to 255, f32 values truncate toward zero
    let wide = PixelBuffer::from(Array3::<u16>::from_elem((6, 6, 1), 4000));
    let dim_float = PixelBuffer::from(Array3::<f32>::from_elem((6, 6, 3), 127.9));
    let bright_float = PixelBuffer::from(Array3::<f32>::from_elem((6, 6, 3), 128.0));

    let or = combine_or(&dim_float, &dim_float).unwrap();
    assert!(or.as_array().iter().all(|&v| v == 0));

    let and = combine_and(&wide, &bright_float).unwrap();
    assert!(and.as_array().iter().all(|&v| v == 255));
}

#[test]
fn results_are_deterministic() {
    let a = PixelBuffer::from_gray(noise_u8(90, 70, 21));
    let b = PixelBuffer::from_gray(checkerboard_u8(60, 80, 4));

    let first = combine_and(&a, &b).unwrap();
    let second = combine_and(&a, &b).unwrap();
    assert_eq!(first, second);
}
