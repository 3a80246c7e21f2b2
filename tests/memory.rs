//! Tests for gather, scatter, prefetch, compress and transform.

use std::mem::size_of;

use lanewise::{ArrayError, F32x4, F64x4, I32x4, I64x4, StaticArray, U32x4};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Test pointer gather with element and struct strides, including negative indices.
#[test]
fn test_gather_pointer_forms() {
    let data: Vec<f32> = (0..16).map(|i| i as f32 * 1.5).collect();
    let index = I32x4::new([3, 0, 15, 7]);
    let r = unsafe { F32x4::gather::<{ size_of::<f32>() }, _>(data.as_ptr() as *const u8, &index) };
    assert_eq!(r.to_array(), [4.5, 0.0, 22.5, 10.5]);

    // Every other element, addressed from the middle of the buffer.
    let middle = unsafe { (data.as_ptr() as *const u8).add(8 * size_of::<f32>()) };
    let index = I32x4::new([-4, -1, 0, 3]);
    let r = unsafe { F32x4::gather::<{ 2 * size_of::<f32>() }, _>(middle, &index) };
    assert_eq!(r.to_array(), [0.0, 9.0, 12.0, 21.0]);
}

/// Test that masked gather never reads unselected lanes.
#[test]
fn test_gather_masked_skips_unselected_lanes() {
    let data = [10.0f64, 20.0, 30.0, 40.0];
    // Lane 1 points far outside the buffer; it must not be read.
    let index = I64x4::new([2, 1_000_000, 0, 3]);
    let r = unsafe {
        F64x4::gather_masked::<{ size_of::<f64>() }, _, _>(
            data.as_ptr() as *const u8,
            &index,
            &[true, false, true, true],
        )
    };
    assert_eq!(r.to_array(), [30.0, 0.0, 10.0, 40.0]);
}

/// Test pointer scatter and its masked form.
#[test]
fn test_scatter_pointer_forms() {
    let mut out = [0u32; 8];
    let v = U32x4::new([1, 2, 3, 4]);
    let index = I32x4::new([7, 0, 5, 2]);
    unsafe { v.scatter::<{ size_of::<u32>() }, _>(out.as_mut_ptr() as *mut u8, &index) };
    assert_eq!(out, [2, 0, 4, 0, 0, 3, 0, 1]);

    let mut out = [0u32; 8];
    let mask = index.cmp_gt(I32x4::splat(3));
    unsafe { v.scatter_masked::<{ size_of::<u32>() }, _, _>(out.as_mut_ptr() as *mut u8, &index, &mask) };
    assert_eq!(out, [0, 0, 0, 0, 0, 3, 0, 1]);
}

/// Test that prefetching has no observable effect, selected lanes or not.
#[test]
fn test_prefetch_is_side_effect_free() {
    let data: Vec<f32> = (0..64).map(|i| i as f32).collect();
    let snapshot = data.clone();
    let index = I32x4::new([0, 16, 32, 48]);
    let base = data.as_ptr() as *const u8;
    unsafe {
        F32x4::prefetch::<{ size_of::<f32>() }, false, 1, _>(base, &index);
        F32x4::prefetch::<{ size_of::<f32>() }, true, 2, _>(base, &index);
        F32x4::prefetch::<{ size_of::<f32>() }, false, 3, _>(base, &index);
        F32x4::prefetch_masked::<{ size_of::<f32>() }, false, 1, _, _>(
            base,
            &index,
            &[false, true, false, true],
        );
    }
    assert_eq!(data, snapshot);
}

/// Test compressed stores through a pointer that advances past the written lanes.
#[test]
fn test_store_compress_pointer() {
    let mut out = [0i32; 8];
    let a = I32x4::new([1, -2, 3, -4]);
    let b = I32x4::new([5, 6, -7, 8]);

    let mut cursor = out.as_mut_ptr();
    let first = unsafe { a.store_compress(&mut cursor, &a.cmp_gt(I32x4::zeros())) };
    let second = unsafe { b.store_compress(&mut cursor, &b.cmp_gt(I32x4::zeros())) };

    assert_eq!((first, second), (2, 3));
    assert_eq!(out, [1, 3, 5, 6, 8, 0, 0, 0]);
    assert_eq!(unsafe { cursor.offset_from(out.as_ptr()) }, 5);
}

/// Test the slice form of compressed stores, including a destination that is too short.
#[test]
fn test_store_compress_slice() {
    let a = F32x4::new([1.0, 2.0, 3.0, 4.0]);
    let mut out = [0.0f32; 4];
    let written = a.store_compress_slice(&mut out, &[false, true, true, false]).unwrap();
    assert_eq!(written, 2);
    assert_eq!(out, [2.0, 3.0, 0.0, 0.0]);

    let mut short = [0.0f32; 1];
    let err = a.store_compress_slice(&mut short, &[true; 4]).unwrap_err();
    assert!(matches!(err, ArrayError::Validation { .. }));
    assert_eq!(short, [0.0]);
}

/// Test transform visits every addressed element in lane order.
#[test]
fn test_transform_pointer_forms() {
    let mut histogram = [0u32; 4];
    let index = I32x4::new([1, 3, 1, 1]);
    unsafe {
        U32x4::transform::<{ size_of::<u32>() }, _, _>(
            histogram.as_mut_ptr() as *mut u8,
            &index,
            |count| *count += 1,
        );
    }
    assert_eq!(histogram, [0, 3, 0, 1]);

    let mut values = [1.0f32, 2.0, 3.0, 4.0];
    let mut visited = Vec::new();
    unsafe {
        F32x4::transform_masked::<{ size_of::<f32>() }, _, _, _>(
            values.as_mut_ptr() as *mut u8,
            &I32x4::new([3, 2, 1, 0]),
            &[true, false, true, false],
            |v| {
                visited.push(*v);
                *v *= 10.0;
            },
        );
    }
    assert_eq!(visited, [4.0, 2.0]);
    assert_eq!(values, [1.0, 20.0, 3.0, 40.0]);
}

/// Test the bounds-checked slice gather.
#[test]
fn test_gather_slice() {
    let data = [5i32, 6, 7, 8, 9];
    let r = I32x4::gather_slice(&data, &I32x4::new([4, 0, 2, 2])).unwrap();
    assert_eq!(r.to_array(), [9, 5, 7, 7]);

    let err = I32x4::gather_slice(&data, &I32x4::new([0, 5, 1, 1])).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 5, size: 5 });

    let err = I32x4::gather_slice(&data, &I32x4::new([0, 1, -1, 1])).unwrap_err();
    assert!(matches!(err, ArrayError::Validation { .. }));

    // Unselected lanes are neither validated nor read.
    let r = I32x4::gather_slice_masked(&data, &I32x4::new([1, 99, -3, 3]), &[true, false, false, true])
        .unwrap();
    assert_eq!(r.to_array(), [6, 0, 0, 8]);
}

/// Test that a slice scatter with one bad index writes nothing.
#[test]
fn test_scatter_slice_is_all_or_nothing() {
    let v = I64x4::new([1, 2, 3, 4]);
    let mut out = [0i64; 4];

    let err = v.scatter_slice(&mut out, &I64x4::new([0, 1, 2, 4])).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 4, size: 4 });
    assert_eq!(out, [0; 4]);

    v.scatter_slice(&mut out, &I64x4::new([3, 2, 1, 0])).unwrap();
    assert_eq!(out, [4, 3, 2, 1]);

    let mut out = [0i64; 4];
    v.scatter_slice_masked(&mut out, &I64x4::new([0, 10, 2, -1]), &[true, false, true, false])
        .unwrap();
    assert_eq!(out, [1, 0, 3, 0]);
}

/// Test the bounds-checked slice transform.
#[test]
fn test_transform_slice() {
    let mut data = [1.0f32, 2.0, 3.0];
    F32x4::transform_slice(&mut data, &I32x4::new([0, 0, 2, 1]), |v| *v *= 2.0).unwrap();
    assert_eq!(data, [4.0, 4.0, 6.0]);

    let err = F32x4::transform_slice(&mut data, &I32x4::new([0, 3, 0, 0]), |v| *v = 0.0).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 3, size: 3 });
    assert_eq!(data, [4.0, 4.0, 6.0]);
}

/// Test that scattering to distinct addresses and gathering them back is lossless.
#[test]
fn test_scatter_gather_round_trip() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut positions: Vec<i32> = (0..64).collect();

    for _ in 0..32 {
        positions.shuffle(&mut rng);
        let index = I32x4::from_fn(|i| positions[i]);
        let v = F32x4::from_fn(|_| rng.random_range(-100.0f32..100.0));

        let mut buffer = vec![0.0f32; 64];
        unsafe { v.scatter::<{ size_of::<f32>() }, _>(buffer.as_mut_ptr() as *mut u8, &index) };
        let back = unsafe { F32x4::gather::<{ size_of::<f32>() }, _>(buffer.as_ptr() as *const u8, &index) };
        assert_eq!(back, v);

        let mut buffer = vec![0.0f32; 64];
        v.scatter_slice(&mut buffer, &index).unwrap();
        assert_eq!(F32x4::gather_slice(&buffer, &index).unwrap(), v);
    }
}
