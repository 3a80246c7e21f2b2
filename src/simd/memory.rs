//! Indexed memory operations.
//!
//! The pointer forms address lane `i` at `mem + STRIDE * index[i]` bytes, with `index`
//! an integer array of the same lane count; indices may be negative for signed index
//! lanes. They loop over the lanes and issue one scalar access each, which is what a
//! hardware gather or scatter instruction replaces.
//!
//! The slice forms count indices in elements, validate every selected index before
//! touching memory, and report a bad index as [`ArrayError::OutOfRange`].
//!
//! [`ArrayError::OutOfRange`]: crate::error::ArrayError::OutOfRange

use crate::error::{out_of_range_error, validation_error, Result};
use crate::simd::scalar::Scalar;
use crate::simd::traits::{MaskLike, StaticArray};

#[inline(always)]
fn byte_offset<I: Scalar>(stride: usize, index: I) -> isize {
    (stride as isize).wrapping_mul(index.as_i64() as isize)
}

#[inline(always)]
unsafe fn lane_ptr<T, I: Scalar>(mem: *const u8, stride: usize, index: I) -> *const T {
    unsafe { mem.offset(byte_offset(stride, index)) as *const T }
}

#[inline(always)]
unsafe fn lane_ptr_mut<T, I: Scalar>(mem: *mut u8, stride: usize, index: I) -> *mut T {
    unsafe { mem.offset(byte_offset(stride, index)) as *mut T }
}

/// # Safety
///
/// See [`StaticArray::gather`].
#[inline(always)]
pub unsafe fn gather<A: StaticArray, const STRIDE: usize, I: StaticArray>(
    mem: *const u8,
    index: &I,
) -> A {
    const { assert!(I::SIZE == A::SIZE, "gather(): index array lane count mismatch") };
    A::from_fn(|i| unsafe { lane_ptr::<A::Value, _>(mem, STRIDE, *index.coeff(i)).read_unaligned() })
}

/// # Safety
///
/// See [`StaticArray::gather_masked`].
#[inline(always)]
pub unsafe fn gather_masked<A: StaticArray, const STRIDE: usize, I: StaticArray, M: MaskLike>(
    mem: *const u8,
    index: &I,
    mask: &M,
) -> A {
    const { assert!(I::SIZE == A::SIZE, "gather(): index array lane count mismatch") };
    A::from_fn(|i| {
        if mask.test(i) {
            unsafe { lane_ptr::<A::Value, _>(mem, STRIDE, *index.coeff(i)).read_unaligned() }
        } else {
            A::Value::ZERO
        }
    })
}

/// # Safety
///
/// See [`StaticArray::scatter`].
#[inline(always)]
pub unsafe fn scatter<A: StaticArray, const STRIDE: usize, I: StaticArray>(
    a: &A,
    mem: *mut u8,
    index: &I,
) {
    const { assert!(I::SIZE == A::SIZE, "scatter(): index array lane count mismatch") };
    for i in 0..A::SIZE {
        unsafe { lane_ptr_mut::<A::Value, _>(mem, STRIDE, *index.coeff(i)).write_unaligned(*a.coeff(i)) };
    }
}

/// # Safety
///
/// See [`StaticArray::scatter_masked`].
#[inline(always)]
pub unsafe fn scatter_masked<A: StaticArray, const STRIDE: usize, I: StaticArray, M: MaskLike>(
    a: &A,
    mem: *mut u8,
    index: &I,
    mask: &M,
) {
    const { assert!(I::SIZE == A::SIZE, "scatter(): index array lane count mismatch") };
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        unsafe { lane_ptr_mut::<A::Value, _>(mem, STRIDE, *index.coeff(i)).write_unaligned(*a.coeff(i)) };
    }
}

/// Issues a cache hint for one address. `LEVEL` 1 targets the closest cache level;
/// higher levels target more distant caches. The hint never faults.
#[inline(always)]
fn prefetch_line<const WRITE: bool, const LEVEL: usize>(ptr: *const u8) {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
    unsafe {
        use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0, _MM_HINT_T1, _MM_HINT_T2};

        // x86 has no portable write hint; a write prefetch pulls the line like a read.
        match LEVEL {
            0 | 1 => _mm_prefetch(ptr as *const i8, _MM_HINT_T0),
            2 => _mm_prefetch(ptr as *const i8, _MM_HINT_T1),
            _ => _mm_prefetch(ptr as *const i8, _MM_HINT_T2),
        }
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "sse")))]
    let _ = ptr;
}

/// # Safety
///
/// See [`StaticArray::prefetch`].
#[inline(always)]
pub unsafe fn prefetch<
    A: StaticArray,
    const STRIDE: usize,
    const WRITE: bool,
    const LEVEL: usize,
    I: StaticArray,
>(
    mem: *const u8,
    index: &I,
) {
    const { assert!(I::SIZE == A::SIZE, "prefetch(): index array lane count mismatch") };
    for i in 0..A::SIZE {
        let ptr = mem.wrapping_offset(byte_offset(STRIDE, *index.coeff(i)));
        prefetch_line::<WRITE, LEVEL>(ptr);
    }
}

/// # Safety
///
/// See [`StaticArray::prefetch_masked`].
#[inline(always)]
pub unsafe fn prefetch_masked<
    A: StaticArray,
    const STRIDE: usize,
    const WRITE: bool,
    const LEVEL: usize,
    I: StaticArray,
    M: MaskLike,
>(
    mem: *const u8,
    index: &I,
    mask: &M,
) {
    const { assert!(I::SIZE == A::SIZE, "prefetch(): index array lane count mismatch") };
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        let ptr = mem.wrapping_offset(byte_offset(STRIDE, *index.coeff(i)));
        prefetch_line::<WRITE, LEVEL>(ptr);
    }
}

/// # Safety
///
/// See [`StaticArray::store_compress`].
#[inline(always)]
pub unsafe fn store_compress<A: StaticArray, M: MaskLike>(
    a: &A,
    mem: &mut *mut A::Value,
    mask: &M,
) -> usize {
    let mut written = 0;
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        unsafe {
            mem.write_unaligned(*a.coeff(i));
            *mem = mem.add(1);
        }
        written += 1;
    }
    written
}

/// # Safety
///
/// See [`StaticArray::transform`].
#[inline(always)]
pub unsafe fn transform<A: StaticArray, const STRIDE: usize, I: StaticArray, F>(
    mem: *mut u8,
    index: &I,
    mut func: F,
) where
    F: FnMut(&mut A::Value),
{
    const { assert!(I::SIZE == A::SIZE, "transform(): index array lane count mismatch") };
    for i in 0..A::SIZE {
        unsafe { func(&mut *lane_ptr_mut::<A::Value, _>(mem, STRIDE, *index.coeff(i))) };
    }
}

/// # Safety
///
/// See [`StaticArray::transform_masked`].
#[inline(always)]
pub unsafe fn transform_masked<A: StaticArray, const STRIDE: usize, I: StaticArray, M, F>(
    mem: *mut u8,
    index: &I,
    mask: &M,
    mut func: F,
) where
    M: MaskLike,
    F: FnMut(&mut A::Value),
{
    const { assert!(I::SIZE == A::SIZE, "transform(): index array lane count mismatch") };
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        unsafe { func(&mut *lane_ptr_mut::<A::Value, _>(mem, STRIDE, *index.coeff(i))) };
    }
}

// ============================================================================
// Slice forms
// ============================================================================

/// Element position addressed by lane `lane` of `index`, if it lies inside `len`.
#[inline]
fn slice_position<I: StaticArray>(index: &I, lane: usize, len: usize) -> Result<usize> {
    let raw = index.coeff(lane).as_i64();
    match usize::try_from(raw) {
        Ok(position) if position < len => Ok(position),
        Ok(position) => Err(out_of_range_error(position, len)),
        Err(_) => Err(validation_error(format!("negative index {raw} in lane {lane}"))),
    }
}

pub fn gather_slice<A: StaticArray, I: StaticArray>(slice: &[A::Value], index: &I) -> Result<A> {
    const { assert!(I::SIZE == A::SIZE, "gather(): index array lane count mismatch") };
    let mut out = A::zeros();
    for i in 0..A::SIZE {
        *out.coeff_mut(i) = slice[slice_position(index, i, slice.len())?];
    }
    Ok(out)
}

/// Unselected lanes are zero and their indices are not validated.
pub fn gather_slice_masked<A: StaticArray, I: StaticArray, M: MaskLike>(
    slice: &[A::Value],
    index: &I,
    mask: &M,
) -> Result<A> {
    const { assert!(I::SIZE == A::SIZE, "gather(): index array lane count mismatch") };
    let mut out = A::zeros();
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        *out.coeff_mut(i) = slice[slice_position(index, i, slice.len())?];
    }
    Ok(out)
}

pub fn scatter_slice<A: StaticArray, I: StaticArray>(
    a: &A,
    slice: &mut [A::Value],
    index: &I,
) -> Result<()> {
    const { assert!(I::SIZE == A::SIZE, "scatter(): index array lane count mismatch") };
    for i in 0..A::SIZE {
        slice_position(index, i, slice.len())?;
    }
    for i in 0..A::SIZE {
        let position = slice_position(index, i, slice.len())?;
        slice[position] = *a.coeff(i);
    }
    Ok(())
}

pub fn scatter_slice_masked<A: StaticArray, I: StaticArray, M: MaskLike>(
    a: &A,
    slice: &mut [A::Value],
    index: &I,
    mask: &M,
) -> Result<()> {
    const { assert!(I::SIZE == A::SIZE, "scatter(): index array lane count mismatch") };
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        slice_position(index, i, slice.len())?;
    }
    for i in (0..A::SIZE).filter(|&i| mask.test(i)) {
        let position = slice_position(index, i, slice.len())?;
        slice[position] = *a.coeff(i);
    }
    Ok(())
}

pub fn store_compress_slice<A: StaticArray, M: MaskLike>(
    a: &A,
    out: &mut [A::Value],
    mask: &M,
) -> Result<usize> {
    let selected = (0..A::SIZE).filter(|&i| mask.test(i)).count();
    if selected > out.len() {
        return Err(validation_error(format!(
            "store_compress needs room for {selected} values, output holds {}",
            out.len()
        )));
    }
    for (slot, i) in out.iter_mut().zip((0..A::SIZE).filter(|&i| mask.test(i))) {
        *slot = *a.coeff(i);
    }
    Ok(selected)
}

pub fn transform_slice<A: StaticArray, I: StaticArray, F: FnMut(&mut A::Value)>(
    slice: &mut [A::Value],
    index: &I,
    mut func: F,
) -> Result<()> {
    const { assert!(I::SIZE == A::SIZE, "transform(): index array lane count mismatch") };
    for i in 0..A::SIZE {
        slice_position(index, i, slice.len())?;
    }
    for i in 0..A::SIZE {
        let position = slice_position(index, i, slice.len())?;
        func(&mut slice[position]);
    }
    Ok(())
}
