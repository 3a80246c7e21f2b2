//! Array traits.
//!
//! [`ArrayBase`] is the element-access surface every fixed-width array exposes.
//! [`StaticArray`] is the operation contract: a concrete type supplies a small set of
//! primitives (construction from a scalar, lane arithmetic and bitwise operators, shifts,
//! comparisons, square root and floor) and inherits every other operation as a provided
//! method. Provided methods forward to the functions in [`fallback`](crate::simd::fallback),
//! [`memory`](crate::simd::memory) and [`masked`](crate::simd::masked); a concrete type
//! that has a native instruction for one of them overrides that method only.
//!
//! # Masks
//!
//! A mask is an array of the same type whose lanes hold either the all-ones or the
//! all-zeros bit pattern. Comparisons produce masks, [`StaticArray::select`] consumes them,
//! and [`StaticArray::all`], [`StaticArray::any`], [`StaticArray::none`] and
//! [`StaticArray::count`] reduce them. Anything implementing [`MaskLike`] (including a
//! plain `[bool; N]`) can be turned into a mask with [`StaticArray::from_mask`].
//!
//! # Compile-time contracts
//!
//! Misuse that the type system cannot express is rejected during monomorphization by
//! `const` assertions: approximate math on a lane type other than `f32`, a non-default
//! rounding mode on integer lanes, a shuffle index list of the wrong length, rotations on
//! float lanes, and the `y`/`z`/`w` accessors on arrays that are too short.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Sub};

use crate::error::{check_index, Result};
use crate::simd::masked::{self, Masked};
use crate::simd::scalar::Scalar;
use crate::simd::utils::lpow2;
use crate::simd::{fallback, memory};

/// Rounding mode attached to an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Whatever the current floating-point environment does.
    #[default]
    Default,
    Nearest,
    Down,
    Up,
    Zero,
}

impl RoundingMode {
    #[inline(always)]
    pub const fn is_default(self) -> bool {
        matches!(self, RoundingMode::Default)
    }
}

/// Lane access shared by every fixed-width array.
pub trait ArrayBase {
    /// Lane type.
    type Value: Scalar;

    /// Number of logical lanes.
    const SIZE: usize;

    /// Unchecked lane access. Indexing past `SIZE` panics on the backing storage.
    fn coeff(&self, index: usize) -> &Self::Value;

    fn coeff_mut(&mut self, index: usize) -> &mut Self::Value;

    #[inline(always)]
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Checked lane access.
    #[inline]
    fn get(&self, index: usize) -> Result<&Self::Value> {
        check_index(index, Self::SIZE)?;
        Ok(self.coeff(index))
    }

    /// Checked mutable lane access.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Value> {
        check_index(index, Self::SIZE)?;
        Ok(self.coeff_mut(index))
    }

    #[inline(always)]
    fn x(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 1, "x(): requires an array with at least 1 lane") };
        *self.coeff(0)
    }

    #[inline(always)]
    fn y(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 2, "y(): requires an array with at least 2 lanes") };
        *self.coeff(1)
    }

    #[inline(always)]
    fn z(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 3, "z(): requires an array with at least 3 lanes") };
        *self.coeff(2)
    }

    #[inline(always)]
    fn w(&self) -> Self::Value {
        const { assert!(Self::SIZE >= 4, "w(): requires an array with at least 4 lanes") };
        *self.coeff(3)
    }

    #[inline(always)]
    fn x_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 1, "x(): requires an array with at least 1 lane") };
        self.coeff_mut(0)
    }

    #[inline(always)]
    fn y_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 2, "y(): requires an array with at least 2 lanes") };
        self.coeff_mut(1)
    }

    #[inline(always)]
    fn z_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 3, "z(): requires an array with at least 3 lanes") };
        self.coeff_mut(2)
    }

    #[inline(always)]
    fn w_mut(&mut self) -> &mut Self::Value {
        const { assert!(Self::SIZE >= 4, "w(): requires an array with at least 4 lanes") };
        self.coeff_mut(3)
    }
}

/// Arrays whose lanes are laid out contiguously in memory.
pub trait Contiguous: ArrayBase {
    fn as_slice(&self) -> &[Self::Value];

    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    #[inline(always)]
    fn iter(&self) -> std::slice::Iter<'_, Self::Value> {
        self.as_slice().iter()
    }

    #[inline(always)]
    fn iter_mut(&mut self) -> std::slice::IterMut<'_, Self::Value> {
        self.as_mut_slice().iter_mut()
    }

    /// Splits the lanes into the largest power-of-two prefix and the remainder, the
    /// shape a recursive implementation of a non power-of-two width works on.
    #[inline(always)]
    fn split(&self) -> (&[Self::Value], &[Self::Value]) {
        self.as_slice().split_at(lpow2(Self::SIZE))
    }
}

/// Anything that can say, lane by lane, whether a mask bit is set.
pub trait MaskLike {
    /// Number of lanes the mask covers.
    const LANES: usize;

    fn test(&self, index: usize) -> bool;
}

impl<const N: usize> MaskLike for [bool; N] {
    const LANES: usize = N;

    #[inline(always)]
    fn test(&self, index: usize) -> bool {
        self[index]
    }
}

/// The operation contract of a fixed-width array.
///
/// # Required primitives
///
/// `splat`, the arithmetic and bitwise operator traits, the four shifts, the six
/// comparisons, `sqrt` and `floor`. Integer arithmetic is expected to wrap.
///
/// # Provided operations
///
/// | Group | Methods |
/// |-------|---------|
/// | Construction | `from_fn`, `zeros`, `from_mask`, `reinterpret`, `convert`, `assign_from` |
/// | Blending | `select`, `andnot`, `lane_min`, `lane_max`, `abs` |
/// | Bit manipulation | `bit_not`, `sli`, `sri`, `rol`, `ror`, `rolv`, `rorv`, `roli`, `rori` |
/// | Arithmetic | `negate`, `rcp`, `rsqrt`, `fmadd`, `fmsub`, `fmaddsub`, `fmsubadd` |
/// | Reductions | `hsum`, `hprod`, `hmin`, `hmax`, `dot`, `all`, `any`, `none`, `count` |
/// | Lane movement | `shuffle`, `resize` |
/// | Memory | `gather`, `scatter`, `prefetch`, `store_compress`, `transform` and their masked and slice forms |
/// | Masked update | `massign`, `madd`, `msub`, `mmul`, `mdiv`, `mand`, `mor`, `mxor`, `masked` |
pub trait StaticArray:
    ArrayBase
    + Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    /// Same-shape array of signed integer lanes of the same width.
    type Int: StaticArray;

    /// Same-shape array of unsigned integer lanes of the same width.
    type UInt: StaticArray;

    /// Number of lanes including any padding of the underlying storage.
    const ACTUAL_SIZE: usize = Self::SIZE;

    /// Whether the transcendental functions use the fast approximations.
    const APPROX: bool = false;

    const MODE: RoundingMode = RoundingMode::Default;

    /// Largest power of two not exceeding `SIZE`.
    const SIZE1: usize = lpow2(Self::SIZE);

    /// Lanes left over after `SIZE1`.
    const SIZE2: usize = Self::SIZE - Self::SIZE1;

    /// Compile-time validation of the array's parameters. Referenced by the constructors
    /// of an implementation so that an invalid instantiation fails to build.
    const VALID: () = {
        assert!(
            !Self::APPROX || <Self::Value as Scalar>::IS_SINGLE,
            "Approximate math library functions are only supported in single precision mode!"
        );
        assert!(
            <Self::Value as Scalar>::IS_FLOAT || Self::MODE.is_default(),
            "Integer arrays require RoundingMode::Default"
        );
    };

    // ------------------------------------------------------------------------
    // Required primitives
    // ------------------------------------------------------------------------

    /// Broadcasts one value into every lane.
    fn splat(value: Self::Value) -> Self;

    fn shift_left(self, k: u32) -> Self;

    fn shift_right(self, k: u32) -> Self;

    /// Shifts every lane left by the matching lane of `k`.
    fn shift_left_var(self, k: Self) -> Self;

    fn shift_right_var(self, k: Self) -> Self;

    fn cmp_eq(self, rhs: Self) -> Self;

    fn cmp_ne(self, rhs: Self) -> Self;

    fn cmp_lt(self, rhs: Self) -> Self;

    fn cmp_le(self, rhs: Self) -> Self;

    fn cmp_gt(self, rhs: Self) -> Self;

    fn cmp_ge(self, rhs: Self) -> Self;

    fn sqrt(self) -> Self;

    fn floor(self) -> Self;

    // ------------------------------------------------------------------------
    // Construction and conversion
    // ------------------------------------------------------------------------

    /// Builds an array lane by lane.
    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> Self::Value>(mut f: F) -> Self {
        let mut out = Self::splat(Self::Value::ZERO);
        for i in 0..Self::SIZE {
            *out.coeff_mut(i) = f(i);
        }
        out
    }

    #[inline(always)]
    fn zeros() -> Self {
        Self::splat(Self::Value::ZERO)
    }

    /// Expands a mask description into a same-shape bit mask.
    #[inline(always)]
    fn from_mask<M: MaskLike>(mask: &M) -> Self {
        const { assert!(M::LANES == Self::SIZE, "from_mask(): lane count mismatch") };
        Self::from_fn(|i| {
            if mask.test(i) {
                Self::Value::all_ones()
            } else {
                Self::Value::ZERO
            }
        })
    }

    /// Bit cast to another array type of the same shape and lane width.
    #[inline(always)]
    fn reinterpret<B: StaticArray>(self) -> B {
        const {
            assert!(
                <B as ArrayBase>::SIZE == <Self as ArrayBase>::SIZE
                    && <<B as ArrayBase>::Value as Scalar>::BITS
                        == <<Self as ArrayBase>::Value as Scalar>::BITS,
                "reinterpret(): shape or lane width mismatch"
            )
        };
        B::from_fn(|i| self.coeff(i).reinterpret())
    }

    /// Numeric cast to another array type of the same shape.
    #[inline(always)]
    fn convert<B: StaticArray>(self) -> B {
        const {
            assert!(
                <B as ArrayBase>::SIZE == <Self as ArrayBase>::SIZE,
                "convert(): lane count mismatch"
            )
        };
        B::from_fn(|i| self.coeff(i).cast())
    }

    /// Overwrites `self` with a numerically converted copy of `other`.
    #[inline(always)]
    fn assign_from<B: StaticArray>(&mut self, other: &B) {
        *self = other.convert();
    }

    // ------------------------------------------------------------------------
    // Blending
    // ------------------------------------------------------------------------

    #[inline(always)]
    fn select(mask: Self, t: Self, f: Self) -> Self {
        fallback::select(mask, t, f)
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        fallback::andnot(self, rhs)
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        fallback::min(self, rhs)
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        fallback::max(self, rhs)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        fallback::abs(self)
    }

    // ------------------------------------------------------------------------
    // Bit manipulation
    // ------------------------------------------------------------------------

    #[inline(always)]
    fn bit_not(self) -> Self {
        fallback::not(self)
    }

    /// Left shift by an immediate.
    #[inline(always)]
    fn sli<const IMM: u32>(self) -> Self {
        self.shift_left(IMM)
    }

    /// Right shift by an immediate.
    #[inline(always)]
    fn sri<const IMM: u32>(self) -> Self {
        self.shift_right(IMM)
    }

    #[inline(always)]
    fn rol(self, k: u32) -> Self {
        fallback::rol(self, k)
    }

    #[inline(always)]
    fn ror(self, k: u32) -> Self {
        fallback::ror(self, k)
    }

    #[inline(always)]
    fn rolv(self, k: Self) -> Self {
        fallback::rolv(self, k)
    }

    #[inline(always)]
    fn rorv(self, k: Self) -> Self {
        fallback::rorv(self, k)
    }

    #[inline(always)]
    fn roli<const IMM: u32>(self) -> Self {
        fallback::roli::<Self, IMM>(self)
    }

    #[inline(always)]
    fn rori<const IMM: u32>(self) -> Self {
        fallback::rori::<Self, IMM>(self)
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    #[inline(always)]
    fn negate(self) -> Self {
        fallback::neg(self)
    }

    #[inline(always)]
    fn rcp(self) -> Self {
        fallback::rcp(self)
    }

    #[inline(always)]
    fn rsqrt(self) -> Self {
        fallback::rsqrt(self)
    }

    /// `self * b + c`
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        fallback::fmadd(self, b, c)
    }

    /// `self * b - c`
    #[inline(always)]
    fn fmsub(self, b: Self, c: Self) -> Self {
        fallback::fmsub(self, b, c)
    }

    #[inline(always)]
    fn fmaddsub(self, b: Self, c: Self) -> Self {
        fallback::fmaddsub(self, b, c)
    }

    #[inline(always)]
    fn fmsubadd(self, b: Self, c: Self) -> Self {
        fallback::fmsubadd(self, b, c)
    }

    // ------------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------------

    #[inline(always)]
    fn hsum(self) -> Self::Value {
        fallback::hsum(self)
    }

    #[inline(always)]
    fn hprod(self) -> Self::Value {
        fallback::hprod(self)
    }

    #[inline(always)]
    fn hmin(self) -> Self::Value {
        fallback::hmin(self)
    }

    #[inline(always)]
    fn hmax(self) -> Self::Value {
        fallback::hmax(self)
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> Self::Value {
        fallback::dot(self, rhs)
    }

    #[inline(always)]
    fn all(self) -> bool {
        fallback::all(self)
    }

    #[inline(always)]
    fn any(self) -> bool {
        fallback::any(self)
    }

    #[inline(always)]
    fn none(self) -> bool {
        fallback::none(self)
    }

    #[inline(always)]
    fn count(self) -> usize {
        fallback::count(self)
    }

    // ------------------------------------------------------------------------
    // Lane movement
    // ------------------------------------------------------------------------

    #[inline(always)]
    fn shuffle<const K: usize>(self, indices: [usize; K]) -> Self {
        fallback::shuffle(self, indices)
    }

    #[inline]
    fn resize(&mut self, size: usize) -> Result<()> {
        fallback::resize(self, size)
    }

    // ------------------------------------------------------------------------
    // Memory
    // ------------------------------------------------------------------------

    /// Loads lane `i` from `mem + STRIDE * index[i]`.
    ///
    /// # Safety
    ///
    /// Every addressed location must be valid for reading a `Self::Value`.
    #[inline(always)]
    unsafe fn gather<const STRIDE: usize, I: StaticArray>(mem: *const u8, index: &I) -> Self {
        unsafe { memory::gather::<Self, STRIDE, I>(mem, index) }
    }

    /// Masked [`gather`](StaticArray::gather): unselected lanes are zero and their
    /// addresses are never read.
    ///
    /// # Safety
    ///
    /// Every selected location must be valid for reading a `Self::Value`.
    #[inline(always)]
    unsafe fn gather_masked<const STRIDE: usize, I: StaticArray, M: MaskLike>(
        mem: *const u8,
        index: &I,
        mask: &M,
    ) -> Self {
        unsafe { memory::gather_masked::<Self, STRIDE, I, M>(mem, index, mask) }
    }

    /// Stores lane `i` to `mem + STRIDE * index[i]`.
    ///
    /// # Safety
    ///
    /// Every addressed location must be valid for writing a `Self::Value`.
    #[inline(always)]
    unsafe fn scatter<const STRIDE: usize, I: StaticArray>(&self, mem: *mut u8, index: &I) {
        unsafe { memory::scatter::<Self, STRIDE, I>(self, mem, index) }
    }

    /// # Safety
    ///
    /// Every selected location must be valid for writing a `Self::Value`.
    #[inline(always)]
    unsafe fn scatter_masked<const STRIDE: usize, I: StaticArray, M: MaskLike>(
        &self,
        mem: *mut u8,
        index: &I,
        mask: &M,
    ) {
        unsafe { memory::scatter_masked::<Self, STRIDE, I, M>(self, mem, index, mask) }
    }

    /// Hints that the addressed locations will be accessed soon.
    ///
    /// # Safety
    ///
    /// The address arithmetic must stay inside one allocation, as for `pointer::offset`.
    #[inline(always)]
    unsafe fn prefetch<const STRIDE: usize, const WRITE: bool, const LEVEL: usize, I: StaticArray>(
        mem: *const u8,
        index: &I,
    ) {
        unsafe { memory::prefetch::<Self, STRIDE, WRITE, LEVEL, I>(mem, index) }
    }

    /// # Safety
    ///
    /// As for [`prefetch`](StaticArray::prefetch), for the selected lanes.
    #[inline(always)]
    unsafe fn prefetch_masked<
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
        unsafe { memory::prefetch_masked::<Self, STRIDE, WRITE, LEVEL, I, M>(mem, index, mask) }
    }

    /// Writes the selected lanes contiguously to `*mem`, advances the pointer past them and
    /// returns how many were written.
    ///
    /// # Safety
    ///
    /// `*mem` must be valid for writing `SIZE` values.
    #[inline(always)]
    unsafe fn store_compress<M: MaskLike>(&self, mem: &mut *mut Self::Value, mask: &M) -> usize {
        unsafe { memory::store_compress(self, mem, mask) }
    }

    /// Calls `func` on the value at `mem + STRIDE * index[i]`, lane by lane in order.
    ///
    /// # Safety
    ///
    /// Every addressed location must be valid for reading and writing a `Self::Value`.
    #[inline(always)]
    unsafe fn transform<const STRIDE: usize, I: StaticArray, F: FnMut(&mut Self::Value)>(
        mem: *mut u8,
        index: &I,
        func: F,
    ) {
        unsafe { memory::transform::<Self, STRIDE, I, F>(mem, index, func) }
    }

    /// # Safety
    ///
    /// Every selected location must be valid for reading and writing a `Self::Value`.
    #[inline(always)]
    unsafe fn transform_masked<
        const STRIDE: usize,
        I: StaticArray,
        M: MaskLike,
        F: FnMut(&mut Self::Value),
    >(
        mem: *mut u8,
        index: &I,
        mask: &M,
        func: F,
    ) {
        unsafe { memory::transform_masked::<Self, STRIDE, I, M, F>(mem, index, mask, func) }
    }

    /// Bounds-checked gather from a slice, indices counted in elements.
    #[inline]
    fn gather_slice<I: StaticArray>(slice: &[Self::Value], index: &I) -> Result<Self> {
        memory::gather_slice(slice, index)
    }

    #[inline]
    fn gather_slice_masked<I: StaticArray, M: MaskLike>(
        slice: &[Self::Value],
        index: &I,
        mask: &M,
    ) -> Result<Self> {
        memory::gather_slice_masked(slice, index, mask)
    }

    /// Bounds-checked scatter into a slice. Nothing is written when an index is invalid.
    #[inline]
    fn scatter_slice<I: StaticArray>(&self, slice: &mut [Self::Value], index: &I) -> Result<()> {
        memory::scatter_slice(self, slice, index)
    }

    #[inline]
    fn scatter_slice_masked<I: StaticArray, M: MaskLike>(
        &self,
        slice: &mut [Self::Value],
        index: &I,
        mask: &M,
    ) -> Result<()> {
        memory::scatter_slice_masked(self, slice, index, mask)
    }

    /// Writes the selected lanes to the front of `out` and returns how many were written.
    #[inline]
    fn store_compress_slice<M: MaskLike>(&self, out: &mut [Self::Value], mask: &M) -> Result<usize> {
        memory::store_compress_slice(self, out, mask)
    }

    #[inline]
    fn transform_slice<I: StaticArray, F: FnMut(&mut Self::Value)>(
        slice: &mut [Self::Value],
        index: &I,
        func: F,
    ) -> Result<()> {
        memory::transform_slice::<Self, I, F>(slice, index, func)
    }

    // ------------------------------------------------------------------------
    // Masked update
    // ------------------------------------------------------------------------

    /// Opens a masked view on `self`; the update applied through it only touches the
    /// lanes selected by `mask`.
    #[inline(always)]
    fn masked<M: MaskLike>(&mut self, mask: &M) -> Masked<'_, Self> {
        let mask = Self::from_mask(mask);
        Masked::new(self, mask)
    }

    #[inline(always)]
    fn massign(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |_, e| e)
    }

    #[inline(always)]
    fn madd(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d + e)
    }

    #[inline(always)]
    fn msub(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d - e)
    }

    #[inline(always)]
    fn mmul(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d * e)
    }

    #[inline(always)]
    fn mdiv(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d / e)
    }

    #[inline(always)]
    fn mand(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d & e)
    }

    #[inline(always)]
    fn mor(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d | e)
    }

    #[inline(always)]
    fn mxor(&mut self, value: Self, mask: Self) {
        masked::masked_apply(self, value, mask, |d, e| d ^ e)
    }
}
