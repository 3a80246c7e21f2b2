//! Portable fixed-width array.
//!
//! This module provides `Array<T, N, APPROX>`, a vector of `N` lanes of type `T` stored in
//! a plain `[T; N]`. It implements exactly the primitives of [`StaticArray`] as
//! lane-by-lane loops and inherits every other operation from the generic fallbacks, so
//! it is both a usable portable vector and the reference the fallbacks are tested on.
//!
//! # Type parameters
//!
//! - `T`: any [`Scalar`] lane type (`i8`..`i64`, `u8`..`u64`, `f32`, `f64`)
//! - `N`: number of lanes
//! - `APPROX`: when `true`, the transcendental functions of [`FloatArray`] use the fast
//!   single-precision approximations. Only valid for `f32`; any other lane type fails
//!   to build as soon as a value of the type is constructed.
//!
//! # Supported Operations
//!
//! ## Arithmetic Operators
//! - Lane-wise `+`, `-`, `*`, `/` (wrapping for integers), unary `-`
//! - Bitwise `&`, `|`, `^`, `!` on the raw lane bits, also for float lanes
//! - `<<` and `>>` by a scalar amount
//!
//! ## Indexing
//! - `array[i]` is range checked in builds with debug assertions, unless the
//!   `disable-range-check` feature or the `LANEWISE_DISABLE_RANGE_CHECK` build variable
//!   turns the check off; the underlying slice check always applies.
//! - [`ArrayBase::get`] and [`ArrayBase::get_mut`] are always checked and return a
//!   `Result`.

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Shl, Shr, Sub, SubAssign,
};

use crate::error::{length_error, Result};
use crate::simd::math::FloatArray;
use crate::simd::print::{Pretty, Shape};
use crate::simd::reduce::{Lanewise, NestedReduce};
use crate::simd::scalar::{FloatScalar, Scalar};
use crate::simd::traits::{ArrayBase, Contiguous, MaskLike, StaticArray};

/// Fixed-width array of `N` lanes of type `T`.
///
/// # Usage
///
/// ```rust
/// use lanewise::{Array, FloatArray, StaticArray};
///
/// let x = Array::<f32, 4, true>::new([0.0, 0.5, 1.0, 1.5]);
///
/// // Fast approximations, selected by the third type parameter
/// let s = x.sin();
/// assert!((s[2] - 1.0f32.sin()).abs() < 1e-6);
///
/// // Masked update: only lanes where x > 0.7 are incremented
/// let mut y = x;
/// y.masked(&[false, false, true, true]).add_assign(Array::splat(10.0));
/// assert_eq!(y.to_array(), [0.0, 0.5, 11.0, 11.5]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Array<T: Scalar, const N: usize, const APPROX: bool = false> {
    lanes: [T; N],
}

/// 4 lanes of `f32`.
pub type F32x4 = Array<f32, 4>;
/// 8 lanes of `f32`.
pub type F32x8 = Array<f32, 8>;
/// 16 lanes of `f32`.
pub type F32x16 = Array<f32, 16>;
/// 4 lanes of `f32` with approximate transcendental functions.
pub type F32x4Approx = Array<f32, 4, true>;
/// 8 lanes of `f32` with approximate transcendental functions.
pub type F32x8Approx = Array<f32, 8, true>;
/// 16 lanes of `f32` with approximate transcendental functions.
pub type F32x16Approx = Array<f32, 16, true>;
pub type F64x2 = Array<f64, 2>;
pub type F64x4 = Array<f64, 4>;
pub type I32x4 = Array<i32, 4>;
pub type I32x8 = Array<i32, 8>;
pub type U32x4 = Array<u32, 4>;
pub type U32x8 = Array<u32, 8>;
pub type I64x4 = Array<i64, 4>;
pub type U64x4 = Array<u64, 4>;

impl<T: Scalar, const N: usize, const APPROX: bool> Array<T, N, APPROX> {
    /// Builds an array from its lanes.
    #[inline(always)]
    pub const fn new(lanes: [T; N]) -> Self {
        let () = <Self as StaticArray>::VALID;
        Self { lanes }
    }

    /// Copies the lanes of a slice of exactly `N` elements.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        if slice.len() != N {
            return Err(length_error(slice.len(), N));
        }
        Ok(Self::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.lanes
    }

    /// Copies the lanes into the front of `out`.
    pub fn store(&self, out: &mut [T]) -> Result<()> {
        if out.len() < N {
            return Err(length_error(out.len(), N));
        }
        out[..N].copy_from_slice(&self.lanes);
        Ok(())
    }

    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self {
            lanes: std::array::from_fn(|i| f(self.lanes[i])),
        }
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            lanes: std::array::from_fn(|i| f(self.lanes[i], rhs.lanes[i])),
        }
    }

    #[inline(always)]
    fn compare(self, rhs: Self, f: impl Fn(&T, &T) -> bool) -> Self {
        self.zip(rhs, |a, b| if f(&a, &b) { T::all_ones() } else { T::ZERO })
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Default for Array<T, N, APPROX> {
    #[inline(always)]
    fn default() -> Self {
        Self::new([T::ZERO; N])
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> From<[T; N]> for Array<T, N, APPROX> {
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self::new(lanes)
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> From<Array<T, N, APPROX>> for [T; N] {
    #[inline(always)]
    fn from(array: Array<T, N, APPROX>) -> Self {
        array.lanes
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> TryFrom<&[T]> for Array<T, N, APPROX> {
    type Error = crate::error::ArrayError;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

// ============================================================================
// Element access
// ============================================================================

impl<T: Scalar, const N: usize, const APPROX: bool> ArrayBase for Array<T, N, APPROX> {
    type Value = T;

    const SIZE: usize = N;

    #[inline(always)]
    fn coeff(&self, index: usize) -> &T {
        &self.lanes[index]
    }

    #[inline(always)]
    fn coeff_mut(&mut self, index: usize) -> &mut T {
        &mut self.lanes[index]
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Contiguous for Array<T, N, APPROX> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        &self.lanes
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.lanes
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Index<usize> for Array<T, N, APPROX> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        #[cfg(range_check)]
        if let Err(error) = crate::error::check_index(index, N) {
            panic!("{error}");
        }
        &self.lanes[index]
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> IndexMut<usize> for Array<T, N, APPROX> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        #[cfg(range_check)]
        if let Err(error) = crate::error::check_index(index, N) {
            panic!("{error}");
        }
        &mut self.lanes[index]
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> MaskLike for Array<T, N, APPROX> {
    const LANES: usize = N;

    #[inline(always)]
    fn test(&self, index: usize) -> bool {
        self.lanes[index].is_all_ones()
    }
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_binary_op {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident => $lane:ident;)*) => {$(
        impl<T: Scalar, const N: usize, const APPROX: bool> $op for Array<T, N, APPROX> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, T::$lane)
            }
        }

        impl<T: Scalar, const N: usize, const APPROX: bool> $assign for Array<T, N, APPROX> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    )*};
}

impl_binary_op! {
    Add::add, AddAssign::add_assign => lane_add;
    Sub::sub, SubAssign::sub_assign => lane_sub;
    Mul::mul, MulAssign::mul_assign => lane_mul;
    Div::div, DivAssign::div_assign => lane_div;
    BitAnd::bitand, BitAndAssign::bitand_assign => lane_and;
    BitOr::bitor, BitOrAssign::bitor_assign => lane_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => lane_xor;
}

impl<T: Scalar, const N: usize, const APPROX: bool> Neg for Array<T, N, APPROX> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Not for Array<T, N, APPROX> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.bit_not()
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Shl<u32> for Array<T, N, APPROX> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, k: u32) -> Self {
        self.shift_left(k)
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Shr<u32> for Array<T, N, APPROX> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, k: u32) -> Self {
        self.shift_right(k)
    }
}

// ============================================================================
// Operation contract
// ============================================================================

impl<T: Scalar, const N: usize, const APPROX: bool> StaticArray for Array<T, N, APPROX> {
    type Int = Array<T::Int, N>;
    type UInt = Array<T::UInt, N>;

    const APPROX: bool = APPROX;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    #[inline(always)]
    fn shift_left(self, k: u32) -> Self {
        self.map(|v| v.lane_shl(k))
    }

    #[inline(always)]
    fn shift_right(self, k: u32) -> Self {
        self.map(|v| v.lane_shr(k))
    }

    #[inline(always)]
    fn shift_left_var(self, k: Self) -> Self {
        self.zip(k, |v, k| v.lane_shl(k.as_i64() as u32))
    }

    #[inline(always)]
    fn shift_right_var(self, k: Self) -> Self {
        self.zip(k, |v, k| v.lane_shr(k.as_i64() as u32))
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self {
        self.compare(rhs, T::eq)
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self {
        self.compare(rhs, T::ne)
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Self {
        self.compare(rhs, T::lt)
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self {
        self.compare(rhs, T::le)
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Self {
        self.compare(rhs, T::gt)
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self {
        self.compare(rhs, T::ge)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(T::lane_sqrt)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(T::lane_floor)
    }
}

impl<T: FloatScalar, const N: usize, const APPROX: bool> FloatArray for Array<T, N, APPROX> {}

// ============================================================================
// Nested reductions and printing
// ============================================================================

impl<T: Scalar, const N: usize, const APPROX: bool> Lanewise for Array<T, N, APPROX> {
    #[inline(always)]
    fn add_lanes(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn mul_lanes(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn min_lanes(self, rhs: Self) -> Self {
        self.lane_min(rhs)
    }

    #[inline(always)]
    fn max_lanes(self, rhs: Self) -> Self {
        self.lane_max(rhs)
    }

    #[inline(always)]
    fn and_lanes(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or_lanes(self, rhs: Self) -> Self {
        self | rhs
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> NestedReduce for Array<T, N, APPROX> {
    type Scalar = T;

    #[inline(always)]
    fn hsum_nested(self) -> T {
        self.hsum()
    }

    #[inline(always)]
    fn hprod_nested(self) -> T {
        self.hprod()
    }

    #[inline(always)]
    fn hmin_nested(self) -> T {
        self.hmin()
    }

    #[inline(always)]
    fn hmax_nested(self) -> T {
        self.hmax()
    }

    #[inline(always)]
    fn all_nested(self) -> bool {
        self.all()
    }

    #[inline(always)]
    fn any_nested(self) -> bool {
        self.any()
    }

    #[inline(always)]
    fn count_nested(self) -> usize {
        self.count()
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> Shape for Array<T, N, APPROX> {
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, _depth: usize) -> fmt::Result {
        f.write_str("[")?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{lane}")?;
        }
        f.write_str("]")
    }
}

impl<T: Scalar, const N: usize, const APPROX: bool> fmt::Display for Array<T, N, APPROX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Pretty(self), f)
    }
}
