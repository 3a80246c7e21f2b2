//! Generic fallback implementations.
//!
//! Every function here is written only in terms of the primitives a concrete array type
//! supplies through [`StaticArray`]: lane arithmetic and bitwise operators, shifts,
//! comparisons and lane access. The provided methods of [`StaticArray`] forward to these
//! functions, so a concrete type gets all of them for free and may override any one with
//! a native instruction. The functions stay callable directly, which is how a native
//! override can fall back for the cases it does not handle.

use crate::error::{length_error, Result};
use crate::simd::scalar::Scalar;
use crate::simd::traits::StaticArray;

#[inline(always)]
fn lanes<A: StaticArray>(value: i64) -> A {
    A::splat(A::Value::from_i64_wrapping(value))
}

/// Sign bit of the lane type, as a lane value.
#[inline(always)]
pub(crate) fn sign_bit<T: Scalar>() -> T {
    T::from_raw(1u64 << (T::BITS - 1))
}

// ============================================================================
// Blending
// ============================================================================

/// Lane-wise blend: `t` where `mask` is all ones, `f` where it is all zeros.
#[inline(always)]
pub fn select<A: StaticArray>(mask: A, t: A, f: A) -> A {
    f ^ ((t ^ f) & mask)
}

/// `a & !b`
#[inline(always)]
pub fn andnot<A: StaticArray>(a: A, b: A) -> A {
    a & b.bit_not()
}

// ============================================================================
// Rotations
// ============================================================================

/// Left rotation by a scalar amount.
///
/// Unsigned lanes combine two complementary shifts; signed lanes go through the
/// unsigned array of the same width.
#[inline(always)]
pub fn rol<A: StaticArray>(a: A, k: u32) -> A {
    const { assert!(!<A::Value as Scalar>::IS_FLOAT, "rol(): requires integer lanes") };
    if <A::Value as Scalar>::IS_SIGNED {
        a.reinterpret::<A::UInt>().rol(k).reinterpret()
    } else {
        let mask = <A::Value as Scalar>::BITS - 1;
        a.shift_left(k & mask) | a.shift_right((!k).wrapping_add(1) & mask)
    }
}

/// Right rotation by a scalar amount.
#[inline(always)]
pub fn ror<A: StaticArray>(a: A, k: u32) -> A {
    const { assert!(!<A::Value as Scalar>::IS_FLOAT, "ror(): requires integer lanes") };
    if <A::Value as Scalar>::IS_SIGNED {
        a.reinterpret::<A::UInt>().ror(k).reinterpret()
    } else {
        let mask = <A::Value as Scalar>::BITS - 1;
        a.shift_right(k & mask) | a.shift_left((!k).wrapping_add(1) & mask)
    }
}

/// Left rotation where every lane has its own amount.
#[inline(always)]
pub fn rolv<A: StaticArray>(a: A, k: A) -> A {
    const { assert!(!<A::Value as Scalar>::IS_FLOAT, "rolv(): requires integer lanes") };
    if <A::Value as Scalar>::IS_SIGNED {
        a.reinterpret::<A::UInt>()
            .rolv(k.reinterpret())
            .reinterpret()
    } else {
        let mask = lanes::<A>(<A::Value as Scalar>::BITS as i64 - 1);
        a.shift_left_var(k & mask) | a.shift_right_var((k.bit_not() + lanes(1)) & mask)
    }
}

/// Right rotation where every lane has its own amount.
#[inline(always)]
pub fn rorv<A: StaticArray>(a: A, k: A) -> A {
    const { assert!(!<A::Value as Scalar>::IS_FLOAT, "rorv(): requires integer lanes") };
    if <A::Value as Scalar>::IS_SIGNED {
        a.reinterpret::<A::UInt>()
            .rorv(k.reinterpret())
            .reinterpret()
    } else {
        let mask = lanes::<A>(<A::Value as Scalar>::BITS as i64 - 1);
        a.shift_right_var(k & mask) | a.shift_left_var((k.bit_not() + lanes(1)) & mask)
    }
}

/// Left rotation by an immediate.
#[inline(always)]
pub fn roli<A: StaticArray, const IMM: u32>(a: A) -> A {
    rol(a, IMM)
}

/// Right rotation by an immediate.
#[inline(always)]
pub fn rori<A: StaticArray, const IMM: u32>(a: A) -> A {
    ror(a, IMM)
}

// ============================================================================
// Unary arithmetic
// ============================================================================

/// Bitwise NOT: XOR against the all-ones pattern of the lane width.
#[inline(always)]
pub fn not<A: StaticArray>(a: A) -> A {
    a ^ A::splat(A::Value::all_ones())
}

/// Negation: sign-bit flip for floats, two's complement for integers.
#[inline(always)]
pub fn neg<A: StaticArray>(a: A) -> A {
    if <A::Value as Scalar>::IS_FLOAT {
        a ^ A::splat(sign_bit())
    } else {
        a.bit_not() + lanes(1)
    }
}

#[inline(always)]
pub fn abs<A: StaticArray>(a: A) -> A {
    if <A::Value as Scalar>::IS_FLOAT {
        andnot(a, A::splat(sign_bit()))
    } else if <A::Value as Scalar>::IS_SIGNED {
        A::select(a.cmp_lt(A::zeros()), a.negate(), a)
    } else {
        a
    }
}

#[inline(always)]
pub fn min<A: StaticArray>(a: A, b: A) -> A {
    A::select(a.cmp_lt(b), a, b)
}

#[inline(always)]
pub fn max<A: StaticArray>(a: A, b: A) -> A {
    A::select(a.cmp_gt(b), a, b)
}

/// Reciprocal as a plain division.
#[inline(always)]
pub fn rcp<A: StaticArray>(a: A) -> A {
    A::splat(A::Value::ONE) / a
}

/// Reciprocal square root as a plain division.
#[inline(always)]
pub fn rsqrt<A: StaticArray>(a: A) -> A {
    A::splat(A::Value::ONE) / a.sqrt()
}

// ============================================================================
// Multiply-add family
// ============================================================================

#[inline(always)]
pub fn fmadd<A: StaticArray>(a: A, b: A, c: A) -> A {
    a * b + c
}

#[inline(always)]
pub fn fmsub<A: StaticArray>(a: A, b: A, c: A) -> A {
    a * b - c
}

/// `a * b - c` in even lanes, `a * b + c` in odd lanes.
#[inline(always)]
pub fn fmaddsub<A: StaticArray>(a: A, b: A, c: A) -> A {
    let sub = a.fmsub(b, c);
    let add = a.fmadd(b, c);
    A::from_fn(|i| if i % 2 == 0 { *sub.coeff(i) } else { *add.coeff(i) })
}

/// `a * b + c` in even lanes, `a * b - c` in odd lanes.
#[inline(always)]
pub fn fmsubadd<A: StaticArray>(a: A, b: A, c: A) -> A {
    let sub = a.fmsub(b, c);
    let add = a.fmadd(b, c);
    A::from_fn(|i| if i % 2 == 0 { *add.coeff(i) } else { *sub.coeff(i) })
}

// ============================================================================
// Horizontal reductions
// ============================================================================

#[inline(always)]
pub fn hsum<A: StaticArray>(a: A) -> A::Value {
    (1..A::SIZE).fold(*a.coeff(0), |acc, i| acc.lane_add(*a.coeff(i)))
}

#[inline(always)]
pub fn hprod<A: StaticArray>(a: A) -> A::Value {
    (1..A::SIZE).fold(*a.coeff(0), |acc, i| acc.lane_mul(*a.coeff(i)))
}

#[inline(always)]
pub fn hmin<A: StaticArray>(a: A) -> A::Value {
    (1..A::SIZE).fold(*a.coeff(0), |acc, i| {
        let v = *a.coeff(i);
        if v < acc {
            v
        } else {
            acc
        }
    })
}

#[inline(always)]
pub fn hmax<A: StaticArray>(a: A) -> A::Value {
    (1..A::SIZE).fold(*a.coeff(0), |acc, i| {
        let v = *a.coeff(i);
        if v > acc {
            v
        } else {
            acc
        }
    })
}

#[inline(always)]
pub fn dot<A: StaticArray>(a: A, b: A) -> A::Value {
    (a * b).hsum()
}

/// True when every lane of the mask is set.
#[inline(always)]
pub fn all<A: StaticArray>(mask: A) -> bool {
    (0..A::SIZE).all(|i| mask.coeff(i).is_all_ones())
}

#[inline(always)]
pub fn any<A: StaticArray>(mask: A) -> bool {
    (0..A::SIZE).any(|i| mask.coeff(i).is_all_ones())
}

#[inline(always)]
pub fn none<A: StaticArray>(mask: A) -> bool {
    !mask.any()
}

/// Number of set lanes in the mask.
#[inline(always)]
pub fn count<A: StaticArray>(mask: A) -> usize {
    (0..A::SIZE)
        .filter(|&i| mask.coeff(i).is_all_ones())
        .count()
}

// ============================================================================
// Lane movement
// ============================================================================

/// Lane `k` of the result is lane `indices[k]` of `a`.
///
/// The index list may cover either the logical or the padded width of the type. Only the
/// first `SIZE` indices are read, and each must be below `SIZE`; padding lanes keep their
/// contents.
///
/// # Panics
///
/// Panics if one of the first `SIZE` indices is `SIZE` or larger.
#[inline(always)]
pub fn shuffle<A: StaticArray, const K: usize>(a: A, indices: [usize; K]) -> A {
    const { assert!(K == A::SIZE || K == A::ACTUAL_SIZE, "shuffle(): Invalid size!") };
    let mut out = a;
    for (k, &index) in indices.iter().enumerate().take(A::SIZE) {
        debug_assert!(
            index < A::SIZE,
            "shuffle(): index {index} out of range for an array of size {}",
            A::SIZE
        );
        *out.coeff_mut(k) = *a.coeff(index);
    }
    out
}

/// Fixed-size arrays only accept their own size.
#[inline]
pub fn resize<A: StaticArray>(_a: &mut A, size: usize) -> Result<()> {
    if size != A::SIZE {
        return Err(length_error(size, A::SIZE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::array::Array;
    use crate::simd::traits::ArrayBase;

    #[test]
    fn test_select_blends_bit_patterns() {
        let mask = Array::<u32, 4>::new([u32::MAX, 0, u32::MAX, 0]);
        let t = Array::new([1, 2, 3, 4]);
        let f = Array::new([10, 20, 30, 40]);
        assert_eq!(select(mask, t, f).to_array(), [1, 20, 3, 40]);
    }

    #[test]
    fn test_fmaddsub_alternates() {
        let a = Array::<f32, 4>::new([1.0, 2.0, 3.0, 4.0]);
        let b = Array::splat(2.0);
        let c = Array::splat(1.0);
        assert_eq!(fmaddsub(a, b, c).to_array(), [1.0, 5.0, 5.0, 9.0]);
        assert_eq!(fmsubadd(a, b, c).to_array(), [3.0, 3.0, 7.0, 7.0]);
    }

    #[test]
    fn test_abs_integer_and_float() {
        let i = Array::<i32, 4>::new([-3, 3, 0, i32::MIN + 1]);
        assert_eq!(abs(i).to_array(), [3, 3, 0, i32::MAX]);

        let f = Array::<f64, 2>::new([-0.0, -2.5]);
        let r = abs(f);
        assert_eq!(r.to_array(), [0.0, 2.5]);
        assert!(r.coeff(0).is_sign_positive());
    }

    /// Three logical lanes stored in a four-lane array.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Padded3(Array<i32, 4>);

    impl ArrayBase for Padded3 {
        type Value = i32;

        const SIZE: usize = 3;

        fn coeff(&self, index: usize) -> &i32 {
            self.0.coeff(index)
        }

        fn coeff_mut(&mut self, index: usize) -> &mut i32 {
            self.0.coeff_mut(index)
        }
    }

    macro_rules! padded_binary_op {
        ($($trait:ident::$method:ident),*) => {
            $(
                impl std::ops::$trait for Padded3 {
                    type Output = Self;

                    fn $method(self, rhs: Self) -> Self {
                        Padded3(std::ops::$trait::$method(self.0, rhs.0))
                    }
                }
            )*
        };
    }

    padded_binary_op!(Add::add, Sub::sub, Mul::mul, Div::div, BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

    macro_rules! padded_forward {
        ($($method:ident($($arg:ident: $ty:ty),*)),*) => {
            $(
                fn $method(self, $($arg: $ty),*) -> Self {
                    Padded3(self.0.$method($($arg),*))
                }
            )*
        };
    }

    impl StaticArray for Padded3 {
        // Lane movement is all these tests exercise.
        type Int = Self;
        type UInt = Self;

        const ACTUAL_SIZE: usize = 4;

        fn splat(value: i32) -> Self {
            Padded3(Array::splat(value))
        }

        fn shift_left_var(self, k: Self) -> Self {
            Padded3(self.0.shift_left_var(k.0))
        }

        fn shift_right_var(self, k: Self) -> Self {
            Padded3(self.0.shift_right_var(k.0))
        }

        fn cmp_eq(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_eq(rhs.0))
        }

        fn cmp_ne(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_ne(rhs.0))
        }

        fn cmp_lt(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_lt(rhs.0))
        }

        fn cmp_le(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_le(rhs.0))
        }

        fn cmp_gt(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_gt(rhs.0))
        }

        fn cmp_ge(self, rhs: Self) -> Self {
            Padded3(self.0.cmp_ge(rhs.0))
        }

        padded_forward!(shift_left(k: u32), shift_right(k: u32), sqrt(), floor());
    }

    #[test]
    fn test_shuffle_over_padded_width() {
        let a = Padded3(Array::new([10, 11, 12, 99]));
        let r = shuffle(a, [2, 0, 1, 3]);
        assert_eq!(r.0.to_array(), [12, 10, 11, 99]);

        let r = shuffle(a, [1, 1, 0]);
        assert_eq!(r.0.to_array(), [11, 11, 10, 99]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "shuffle(): index 4 out of range")]
    fn test_shuffle_rejects_out_of_range_index() {
        let a = Array::<i32, 4>::new([1, 2, 3, 4]);
        let _ = shuffle(a, std::hint::black_box([0, 1, 2, 4]));
    }

    #[test]
    fn test_resize_rejects_other_sizes() {
        let mut a = Array::<u8, 3>::splat(1);
        assert!(resize(&mut a, 3).is_ok());
        assert!(resize(&mut a, 4).is_err());
    }
}
