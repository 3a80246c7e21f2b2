//! Lane types.
//!
//! Every array in this crate stores lanes of one [`Scalar`] type. The trait gives the
//! generic fallback code a uniform way to do lane arithmetic, move raw bit patterns
//! between lane types of the same width, and cast numerically between lane types.
//!
//! Integer lane arithmetic wraps, like the lanes of a hardware vector register.
//! Integer division by zero yields zero instead of trapping: masked division computes
//! the quotient in every lane before blending, so unselected lanes must not fault.

use std::fmt::{Debug, Display};

use num::Float;

/// A single lane of a fixed-width array.
pub trait Scalar:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Signed integer lane of the same width.
    type Int: Scalar;

    /// Unsigned integer lane of the same width.
    type UInt: Scalar;

    /// Width of the lane in bits.
    const BITS: u32;

    const IS_FLOAT: bool;

    const IS_SIGNED: bool;

    /// `true` only for `f32`, the one lane type with approximate math support.
    const IS_SINGLE: bool = false;

    const ZERO: Self;

    const ONE: Self;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Builds a lane from the low `BITS` bits of `raw`.
    fn from_raw(raw: u64) -> Self;

    fn as_f64(self) -> f64;

    /// Converts with `as` semantics (truncation toward zero, saturating for integers).
    fn from_f64_lossy(value: f64) -> Self;

    fn as_i64(self) -> i64;

    /// Converts with `as` semantics (wrapping for integers).
    fn from_i64_wrapping(value: i64) -> Self;

    fn lane_add(self, rhs: Self) -> Self;

    fn lane_sub(self, rhs: Self) -> Self;

    fn lane_mul(self, rhs: Self) -> Self;

    fn lane_div(self, rhs: Self) -> Self;

    fn lane_sqrt(self) -> Self;

    fn lane_floor(self) -> Self;

    /// Left shift; acts on the bit pattern for float lanes.
    fn lane_shl(self, k: u32) -> Self;

    /// Right shift: arithmetic for signed integers, logical otherwise.
    fn lane_shr(self, k: u32) -> Self;

    /// Numeric cast between lane types.
    #[inline(always)]
    fn cast<U: Scalar>(self) -> U {
        if Self::IS_FLOAT || U::IS_FLOAT {
            U::from_f64_lossy(self.as_f64())
        } else {
            U::from_i64_wrapping(self.as_i64())
        }
    }

    /// Bit cast between lane types of the same width.
    #[inline(always)]
    fn reinterpret<U: Scalar>(self) -> U {
        U::from_raw(self.to_raw())
    }

    #[inline(always)]
    fn lane_and(self, rhs: Self) -> Self {
        Self::from_raw(self.to_raw() & rhs.to_raw())
    }

    #[inline(always)]
    fn lane_or(self, rhs: Self) -> Self {
        Self::from_raw(self.to_raw() | rhs.to_raw())
    }

    #[inline(always)]
    fn lane_xor(self, rhs: Self) -> Self {
        Self::from_raw(self.to_raw() ^ rhs.to_raw())
    }

    #[inline(always)]
    fn lane_not(self) -> Self {
        Self::from_raw(!self.to_raw())
    }

    /// The all-ones bit pattern (a "true" mask lane).
    #[inline(always)]
    fn all_ones() -> Self {
        Self::from_raw(u64::MAX)
    }

    /// Whether every bit of the lane is set.
    #[inline(always)]
    fn is_all_ones(self) -> bool {
        self.to_raw() == Self::all_ones().to_raw()
    }
}

/// Floating-point lanes: IEEE layout constants and the scalar reference functions used
/// by the math library when approximation is disabled.
pub trait FloatScalar: Scalar + Float {
    /// Number of explicit mantissa bits (23 for `f32`, 52 for `f64`).
    const MANTISSA_BITS: u32;

    /// Exponent bias (127 for `f32`, 1023 for `f64`).
    const EXPONENT_BIAS: i64;

    /// Bit pattern of the exponent field.
    #[inline(always)]
    fn exponent_mask() -> u64 {
        ((1u64 << (Self::BITS - 1 - Self::MANTISSA_BITS)) - 1) << Self::MANTISSA_BITS
    }

    /// Error function.
    #[inline]
    fn erf_scalar(self) -> Self {
        Self::from_f64_lossy(statrs::function::erf::erf(self.as_f64()))
    }

    /// Inverse error function.
    #[inline]
    fn erfinv_scalar(self) -> Self {
        Self::from_f64_lossy(statrs::function::erf::erf_inv(self.as_f64()))
    }

    #[inline]
    fn csc_scalar(self) -> Self {
        self.sin().recip()
    }

    #[inline]
    fn sec_scalar(self) -> Self {
        self.cos().recip()
    }

    #[inline]
    fn cot_scalar(self) -> Self {
        self.cos() / self.sin()
    }

    #[inline]
    fn csch_scalar(self) -> Self {
        self.sinh().recip()
    }

    #[inline]
    fn sech_scalar(self) -> Self {
        self.cosh().recip()
    }

    #[inline]
    fn coth_scalar(self) -> Self {
        self.cosh() / self.sinh()
    }

    /// `self * 2^n`, with `n` carried as a float holding an integer.
    #[inline]
    fn ldexp_scalar(self, n: Self) -> Self {
        let n = n.as_f64() as i32;
        let half = n / 2;
        let two = Self::ONE + Self::ONE;
        self * two.powi(half) * two.powi(n - half)
    }

    /// Splits into a mantissa in `[0.5, 1)` and a power of two, such that
    /// `mantissa * 2^exponent == self`. Zero, infinities and NaN come back unchanged
    /// with a zero exponent.
    #[inline]
    fn frexp_scalar(self) -> (Self, Self) {
        if self == Self::ZERO || !self.is_finite() {
            return (self, Self::ZERO);
        }

        let mut x = self;
        let mut adjust = 0i64;
        if x.abs() < Self::min_positive_value() {
            // Denormal: bring it into the normal range first.
            let two = Self::ONE + Self::ONE;
            x = x * two.powi(Self::MANTISSA_BITS as i32 + 1);
            adjust = -(Self::MANTISSA_BITS as i64 + 1);
        }

        let raw = x.to_raw();
        let mask = Self::exponent_mask();
        let biased = ((raw & mask) >> Self::MANTISSA_BITS) as i64;
        let half_exponent = ((Self::EXPONENT_BIAS - 1) as u64) << Self::MANTISSA_BITS;
        let mantissa = Self::from_raw((raw & !mask) | half_exponent);

        let exponent = biased - (Self::EXPONENT_BIAS - 1) + adjust;
        (mantissa, Self::from_i64_wrapping(exponent))
    }
}

macro_rules! impl_int_scalar {
    ($($t:ty => $int:ty, $uint:ty, $signed:expr);* $(;)?) => {$(
        impl Scalar for $t {
            type Int = $int;
            type UInt = $uint;

            const BITS: u32 = <$t>::BITS;
            const IS_FLOAT: bool = false;
            const IS_SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self as $uint as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                raw as $uint as $t
            }

            #[inline(always)]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn as_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn from_i64_wrapping(value: i64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    self.wrapping_div(rhs)
                }
            }

            #[inline(always)]
            fn lane_sqrt(self) -> Self {
                (self as f64).sqrt() as $t
            }

            #[inline(always)]
            fn lane_floor(self) -> Self {
                self
            }

            #[inline(always)]
            fn lane_shl(self, k: u32) -> Self {
                self.wrapping_shl(k)
            }

            #[inline(always)]
            fn lane_shr(self, k: u32) -> Self {
                self.wrapping_shr(k)
            }
        }
    )*};
}

impl_int_scalar! {
    i8 => i8, u8, true;
    i16 => i16, u16, true;
    i32 => i32, u32, true;
    i64 => i64, u64, true;
    u8 => i8, u8, false;
    u16 => i16, u16, false;
    u32 => i32, u32, false;
    u64 => i64, u64, false;
}

macro_rules! impl_float_scalar {
    ($($t:ty => $int:ty, $uint:ty, $single:expr, $mantissa:expr, $bias:expr);* $(;)?) => {$(
        impl Scalar for $t {
            type Int = $int;
            type UInt = $uint;

            const BITS: u32 = <$uint>::BITS;
            const IS_FLOAT: bool = true;
            const IS_SIGNED: bool = true;
            const IS_SINGLE: bool = $single;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn to_raw(self) -> u64 {
                self.to_bits() as u64
            }

            #[inline(always)]
            fn from_raw(raw: u64) -> Self {
                <$t>::from_bits(raw as $uint)
            }

            #[inline(always)]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn as_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn from_i64_wrapping(value: i64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_sqrt(self) -> Self {
                self.sqrt()
            }

            #[inline(always)]
            fn lane_floor(self) -> Self {
                self.floor()
            }

            #[inline(always)]
            fn lane_shl(self, k: u32) -> Self {
                <$t>::from_bits(self.to_bits().wrapping_shl(k))
            }

            #[inline(always)]
            fn lane_shr(self, k: u32) -> Self {
                <$t>::from_bits(self.to_bits().wrapping_shr(k))
            }
        }

        impl FloatScalar for $t {
            const MANTISSA_BITS: u32 = $mantissa;
            const EXPONENT_BIAS: i64 = $bias;
        }
    )*};
}

impl_float_scalar! {
    f32 => i32, u32, true, 23, 127;
    f64 => i64, u64, false, 52, 1023;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip_preserves_sign_bits() {
        assert_eq!((-1i32).to_raw(), 0xffff_ffff);
        assert_eq!(i32::from_raw(0xffff_ffff), -1);
        assert_eq!((-0.0f32).to_raw(), 0x8000_0000);
        assert_eq!(f64::from_raw(1.5f64.to_bits()), 1.5);
    }

    #[test]
    fn test_integer_lanes_wrap() {
        assert_eq!(u8::MAX.lane_add(1), 0);
        assert_eq!(i32::MIN.lane_sub(1), i32::MAX);
        assert_eq!(7u32.lane_div(0), 0);
        assert_eq!((-8i32).lane_shr(1), -4);
        assert_eq!(0x8000_0000u32.lane_shr(31), 1);
    }

    #[test]
    fn test_all_ones() {
        assert!(f32::all_ones().is_all_ones());
        assert!(f32::all_ones().is_nan());
        assert!(!1.0f32.is_all_ones());
        assert_eq!(u16::all_ones(), u16::MAX);
    }

    #[test]
    fn test_cast_truncates_toward_zero() {
        assert_eq!((-2.75f32).cast::<i32>(), -2);
        assert_eq!(3i32.cast::<f32>(), 3.0);
        assert_eq!((-1i32).cast::<i64>(), -1);
    }

    #[test]
    fn test_frexp_scalar() {
        let (m, e) = 8.0f32.frexp_scalar();
        assert_eq!((m, e), (0.5, 4.0));

        let (m, e) = (-3.0f64).frexp_scalar();
        assert_eq!((m, e), (-0.75, 2.0));

        let tiny = f32::MIN_POSITIVE / 8.0;
        let (m, e) = tiny.frexp_scalar();
        assert_eq!(m.ldexp_scalar(e), tiny);
        assert!((0.5..1.0).contains(&m));

        assert_eq!(0.0f32.frexp_scalar(), (0.0, 0.0));
    }

    #[test]
    fn test_ldexp_scalar() {
        assert_eq!(0.75f32.ldexp_scalar(3.0), 6.0);
        assert_eq!(1.0f64.ldexp_scalar(-2.0), 0.25);
        assert_eq!(f32::MIN_POSITIVE.ldexp_scalar(140.0), 16384.0);
    }
}
