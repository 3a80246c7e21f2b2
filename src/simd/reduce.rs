//! Nested reductions.
//!
//! A nested array such as `[Array<f32, 4>; 3]` is reduced in two steps: first the outer
//! level is combined lane-wise into a single inner array, then that array is reduced
//! horizontally. The recursion bottoms out at a flat [`Array`](crate::Array), whose
//! nested reductions are its plain horizontal reductions.

use crate::simd::scalar::Scalar;

/// Lane-wise combination of two values of the same shape.
pub trait Lanewise: Copy {
    fn add_lanes(self, rhs: Self) -> Self;

    fn mul_lanes(self, rhs: Self) -> Self;

    fn min_lanes(self, rhs: Self) -> Self;

    fn max_lanes(self, rhs: Self) -> Self;

    fn and_lanes(self, rhs: Self) -> Self;

    fn or_lanes(self, rhs: Self) -> Self;
}

/// Reductions over every scalar of a possibly nested array.
pub trait NestedReduce: Lanewise {
    /// Innermost lane type.
    type Scalar: Scalar;

    fn hsum_nested(self) -> Self::Scalar;

    fn hprod_nested(self) -> Self::Scalar;

    fn hmin_nested(self) -> Self::Scalar;

    fn hmax_nested(self) -> Self::Scalar;

    /// True when every lane at every level is set.
    fn all_nested(self) -> bool;

    fn any_nested(self) -> bool;

    #[inline(always)]
    fn none_nested(self) -> bool {
        !self.any_nested()
    }

    /// Number of set lanes across all levels.
    fn count_nested(self) -> usize;
}

impl<V: Lanewise, const M: usize> Lanewise for [V; M] {
    #[inline(always)]
    fn add_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].add_lanes(rhs[i]))
    }

    #[inline(always)]
    fn mul_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].mul_lanes(rhs[i]))
    }

    #[inline(always)]
    fn min_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].min_lanes(rhs[i]))
    }

    #[inline(always)]
    fn max_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].max_lanes(rhs[i]))
    }

    #[inline(always)]
    fn and_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].and_lanes(rhs[i]))
    }

    #[inline(always)]
    fn or_lanes(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].or_lanes(rhs[i]))
    }
}

#[inline(always)]
fn combine<V: Lanewise, const M: usize>(outer: [V; M], op: impl Fn(V, V) -> V) -> V {
    const { assert!(M > 0, "nested reduction over an empty outer level") };
    outer[1..].iter().fold(outer[0], |acc, &v| op(acc, v))
}

impl<V: NestedReduce, const M: usize> NestedReduce for [V; M] {
    type Scalar = V::Scalar;

    #[inline(always)]
    fn hsum_nested(self) -> Self::Scalar {
        combine(self, V::add_lanes).hsum_nested()
    }

    #[inline(always)]
    fn hprod_nested(self) -> Self::Scalar {
        combine(self, V::mul_lanes).hprod_nested()
    }

    #[inline(always)]
    fn hmin_nested(self) -> Self::Scalar {
        combine(self, V::min_lanes).hmin_nested()
    }

    #[inline(always)]
    fn hmax_nested(self) -> Self::Scalar {
        combine(self, V::max_lanes).hmax_nested()
    }

    #[inline(always)]
    fn all_nested(self) -> bool {
        combine(self, V::and_lanes).all_nested()
    }

    #[inline(always)]
    fn any_nested(self) -> bool {
        combine(self, V::or_lanes).any_nested()
    }

    #[inline(always)]
    fn count_nested(self) -> usize {
        self.iter().map(|v| v.count_nested()).sum()
    }
}
