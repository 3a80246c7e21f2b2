//! Masked assignment.
//!
//! `a.masked(&mask).add_assign(b)` updates only the lanes of `a` selected by `mask`.
//! Every masked operator is generated from [`masked_apply`]: compute the operator over
//! all lanes, then blend the result into the target under the mask. Lanes outside the
//! mask keep their previous value bit for bit.

use crate::simd::traits::StaticArray;

/// Applies `op(target, value)` and keeps the result only in the lanes set in `mask`.
#[inline(always)]
pub fn masked_apply<A, F>(target: &mut A, value: A, mask: A, op: F)
where
    A: StaticArray,
    F: FnOnce(A, A) -> A,
{
    let current = *target;
    *target = A::select(mask, op(current, value), current);
}

/// A borrowed array paired with a mask. Consumed by the one update applied through it.
#[must_use = "a masked view does nothing until an update is applied through it"]
pub struct Masked<'a, A: StaticArray> {
    target: &'a mut A,
    mask: A,
}

impl<'a, A: StaticArray> Masked<'a, A> {
    #[inline(always)]
    pub fn new(target: &'a mut A, mask: A) -> Self {
        Self { target, mask }
    }

    /// The mask this view applies.
    #[inline(always)]
    pub fn mask(&self) -> A {
        self.mask
    }

    #[inline(always)]
    pub fn assign(self, value: A) {
        self.target.massign(value, self.mask)
    }

    /// Masked assignment of one value broadcast to every lane.
    #[inline(always)]
    pub fn assign_scalar(self, value: A::Value) {
        self.target.massign(A::splat(value), self.mask)
    }

    #[inline(always)]
    pub fn add_assign(self, value: A) {
        self.target.madd(value, self.mask)
    }

    #[inline(always)]
    pub fn sub_assign(self, value: A) {
        self.target.msub(value, self.mask)
    }

    #[inline(always)]
    pub fn mul_assign(self, value: A) {
        self.target.mmul(value, self.mask)
    }

    #[inline(always)]
    pub fn div_assign(self, value: A) {
        self.target.mdiv(value, self.mask)
    }

    #[inline(always)]
    pub fn and_assign(self, value: A) {
        self.target.mand(value, self.mask)
    }

    #[inline(always)]
    pub fn or_assign(self, value: A) {
        self.target.mor(value, self.mask)
    }

    #[inline(always)]
    pub fn xor_assign(self, value: A) {
        self.target.mxor(value, self.mask)
    }
}
