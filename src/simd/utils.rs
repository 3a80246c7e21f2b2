//! Size decomposition and accuracy helpers.

/// Largest power of two less than or equal to `n` (zero for zero).
#[inline(always)]
pub const fn lpow2(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}

/// Splits `n` lanes into the largest power-of-two part and the remainder.
///
/// `split_size(7) == (4, 3)`, `split_size(8) == (8, 0)`.
#[inline(always)]
pub const fn split_size(n: usize) -> (usize, usize) {
    let first = lpow2(n);
    (first, n - first)
}

#[inline(always)]
fn ordered_bits(x: f32) -> i64 {
    let bits = x.to_bits() as i32 as i64;
    if bits < 0 {
        i32::MIN as i64 - bits
    } else {
        bits
    }
}

/// Number of representable `f32` values between `a` and `b`.
///
/// `+0.0` and `-0.0` are zero apart. NaN is `u32::MAX` away from everything except
/// another NaN.
pub fn ulp_distance(a: f32, b: f32) -> u32 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => (ordered_bits(a) - ordered_bits(b))
            .unsigned_abs()
            .min(u32::MAX as u64) as u32,
        _ => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpow2() {
        assert_eq!(lpow2(0), 0);
        assert_eq!(lpow2(1), 1);
        assert_eq!(lpow2(3), 2);
        assert_eq!(lpow2(8), 8);
        assert_eq!(lpow2(15), 8);
    }

    #[test]
    fn test_split_size() {
        assert_eq!(split_size(7), (4, 3));
        assert_eq!(split_size(8), (8, 0));
        assert_eq!(split_size(1), (1, 0));
        assert_eq!(split_size(12), (8, 4));
    }

    #[test]
    fn test_ulp_distance() {
        assert_eq!(ulp_distance(1.0, 1.0), 0);
        assert_eq!(ulp_distance(1.0, f32::from_bits(1.0f32.to_bits() + 3)), 3);
        assert_eq!(ulp_distance(0.0, -0.0), 0);
        assert_eq!(ulp_distance(f32::from_bits(1), -f32::from_bits(1)), 2);
        assert_eq!(ulp_distance(f32::NAN, 0.0), u32::MAX);
        assert_eq!(ulp_distance(f32::NAN, f32::NAN), 0);
    }
}
