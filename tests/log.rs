//! Precision tests for the natural logarithm approximation and `frexp`.

use std::f32::consts::E;

use lanewise::simd::utils::ulp_distance;
use lanewise::{F32x4, F32x4Approx, F32x8Approx, FloatArray, StaticArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test random inputs spread over twenty-three decades stay within 1 ULP.
#[test]
fn test_log_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut worst = 0;
    for _ in 0..1024 {
        // Log-uniform sampling over [1e-20, 1000].
        let x = F32x8Approx::from_fn(|_| 10f32.powf(rng.random_range(-20.0f32..3.0)));
        let r = x.log();
        for i in 0..8 {
            let reference = (x[i] as f64).ln();
            let ulp = ulp_distance(r[i], reference as f32);
            worst = worst.max(ulp);
            assert!(ulp <= 1, "log({}) = {}, reference {reference}, {ulp} ULP", x[i], r[i]);
        }
    }
    println!("log worst case: {worst} ULP");
}

/// Test exact results and the invalid domain.
#[test]
fn test_log_special_values() {
    let r = F32x4Approx::new([1.0, E, 0.5, 1024.0]).log();
    assert_eq!(r[0], 0.0);
    assert!((r[1] - 1.0).abs() < 1e-7);
    assert!((r[2] + std::f32::consts::LN_2).abs() < 1e-7);
    assert!((r[3] - 10.0 * std::f32::consts::LN_2).abs() < 1e-6);

    let r = F32x4Approx::new([-1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY]).log();
    assert!(r[0].is_nan());
    assert!(r[1].is_nan());
    assert_eq!(r[2], f32::INFINITY);
    assert!(r[3].is_nan());
}

/// Test that zero and denormals are clamped to the smallest normal number.
#[test]
fn test_log_clamps_denormals() {
    let r = F32x4Approx::new([0.0, 1e-40, f32::MIN_POSITIVE, 1e-30]).log();
    let floor = (f32::MIN_POSITIVE as f64).ln() as f32;
    assert!((r[0] - floor).abs() < 1e-5);
    assert!((r[1] - floor).abs() < 1e-5);
    assert!((r[2] - floor).abs() < 1e-5);
    assert!(r[3] > floor);
}

/// Test the mantissa/exponent decomposition on both paths.
#[test]
fn test_frexp_decomposition() {
    let input = [8.0f32, 0.3, -5.5, 1.0];
    let (m_approx, e_approx) = F32x4Approx::new(input).frexp();
    let (m_exact, e_exact) = F32x4::new(input).frexp();

    for (m, e) in [
        (m_approx.to_array(), e_approx.to_array()),
        (m_exact.to_array(), e_exact.to_array()),
    ] {
        for i in 0..4 {
            assert!((0.5..1.0).contains(&m[i].abs()), "mantissa {} out of range", m[i]);
            assert_eq!(m[i] * 2f32.powi(e[i] as i32), input[i]);
        }
    }
    assert_eq!(e_approx.to_array(), [4.0, -1.0, 3.0, 1.0]);
}
