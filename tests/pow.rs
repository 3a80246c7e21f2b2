//! Precision tests for the power function approximation.

use lanewise::{F32x4Approx, F32x8, F32x8Approx, FloatArray, StaticArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test precision of pow against the double-precision reference for various inputs.
#[test]
fn test_pow_precision_comparison() {
    let test_cases = [
        // Basic integer powers
        ([2.0f32, 3.0, 4.0, 5.0], [2.0f32, 2.0, 2.0, 2.0]),
        // Unit base with various powers
        ([1.0f32, 1.0, 1.0, 1.0], [0.0f32, 1.0, 2.0, 100.0]),
        // Fractional powers
        ([4.0f32, 9.0, 16.0, 25.0], [0.5f32, 0.5, 0.5, 0.5]),
        // Negative powers
        ([2.0f32, 3.0, 4.0, 5.0], [-1.0f32, -2.0, -1.0, -2.0]),
    ];

    for (i, (base, exponent)) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?} ^ {:?}", i + 1, base, exponent);
        let r = F32x4Approx::new(*base).pow(F32x4Approx::new(*exponent));
        for j in 0..4 {
            let reference = (base[j] as f64).powf(exponent[j] as f64);
            let relative_error = ((r[j] as f64 - reference) / reference).abs();
            assert!(
                relative_error < 5e-6,
                "pow({}, {}) = {}, reference {reference}",
                base[j],
                exponent[j],
                r[j]
            );
        }
    }
}

/// Test random bases in [0.5, 4] and exponents in [-4, 4].
#[test]
fn test_pow_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..512 {
        let x = F32x8Approx::from_fn(|_| rng.random_range(0.5f32..4.0));
        let y = F32x8Approx::from_fn(|_| rng.random_range(-4.0f32..4.0));
        let r = x.pow(y);
        for i in 0..8 {
            let reference = (x[i] as f64).powf(y[i] as f64);
            let relative_error = ((r[i] as f64 - reference) / reference).abs();
            assert!(relative_error < 5e-6, "pow({}, {})", x[i], y[i]);
        }
    }
}

/// Test that the exact path is `powf`.
#[test]
fn test_exact_pow_matches_std() {
    let x = F32x8::from_fn(|i| 0.5 + i as f32);
    let y = F32x8::from_fn(|i| i as f32 * 0.75 - 2.0);
    let r = x.pow(y);
    for i in 0..8 {
        assert_eq!(r[i].to_bits(), x[i].powf(y[i]).to_bits());
    }
}
