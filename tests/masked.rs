//! Tests for masked assignment and the masked arithmetic operators.

use lanewise::{F32x4, I32x4, StaticArray, U32x4};

/// Test every masked operator through the masked view.
#[test]
fn test_masked_view_operators() {
    let mask = [true, false, true, false];
    let base = I32x4::new([10, 20, 30, 40]);
    let operand = I32x4::splat(3);

    let cases: [(&str, fn(&mut I32x4), [i32; 4]); 5] = [
        ("assign", |a| a.masked(&[true, false, true, false]).assign(I32x4::splat(3)), [3, 20, 3, 40]),
        ("add", |a| a.masked(&[true, false, true, false]).add_assign(I32x4::splat(3)), [13, 20, 33, 40]),
        ("sub", |a| a.masked(&[true, false, true, false]).sub_assign(I32x4::splat(3)), [7, 20, 27, 40]),
        ("mul", |a| a.masked(&[true, false, true, false]).mul_assign(I32x4::splat(3)), [30, 20, 90, 40]),
        ("div", |a| a.masked(&[true, false, true, false]).div_assign(I32x4::splat(3)), [3, 20, 10, 40]),
    ];
    for (name, op, expected) in cases {
        let mut a = base;
        op(&mut a);
        assert_eq!(a.to_array(), expected, "masked {name}");
    }

    let mut a = base;
    a.masked(&mask).assign_scalar(-1);
    assert_eq!(a.to_array(), [-1, 20, -1, 40]);

    let mut a = base;
    a.massign(operand, I32x4::from_mask(&mask));
    assert_eq!(a.to_array(), [3, 20, 3, 40]);
}

/// Test the bitwise masked operators.
#[test]
fn test_masked_bitwise_operators() {
    let mask = U32x4::from_mask(&[false, true, true, true]);
    let base = U32x4::splat(0b1100);
    let operand = U32x4::splat(0b1010);

    let mut a = base;
    a.mand(operand, mask);
    assert_eq!(a.to_array(), [0b1100, 0b1000, 0b1000, 0b1000]);

    let mut a = base;
    a.mor(operand, mask);
    assert_eq!(a.to_array(), [0b1100, 0b1110, 0b1110, 0b1110]);

    let mut a = base;
    a.masked(&[false, true, true, true]).xor_assign(operand);
    assert_eq!(a.to_array(), [0b1100, 0b0110, 0b0110, 0b0110]);

    let mut a = base;
    a.masked(&[true, false, false, false]).and_assign(operand);
    a.masked(&[false, false, false, true]).or_assign(U32x4::splat(1));
    assert_eq!(a.to_array(), [0b1000, 0b1100, 0b1100, 0b1101]);
}

/// Test that unselected lanes keep their exact bit pattern, NaN payloads included.
#[test]
fn test_unselected_lanes_are_bit_identical() {
    let payload = f32::from_bits(0x7FC0_1234);
    let base = F32x4::new([payload, -0.0, 1.0, payload]);
    let selected = [false, false, true, false];

    for op in 0..4 {
        let mut a = base;
        let view = a.masked(&selected);
        match op {
            0 => view.add_assign(F32x4::splat(f32::INFINITY)),
            1 => view.mul_assign(F32x4::splat(f32::NAN)),
            2 => view.div_assign(F32x4::zeros()),
            _ => view.sub_assign(F32x4::splat(1.0)),
        }
        for lane in [0, 1, 3] {
            assert_eq!(a[lane].to_bits(), base[lane].to_bits(), "op {op}, lane {lane}");
        }
    }
}

/// Test masks produced by comparisons drive the masked update.
#[test]
fn test_comparison_driven_update() {
    let mut x = F32x4::new([-2.0, 3.0, -0.5, 8.0]);
    let negative = x.cmp_lt(F32x4::zeros());
    x.madd(F32x4::splat(10.0), negative);
    assert_eq!(x.to_array(), [8.0, 3.0, 9.5, 8.0]);

    let mut y = F32x4::splat(1.0);
    y.mmul(F32x4::splat(4.0), negative);
    y.msub(F32x4::splat(0.5), negative.bit_not());
    y.mdiv(F32x4::splat(2.0), negative);
    assert_eq!(y.to_array(), [2.0, 0.5, 2.0, 0.5]);
}

/// Test that an all-false mask leaves the target untouched.
#[test]
fn test_empty_mask_is_a_no_op() {
    let mut a = I32x4::new([1, 2, 3, 4]);
    a.masked(&[false; 4]).div_assign(I32x4::zeros().bit_not());
    a.masked(&[false; 4]).assign_scalar(0);
    assert_eq!(a.to_array(), [1, 2, 3, 4]);
}

/// Test that an all-true mask matches the unmasked operator.
#[test]
fn test_full_mask_matches_unmasked_operator() {
    let a = F32x4::new([1.5, -2.0, 8.0, 0.25]);
    let b = F32x4::new([2.0, 4.0, -0.5, 3.0]);
    let all = F32x4::from_mask(&[true; 4]);

    let mut r = a;
    r.madd(b, all);
    assert_eq!(r, a + b);

    let mut r = a;
    r.msub(b, all);
    assert_eq!(r, a - b);

    let mut r = a;
    r.mmul(b, all);
    assert_eq!(r, a * b);

    let mut r = a;
    r.mdiv(b, all);
    assert_eq!(r, a / b);

    let x = U32x4::new([0xF0, 0x0F, 0xFF, 0]);
    let y = U32x4::splat(0x3C);
    let all = U32x4::from_mask(&[true; 4]);
    let mut r = x;
    r.mxor(y, all);
    assert_eq!(r, x ^ y);
}
