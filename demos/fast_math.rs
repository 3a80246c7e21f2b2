//! Fast Math Demonstration
//!
//! Evaluates a few transcendental functions on eight-lane arrays, compares the
//! approximate and exact paths, and shows masked updates, gathers and nested printing.

use lanewise::{
    to_pretty_string, ArrayError, F32x8, F32x8Approx, FloatArray, I32x8, NestedReduce,
    StaticArray,
};

fn max_abs_difference(a: F32x8Approx, b: F32x8) -> f32 {
    (0..8).map(|i| (a[i] - b[i]).abs()).fold(0.0, f32::max)
}

fn main() -> Result<(), ArrayError> {
    println!("Lanewise fast math demonstration\n");

    // Example 1: approximate against exact
    println!("Example 1: approximate vs exact transcendental functions");
    let x = F32x8Approx::from_fn(|i| i as f32 * 0.4 - 1.4);
    let exact = F32x8::new(x.to_array());
    println!("   x        = {x}");
    println!("   sin(x)   = {}", x.sin());
    println!("   |Δ sin|  = {:.3e}", max_abs_difference(x.sin(), exact.sin()));
    println!("   |Δ exp|  = {:.3e}", max_abs_difference(x.exp(), exact.exp()));
    println!("   |Δ tanh| = {:.3e}", max_abs_difference(x.tanh(), exact.tanh()));
    println!("   |Δ erf|  = {:.3e}", max_abs_difference(x.erf(), exact.erf()));
    println!();

    // Example 2: invalid inputs become NaN lanes instead of errors
    println!("Example 2: domain errors are NaN lanes");
    let r = x.asin();
    println!("   asin(x)  = {r}");
    println!("   NaN lanes: {}", r.isnan().count());
    println!();

    // Example 3: masked update
    println!("Example 3: masked update of the negative lanes");
    let mut y = x;
    let negative = y.cmp_lt(F32x8Approx::zeros());
    y.masked(&negative).mul_assign(F32x8Approx::splat(-10.0));
    println!("   result   = {y}");
    println!();

    // Example 4: bounds-checked gather
    println!("Example 4: gather from a table");
    let table: Vec<f32> = (0..16).map(|i| (i * i) as f32).collect();
    let index = I32x8::new([15, 0, 3, 3, 7, 1, 2, 9]);
    let gathered = F32x8::gather_slice(&table, &index)?;
    println!("   gathered = {gathered}");
    match F32x8::gather_slice(&table, &I32x8::splat(16)) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   error caught: {e}"),
    }
    println!();

    // Example 5: nested arrays
    println!("Example 5: nested reduction and printing");
    let nested = [F32x8::splat(1.0), gathered, exact];
    println!("{}", to_pretty_string(&nested));
    println!("   sum of every lane = {}", nested.hsum_nested());

    Ok(())
}
