//! Fixed-width numerical arrays with portable fallback operations.
//!
//! An array type implements a handful of primitives and inherits the rest: rotations,
//! negation, reciprocals, the multiply-add family, horizontal and nested reductions,
//! shuffles, gathers and scatters, masked updates, and a library of transcendental
//! functions with fast single-precision approximations.
//!
//! ```rust
//! use lanewise::{F32x8Approx, FloatArray, StaticArray};
//!
//! let x = F32x8Approx::from_fn(|i| i as f32 * 0.25);
//! let y = x.exp().log();
//! assert!((y - x).abs().hmax() < 1e-6);
//! ```

pub mod error;
pub mod simd;

pub use error::{ArrayError, Result};
pub use simd::array::*;
pub use simd::masked::Masked;
pub use simd::math::FloatArray;
pub use simd::print::{to_pretty_string, Pretty, Shape};
pub use simd::reduce::{Lanewise, NestedReduce};
pub use simd::scalar::{FloatScalar, Scalar};
pub use simd::traits::{ArrayBase, Contiguous, MaskLike, RoundingMode, StaticArray};
pub use simd::utils::{lpow2, split_size};
