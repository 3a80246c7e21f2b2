//! Fixed-width arrays and their operations.
//!
//! - [`scalar`]: lane types
//! - [`traits`]: element access and the operation contract
//! - [`fallback`], [`memory`], [`masked`]: generic implementations behind the contract
//! - [`math`]: transcendental functions
//! - [`reduce`], [`print`]: nested reductions and structured printing
//! - [`array`]: the portable concrete array type
//! - [`utils`]: size decomposition and accuracy helpers

pub mod array;
pub mod fallback;
pub mod masked;
pub mod math;
pub mod memory;
pub mod print;
pub mod reduce;
pub mod scalar;
pub mod traits;
pub mod utils;
