//! Error types for lanewise operations.
//!
//! Only structural failures are reported through [`ArrayError`]: out-of-range lane
//! access, resizing a fixed-size array, and slice-backed memory operations that would
//! leave their buffer. Numerically invalid inputs to the math library are never errors;
//! they come back as NaN-flagged lanes.

use std::fmt;

/// Errors that can occur during lanewise operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A lane index was outside of the array.
    OutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The number of lanes of the array.
        size: usize,
    },
    /// A fixed-size array was asked to take a different size.
    Length {
        /// The size that was requested.
        requested: usize,
        /// The fixed size of the array.
        size: usize,
    },
    /// Input validation error.
    Validation {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::OutOfRange { index, size } => write!(
                f,
                "ArrayBase: out of range access (tried to access index {} in an array of size {})",
                index, size
            ),
            ArrayError::Length { requested, size } => write!(
                f,
                "Incompatible size for static array (requested {}, array has {} lanes)",
                requested, size
            ),
            ArrayError::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Creates an out-of-range error.
pub fn out_of_range_error(index: usize, size: usize) -> ArrayError {
    log::debug!("out of range lane access: index {index}, size {size}");
    ArrayError::OutOfRange { index, size }
}

/// Creates a length error.
pub fn length_error(requested: usize, size: usize) -> ArrayError {
    log::debug!("rejected resize of a {size}-lane array to {requested} lanes");
    ArrayError::Length { requested, size }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> ArrayError {
    let message = message.into();
    log::debug!("validation failed: {message}");
    ArrayError::Validation { message }
}

/// Checks that `index` addresses one of `size` lanes.
#[inline(always)]
pub fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(out_of_range_error(index, size))
    }
}
