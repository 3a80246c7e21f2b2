//! Structured printing.
//!
//! Innermost lanes are printed as `[a, b, c]`. Each outer level wraps its elements in
//! brackets and separates them with a comma, a newline and one space per enclosing
//! level, so a `[Array<i32, 2>; 2]` prints as
//!
//! ```text
//! [[1, 2],
//!  [3, 4]]
//! ```

use std::fmt;

/// Values that know how to print themselves at a given nesting depth.
pub trait Shape {
    /// Writes `self`, where `depth` is the number of enclosing levels.
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result;
}

impl<V: Shape, const M: usize> Shape for [V; M] {
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            value.write_nested(f, depth + 1)?;
            if i + 1 < M {
                write!(f, ",\n{:width$}", "", width = depth + 1)?;
            }
        }
        f.write_str("]")
    }
}

/// Display adapter for any [`Shape`].
pub struct Pretty<'a, S: ?Sized>(pub &'a S);

impl<S: Shape + ?Sized> fmt::Display for Pretty<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_nested(f, 0)
    }
}

pub fn to_pretty_string<S: Shape + ?Sized>(value: &S) -> String {
    Pretty(value).to_string()
}
