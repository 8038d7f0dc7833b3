//! Error type shared by every fallible matrix operation.

use std::error::Error;
use std::fmt;

use crate::kind::ElementKind;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Failures reported by matrix constructors, accessors and algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A kind name on the string boundary did not match any element kind.
    UnknownElementKind { name: String },
    /// A dimension was zero or the element count overflowed `usize`.
    InvalidShape { rows: usize, cols: usize },
    /// A data buffer did not match `rows * cols`.
    InvalidDataLength { expected: usize, actual: usize },
    /// A `(row, col)` pair fell outside the matrix bounds.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes were incompatible for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operands stored different element kinds.
    ElementKindMismatch {
        left: ElementKind,
        right: ElementKind,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::UnknownElementKind { name } => {
                write!(f, "unknown element kind '{}'", name)
            }
            MatrixError::InvalidShape { rows, cols } => {
                write!(
                    f,
                    "invalid shape {}x{}: element count must be non-zero and fit in usize",
                    rows, cols
                )
            }
            MatrixError::InvalidDataLength { expected, actual } => {
                write!(
                    f,
                    "data length {} does not fill a matrix of {} elements",
                    actual, expected
                )
            }
            MatrixError::IndexOutOfBounds { row, col, rows, cols } => {
                write!(
                    f,
                    "index ({}, {}) is out of bounds for a {}x{} matrix",
                    row, col, rows, cols
                )
            }
            MatrixError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "incompatible shapes {}x{} and {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::ElementKindMismatch { left, right } => {
                write!(f, "element kinds differ: {} vs {}", left, right)
            }
        }
    }
}

impl Error for MatrixError {}
