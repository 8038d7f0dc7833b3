//! densemat: dense row-major matrices over fixed-width numeric element kinds.
//!
//! A [`Matrix<T>`] keeps its elements in one flat buffer, row after row, and
//! checks every access against its run-time shape. The element type is one of
//! eleven fixed-width kinds, and all algebra runs in the kind's own domain:
//! integer matrices wrap on overflow, clamped byte matrices saturate and the
//! float matrices follow IEEE 754.
//!
//! [`DynMatrix`] wraps the same matrices behind a run-time [`ElementKind`]
//! tag for callers that pick the kind from configuration or wire data, with
//! [`Scalar`] as the exchange value and buffer-store coercion on every write.
//!
//! ```
//! use densemat::{Matrix, MatrixError};
//!
//! fn main() -> Result<(), MatrixError> {
//!     let a = Matrix::from_rows(&[[1i32, 2], [3, 4]])?;
//!     let b = Matrix::from_rows(&[[5i32, 6], [7, 8]])?;
//!     let product = a.multiply(&b)?;
//!     assert_eq!(product.row_slice(0), &[19, 22]);
//!     assert_eq!(product.row_slice(1), &[43, 50]);
//!     Ok(())
//! }
//! ```
pub mod dynamic;
pub mod element;
pub mod error;
pub mod kind;
pub mod matrix;
pub mod scalar;

pub use crate::dynamic::DynMatrix;
pub use crate::element::{ClampedU8, Element};
pub use crate::error::{MatrixError, Result};
pub use crate::kind::ElementKind;
pub use crate::matrix::Matrix;
pub use crate::scalar::Scalar;
