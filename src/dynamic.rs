//! Matrices whose element kind is chosen at run time.

use serde::{Deserialize, Serialize};

use crate::element::{ClampedU8, Element};
use crate::error::{MatrixError, Result};
use crate::kind::ElementKind;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Dense matrix with a run-time element kind.
///
/// One variant per [`ElementKind`], each wrapping the typed [`Matrix`] for
/// that kind. Element values cross this API as [`Scalar`]s and every write
/// is coerced into the stored kind first, exactly like a store into the
/// underlying buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynMatrix {
    Int8(Matrix<i8>),
    Uint8(Matrix<u8>),
    #[serde(rename = "uint8-clamped")]
    Uint8Clamped(Matrix<ClampedU8>),
    Int16(Matrix<i16>),
    Uint16(Matrix<u16>),
    Int32(Matrix<i32>),
    Uint32(Matrix<u32>),
    Float32(Matrix<f32>),
    Float64(Matrix<f64>),
    Int64(Matrix<i64>),
    Uint64(Matrix<u64>),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            DynMatrix::Int8($inner) => $body,
            DynMatrix::Uint8($inner) => $body,
            DynMatrix::Uint8Clamped($inner) => $body,
            DynMatrix::Int16($inner) => $body,
            DynMatrix::Uint16($inner) => $body,
            DynMatrix::Int32($inner) => $body,
            DynMatrix::Uint32($inner) => $body,
            DynMatrix::Float32($inner) => $body,
            DynMatrix::Float64($inner) => $body,
            DynMatrix::Int64($inner) => $body,
            DynMatrix::Uint64($inner) => $body,
        }
    };
}

macro_rules! dispatch_pair {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $body:expr) => {
        match ($lhs, $rhs) {
            (DynMatrix::Int8($a), DynMatrix::Int8($b)) => $body.map(DynMatrix::Int8),
            (DynMatrix::Uint8($a), DynMatrix::Uint8($b)) => $body.map(DynMatrix::Uint8),
            (DynMatrix::Uint8Clamped($a), DynMatrix::Uint8Clamped($b)) => {
                $body.map(DynMatrix::Uint8Clamped)
            }
            (DynMatrix::Int16($a), DynMatrix::Int16($b)) => $body.map(DynMatrix::Int16),
            (DynMatrix::Uint16($a), DynMatrix::Uint16($b)) => $body.map(DynMatrix::Uint16),
            (DynMatrix::Int32($a), DynMatrix::Int32($b)) => $body.map(DynMatrix::Int32),
            (DynMatrix::Uint32($a), DynMatrix::Uint32($b)) => $body.map(DynMatrix::Uint32),
            (DynMatrix::Float32($a), DynMatrix::Float32($b)) => $body.map(DynMatrix::Float32),
            (DynMatrix::Float64($a), DynMatrix::Float64($b)) => $body.map(DynMatrix::Float64),
            (DynMatrix::Int64($a), DynMatrix::Int64($b)) => $body.map(DynMatrix::Int64),
            (DynMatrix::Uint64($a), DynMatrix::Uint64($b)) => $body.map(DynMatrix::Uint64),
            (left, right) => Err(MatrixError::ElementKindMismatch {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    };
}

impl DynMatrix {
    /// Zero-filled matrix of the given kind.
    pub fn new(rows: usize, cols: usize, kind: ElementKind) -> Result<Self> {
        Ok(match kind {
            ElementKind::Int8 => DynMatrix::Int8(Matrix::new(rows, cols)?),
            ElementKind::Uint8 => DynMatrix::Uint8(Matrix::new(rows, cols)?),
            ElementKind::Uint8Clamped => DynMatrix::Uint8Clamped(Matrix::new(rows, cols)?),
            ElementKind::Int16 => DynMatrix::Int16(Matrix::new(rows, cols)?),
            ElementKind::Uint16 => DynMatrix::Uint16(Matrix::new(rows, cols)?),
            ElementKind::Int32 => DynMatrix::Int32(Matrix::new(rows, cols)?),
            ElementKind::Uint32 => DynMatrix::Uint32(Matrix::new(rows, cols)?),
            ElementKind::Float32 => DynMatrix::Float32(Matrix::new(rows, cols)?),
            ElementKind::Float64 => DynMatrix::Float64(Matrix::new(rows, cols)?),
            ElementKind::Int64 => DynMatrix::Int64(Matrix::new(rows, cols)?),
            ElementKind::Uint64 => DynMatrix::Uint64(Matrix::new(rows, cols)?),
        })
    }

    /// Matrix of the given kind initialized from `data`.
    ///
    /// Every value is coerced into the stored kind with the same rules as
    /// [`DynMatrix::set`].
    pub fn with_data(rows: usize, cols: usize, kind: ElementKind, data: &[Scalar]) -> Result<Self> {
        log::trace!("building {}x{} {} matrix from {} values", rows, cols, kind, data.len());
        Ok(match kind {
            ElementKind::Int8 => DynMatrix::Int8(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Uint8 => DynMatrix::Uint8(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Uint8Clamped => {
                DynMatrix::Uint8Clamped(Matrix::with_data(rows, cols, convert(data))?)
            }
            ElementKind::Int16 => DynMatrix::Int16(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Uint16 => DynMatrix::Uint16(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Int32 => DynMatrix::Int32(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Uint32 => DynMatrix::Uint32(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Float32 => {
                DynMatrix::Float32(Matrix::with_data(rows, cols, convert(data))?)
            }
            ElementKind::Float64 => {
                DynMatrix::Float64(Matrix::with_data(rows, cols, convert(data))?)
            }
            ElementKind::Int64 => DynMatrix::Int64(Matrix::with_data(rows, cols, convert(data))?),
            ElementKind::Uint64 => DynMatrix::Uint64(Matrix::with_data(rows, cols, convert(data))?),
        })
    }

    pub fn rows(&self) -> usize {
        dispatch!(self, m => m.rows())
    }

    pub fn cols(&self) -> usize {
        dispatch!(self, m => m.cols())
    }

    /// Total number of elements, `rows * cols`.
    pub fn size(&self) -> usize {
        dispatch!(self, m => m.size())
    }

    pub fn shape(&self) -> (usize, usize) {
        dispatch!(self, m => m.shape())
    }

    /// Kind stored by this matrix.
    pub fn kind(&self) -> ElementKind {
        dispatch!(self, m => m.kind())
    }

    /// Flat buffer position of `(row, col)`, checking both bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        dispatch!(self, m => m.index_of(row, col))
    }

    /// Element at `(row, col)`, lifted into a [`Scalar`].
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        dispatch!(self, m => Ok(m.get(row, col)?.to_scalar()))
    }

    /// Coerce `value` into the stored kind and write it at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) -> Result<()> {
        dispatch!(self, m => m.set(row, col, Element::from_scalar(value)))
    }

    /// Overwrite the whole buffer in one step, keeping shape and kind.
    ///
    /// The length is validated before anything is written, so a failed call
    /// leaves the matrix untouched.
    pub fn replace_data(&mut self, data: &[Scalar]) -> Result<()> {
        dispatch!(self, m => m.replace_data(&convert(data)))
    }

    /// Matrix product. Operands must store the same element kind.
    ///
    /// # Errors
    ///
    /// `ElementKindMismatch` when the kinds differ, `DimensionMismatch`
    /// unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        dispatch_pair!(self, other, (a, b) => a.multiply(b))
    }

    /// Cross product of two 3-component vectors of the same kind.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        dispatch_pair!(self, other, (a, b) => a.cross(b))
    }

    /// Elementwise sum of two equally shaped matrices of the same kind.
    pub fn add(&self, other: &Self) -> Result<Self> {
        dispatch_pair!(self, other, (a, b) => a.add(b))
    }

    /// Elementwise difference of two equally shaped matrices of the same kind.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        dispatch_pair!(self, other, (a, b) => a.subtract(b))
    }
}

fn convert<T: Element>(data: &[Scalar]) -> Vec<T> {
    data.iter().map(|&value| T::from_scalar(value)).collect()
}

macro_rules! impl_from_typed {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Matrix<$ty>> for DynMatrix {
                fn from(matrix: Matrix<$ty>) -> Self {
                    DynMatrix::$variant(matrix)
                }
            }
        )*
    };
}

impl_from_typed!(
    i8 => Int8,
    u8 => Uint8,
    ClampedU8 => Uint8Clamped,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
    i64 => Int64,
    u64 => Uint64,
);
