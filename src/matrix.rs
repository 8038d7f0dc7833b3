//! Dense row-major matrix over one element kind.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::kind::ElementKind;

mod ops;

/// Two-dimensional matrix backed by a flat `Vec<T>` in row-major order.
///
/// The buffer length always equals `rows * cols` and both dimensions are
/// at least 1; every constructor and mutator preserves this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
#[serde(bound(deserialize = "T: Element + serde::de::Deserialize<'de>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unvalidated mirror of [`Matrix`] used to re-check the shape invariant
/// when deserializing.
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::with_data(raw.rows, raw.cols, raw.data)
    }
}

impl<T: Element> Matrix<T> {
    /// Zero-filled matrix with the given shape.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); size],
        })
    }

    /// Matrix taking ownership of a row-major buffer.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if a dimension is zero or the element count overflows
    /// `usize`, `InvalidDataLength` if the buffer does not hold exactly
    /// `rows * cols` elements.
    pub fn with_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        if data.len() != size {
            return Err(MatrixError::InvalidDataLength {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Square matrix with ones on the diagonal and zeros elsewhere.
    pub fn identity(size: usize) -> Result<Self> {
        let mut matrix = Self::new(size, size)?;
        for i in 0..size {
            matrix[(i, i)] = T::one();
        }
        Ok(matrix)
    }

    /// Matrix built from equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let size = checked_size(rows.len(), cols)?;
        let mut data = Vec::with_capacity(size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidDataLength {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, `rows * cols`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Kind tag of the stored elements.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Flat buffer position of `(row, col)`, checking both bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.data[self.index_of(row, col)?])
    }

    /// Store `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Overwrite the whole buffer in one step, keeping the shape.
    ///
    /// The length is validated before anything is written, so a failed call
    /// leaves the matrix untouched.
    pub fn replace_data(&mut self, data: &[T]) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(MatrixError::InvalidDataLength {
                expected: self.data.len(),
                actual: data.len(),
            });
        }
        self.data.copy_from_slice(data);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Contiguous view of one row. Panics if `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(row, col)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

fn checked_size(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::InvalidShape { rows, cols })
}
