//! Algebra on matrices of one element kind.

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Matrix product `self * other`.
    ///
    /// Not commutative: operand order is up to the caller.
    ///
    /// Every product and the running sum evaluate in the element domain, so
    /// integer kinds wrap and the clamped kind saturates term by term. The
    /// inner terms are accumulated in ascending index order, which pins down
    /// the result for the saturating and floating-point kinds.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `self.cols() == other.rows()`;
    /// `InvalidShape` if the result element count overflows `usize`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let size = super::checked_size(self.rows, other.cols)?;
        log::trace!(
            "multiply {}x{} by {}x{} ({})",
            self.rows,
            self.cols,
            other.rows,
            other.cols,
            self.kind()
        );
        let mut data = Vec::with_capacity(size);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    let term = self.data[row * self.cols + k]
                        .elem_mul(other.data[k * other.cols + col]);
                    acc = acc.elem_add(term);
                }
                data.push(acc);
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Cross product of two 3-component vectors.
    ///
    /// Operands must share one of the vector shapes, both `3x1` or both
    /// `1x3`. Either way the components sit at buffer positions 0, 1 and 2
    /// and the result comes back as a `3x1` column.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let shape = self.shape();
        if shape != other.shape() || (shape != (3, 1) && shape != (1, 3)) {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let [a1, a2, a3] = [self.data[0], self.data[1], self.data[2]];
        let [b1, b2, b3] = [other.data[0], other.data[1], other.data[2]];
        let data = vec![
            a2.elem_mul(b3).elem_sub(a3.elem_mul(b2)),
            a3.elem_mul(b1).elem_sub(a1.elem_mul(b3)),
            a1.elem_mul(b2).elem_sub(a2.elem_mul(b1)),
        ];
        Ok(Matrix {
            rows: 3,
            cols: 1,
            data,
        })
    }

    /// Elementwise sum of two equally shaped matrices.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a.elem_add(b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise difference of two equally shaped matrices.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a.elem_sub(b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}
