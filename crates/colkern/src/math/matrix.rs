use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};
use crate::math::vector::Vector;

/// Column-major matrix: `self[j]` is the j-th column.
///
/// Column lengths are not checked by [`Matrix::from_columns`]. Kernels that
/// consume a matrix decide how strictly to validate them, see
/// [`ColumnCheck`](crate::config::ColumnCheck).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix<T> {
    columns: Vec<Vector<T>>,
}

impl<T> Matrix<T> {
    pub fn from_columns(columns: Vec<Vector<T>>) -> Self {
        Self { columns }
    }

    /// Like [`Matrix::from_columns`] but rejects ragged input.
    pub fn try_from_columns(columns: Vec<Vector<T>>) -> Result<Self> {
        let matrix = Self::from_columns(columns);
        matrix.check_uniform("try_from_columns")?;
        Ok(matrix)
    }

    /// Builds a matrix from a flat buffer laid out column after column.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(KernelError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        let mut columns: Vec<Vector<T>> = Vec::with_capacity(cols);
        let mut values = data.into_iter();
        for _ in 0..cols {
            columns.push(values.by_ref().take(rows).collect());
        }
        Ok(Self { columns })
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Length of the first column, or 0 for a matrix without columns.
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, Vector::len)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, col: usize) -> Option<&Vector<T>> {
        self.columns.get(col)
    }

    pub fn columns(&self) -> Iter<'_, Vector<T>> {
        self.columns.iter()
    }

    /// Fails with `DimensionMismatch` on the first column whose length
    /// differs from column 0.
    pub fn check_uniform(&self, op: &'static str) -> Result<()> {
        let rows = self.nrows();
        for column in self.columns.iter().skip(1) {
            crate::error::ensure_len(op, rows, column.len())?;
        }
        Ok(())
    }

    pub fn into_columns(self) -> Vec<Vector<T>> {
        self.columns
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(value: Vec<Vec<T>>) -> Self {
        Matrix::from_columns(value.into_iter().map(Vector::from).collect())
    }
}

impl<T> FromIterator<Vector<T>> for Matrix<T> {
    fn from_iter<I: IntoIterator<Item = Vector<T>>>(iter: I) -> Self {
        Matrix::from_columns(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, col: usize) -> &Self::Output {
        &self.columns[col]
    }
}

/// `(row, col)` entry access.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.columns[index.1][index.0]
    }
}
