//! Matrix-vector kernels, O(mn).
//!
//! Matrices are column-major: `a[j]` is column `j`, so `a.ncols()` is the
//! number of columns and `a.nrows()` the length of each of them.

use crate::config::ColumnCheck;
use crate::error::{ensure_len, KernelError, Result};
use crate::kernels::level1::{inner, sax, vsum};
use crate::math::{Indexed, Matrix, Scalar, Vector};

/// Outer product. Column `i` of the result is `sax(y[i], x)`, so entry
/// `(j, i)` equals `x[j] * y[i]`.
///
/// `x` and `y` may have different lengths.
///
/// ```
/// # use colkern::kernels::outer;
/// let m = outer(&vec![1, 2], &vec![3, 4]);
/// assert_eq!(m[0].to_vec(), vec![3, 6]);
/// assert_eq!(m[1].to_vec(), vec![4, 8]);
/// ```
pub fn outer<T, X, Y>(x: &X, y: &Y) -> Matrix<T>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
    Y: Indexed<Item = T> + ?Sized,
{
    y.iter().map(|&e| sax(e, x)).collect()
}

/// `z = A·x` with the default [`ColumnCheck`]. Named after gaxpy.
///
/// ```
/// # use colkern::kernels::gax;
/// # use colkern::math::Matrix;
/// let a = Matrix::from(vec![vec![1, 0], vec![0, 1]]);
/// assert_eq!(gax(&a, &vec![5, 6]).unwrap().to_vec(), vec![5, 6]);
/// ```
pub fn gax<T, X>(a: &Matrix<T>, x: &X) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
{
    gax_with(a, x, ColumnCheck::default())
}

/// `z = A·x`, computed as the sum of the columns of `a` scaled by the
/// entries of `x` rather than as row-wise dot products.
///
/// Fails with `DimensionMismatch` when `a.ncols() != x.len()` and with
/// `EmptyMatrix` when `a` has no columns.
pub fn gax_with<T, X>(a: &Matrix<T>, x: &X, check: ColumnCheck) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
{
    log::trace!("gax: {:?} matrix, vector of length {}", a.shape(), x.len());
    ensure_len("gax", a.ncols(), x.len())?;
    if a.is_empty() {
        log::debug!("gax: cannot size the result of a matrix with no columns");
        return Err(KernelError::EmptyMatrix { op: "gax" });
    }
    if check == ColumnCheck::Strict {
        a.check_uniform("gax")?;
    }

    let mut z = Vector::zeros(a.nrows());
    for (column, &xj) in a.columns().zip(x.iter()) {
        z = vsum(&z, &sax(xj, column))?;
    }
    Ok(z)
}

/// `z = xᵗ·A` with the default [`ColumnCheck`].
pub fn lgax<T, X>(x: &X, a: &Matrix<T>) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
{
    lgax_with(x, a, ColumnCheck::default())
}

/// Left-hand version of [`gax_with`]: `z[j] = inner(x, a[j])`.
///
/// The result has one entry per column. `x` is compared against the row
/// count, not the column count as in `gax`.
pub fn lgax_with<T, X>(x: &X, a: &Matrix<T>, check: ColumnCheck) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
{
    log::trace!("lgax: vector of length {}, {:?} matrix", x.len(), a.shape());
    if a.is_empty() {
        log::debug!("lgax: matrix has no columns to compare against");
        return Err(KernelError::EmptyMatrix { op: "lgax" });
    }
    ensure_len("lgax", a.nrows(), x.len())?;
    if check == ColumnCheck::Strict {
        a.check_uniform("lgax")?;
    }

    a.columns().map(|column| inner(x, column)).collect()
}
