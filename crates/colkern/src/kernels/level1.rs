//! Vector-vector kernels, O(n).

use crate::error::{ensure_len, KernelError, Result};
use crate::math::{Indexed, Scalar, Vector};

/// The k-th standard basis vector of length `n` (0-indexed).
///
/// ```
/// # use colkern::kernels::unit;
/// let e1 = unit::<i32>(3, 1).unwrap();
/// assert_eq!(e1.to_vec(), vec![0, 1, 0]);
/// ```
pub fn unit<T: Scalar>(n: usize, k: usize) -> Result<Vector<T>> {
    if k >= n {
        log::debug!("unit: basis index {} out of range for length {}", k, n);
        return Err(KernelError::IndexOutOfRange { index: k, len: n });
    }
    Ok((0..n)
        .map(|j| if j == k { T::one() } else { T::zero() })
        .collect())
}

/// Element-wise sum, `result[j] = x[j] + y[j]`.
///
/// ```
/// # use colkern::kernels::vsum;
/// let z = vsum(&vec![1, 2, 3], &vec![4, 5, 6]).unwrap();
/// assert_eq!(z.to_vec(), vec![5, 7, 9]);
/// ```
pub fn vsum<T, X, Y>(x: &X, y: &Y) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
    Y: Indexed<Item = T> + ?Sized,
{
    ensure_len("vsum", x.len(), y.len())?;
    Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a + b).collect())
}

/// Element-wise product, `result[j] = x[j] * y[j]`.
pub fn vmul<T, X, Y>(x: &X, y: &Y) -> Result<Vector<T>>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
    Y: Indexed<Item = T> + ?Sized,
{
    ensure_len("vmul", x.len(), y.len())?;
    Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a * b).collect())
}

/// Dot product, accumulated left to right from zero.
///
/// ```
/// # use colkern::kernels::inner;
/// assert_eq!(inner(&vec![1, 2, 3], &vec![4, 5, 6]).unwrap(), 32);
/// ```
pub fn inner<T, X, Y>(x: &X, y: &Y) -> Result<T>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
    Y: Indexed<Item = T> + ?Sized,
{
    ensure_len("inner", x.len(), y.len())?;
    Ok(x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// Scalar times vector, `result[j] = a * x[j]`. Named after saxpy.
///
/// The result is materialised; order and length follow `x`.
pub fn sax<T, X>(a: T, x: &X) -> Vector<T>
where
    T: Scalar,
    X: Indexed<Item = T> + ?Sized,
{
    x.iter().map(|&e| a * e).collect()
}
