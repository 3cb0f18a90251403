//! colkern: dense linear-algebra kernels over column-major data.
//!
//! Notation used throughout the crate: integers `i, j, k, m, n`, scalars
//! `a, b`, vectors `x, y, z`, matrices `A`. A matrix is stored column-wise,
//! i.e. `A[j]` is the j-th column.
//!
//! The kernels are plain functions generic over any [`Scalar`](math::Scalar)
//! and any [`Indexed`](math::Indexed) operand. They share no state, so they
//! can be called from any thread.
pub mod config;
pub mod error;
pub mod kernels;
pub mod math;

pub use config::{ColumnCheck, KernelConfig};
pub use error::{KernelError, Result};
pub use kernels::{gax, gax_with, inner, lgax, lgax_with, outer, sax, unit, vmul, vsum};
pub use math::{Indexed, IndexedView, Matrix, Scalar, Vector};
