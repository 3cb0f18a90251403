//! Container types the kernels operate on.
//!
//! `Vector` is an owned, fixed-length sequence of scalars; `Matrix` is an
//! ordered sequence of `Vector` columns (column-major). `IndexedView` is a
//! borrowed, re-indexed window over anything implementing `Indexed`.
pub mod matrix;
pub mod vector;
pub mod view;

use std::ops::Mul;

use num_traits::{One, Zero};

pub use matrix::Matrix;
pub use vector::Vector;
pub use view::{Indexed, IndexedView, Iter};

/// Numeric element type accepted by every kernel.
///
/// Anything `Copy` with an additive identity, a multiplicative identity and
/// `+`/`*` qualifies, so integer and floating point types work alike.
pub trait Scalar: Copy + Zero + One + Mul<Output = Self> {}

impl<T> Scalar for T where T: Copy + Zero + One + Mul<Output = T> {}
