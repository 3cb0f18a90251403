use std::error::Error;
use std::fmt;

/// Failure signal shared by every kernel in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Two operands that must share a length do not.
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    /// A position or index value lies outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// The matrix has no columns, so its row count is unknown.
    EmptyMatrix { op: &'static str },
    /// A flat buffer cannot be split into the requested shape.
    InvalidShape { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::DimensionMismatch { op, expected, got } => write!(
                f,
                "{}: dimension mismatch, expected length {} but got {}",
                op, expected, got
            ),
            KernelError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            KernelError::EmptyMatrix { op } => {
                write!(f, "{}: matrix has no columns", op)
            }
            KernelError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for KernelError {}

pub type Result<T> = std::result::Result<T, KernelError>;

/// Fails with `DimensionMismatch` unless `got == expected`.
pub(crate) fn ensure_len(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        log::debug!("{}: rejecting operands, expected length {} got {}", op, expected, got);
        return Err(KernelError::DimensionMismatch { op, expected, got });
    }
    Ok(())
}
