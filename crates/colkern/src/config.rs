use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much of a matrix a kernel validates before using it.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnCheck {
    /// Every column must have the same length as column 0; checked at entry.
    #[default]
    Strict,
    /// Only column 0 is compared against the other operand. A ragged later
    /// column still fails, but from inside the accumulation loop.
    Lenient,
}

impl FromStr for ColumnCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ColumnCheck::Strict),
            "lenient" => Ok(ColumnCheck::Lenient),
            _ => Err(format!("Unknown column check: {}", s)),
        }
    }
}

impl fmt::Display for ColumnCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnCheck::Strict => write!(f, "strict"),
            ColumnCheck::Lenient => write!(f, "lenient"),
        }
    }
}

/// Settings shared by the matrix kernels.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KernelConfig {
    pub column_check: ColumnCheck,
}

impl KernelConfig {
    pub fn with_column_check(mut self, column_check: ColumnCheck) -> Self {
        self.column_check = column_check;
        self
    }
}
