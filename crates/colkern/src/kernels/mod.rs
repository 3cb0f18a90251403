//! The kernel set.
//!
//! Every kernel validates its operands at entry and returns a freshly
//! allocated result; inputs are never modified.
pub mod level1;
pub mod level2;

pub use level1::{inner, sax, unit, vmul, vsum};
pub use level2::{gax, gax_with, lgax, lgax_with, outer};
