//! Direct solvers built on row reduction
//!
//! This module provides:
//! - [`lu`]: LU decomposition with partial pivoting, plus [`lu_solve`]
//! - [`solve`]: classification and solution of `Ax = b` via RREF of `[A | b]`
//! - [`inverse`]: Gauss-Jordan inverse via RREF of `[M | I]`

mod inverse;
mod lu;
mod solve;

pub use inverse::inverse;
pub use lu::{LuDecomposition, lu, lu_solve};
pub use solve::{Solution, SolutionStatus, solve};
