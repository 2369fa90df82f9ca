//! Linear system classification and solving
//!
//! `Ax = b` is solved by reducing the augmented matrix `[A | b]` to RREF.
//! The pivot positions decide whether the system is inconsistent, has
//! infinitely many solutions, or a unique one, and in the unique case the
//! solution is read straight off the augmented column.

use crate::error::{EliminationError, Result};
use crate::reduction::{Reduction, rref};
use crate::row_operation::RowOperation;
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Exactly one solution
    Unique,
    /// Free variables exist and the system is consistent
    Infinite,
    /// A row reduces to `0 = c` with `c != 0`
    Inconsistent,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolutionStatus::Unique => "unique",
            SolutionStatus::Infinite => "infinite",
            SolutionStatus::Inconsistent => "inconsistent",
        };
        f.write_str(name)
    }
}

/// Result of [`solve`].
#[derive(Debug, Clone)]
pub struct Solution<T: RealField> {
    matrix: Array2<T>,
    target: Array1<T>,
    status: SolutionStatus,
    solution: Option<Array1<T>>,
    reduction: Reduction<T>,
}

impl<T: RealField> Solution<T> {
    /// Coefficient matrix `A`
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    /// Right-hand side `b`
    pub fn target(&self) -> &Array1<T> {
        &self.target
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    /// The solution, present iff the status is [`SolutionStatus::Unique`]
    pub fn solution(&self) -> Option<&Array1<T>> {
        self.solution.as_ref()
    }

    /// Steps reducing `[A | b]` to RREF
    pub fn steps(&self) -> &[RowOperation<T>] {
        self.reduction.steps()
    }

    /// The full reduction of the augmented matrix
    pub fn reduction(&self) -> &Reduction<T> {
        &self.reduction
    }

    /// Rank of the coefficient matrix `A`
    pub fn rank(&self) -> usize {
        let n = self.matrix.ncols();
        self.reduction
            .pivots()
            .iter()
            .filter(|&&(_, col)| col < n)
            .count()
    }

    /// Indices of the variables without a pivot
    pub fn free_variables(&self) -> Vec<usize> {
        let n = self.matrix.ncols();
        self.reduction
            .free_columns()
            .into_iter()
            .filter(|&col| col < n)
            .collect()
    }

    /// One solution of a consistent system, with every free variable set
    /// to zero. `None` when the system is inconsistent.
    pub fn particular_solution(&self) -> Option<Array1<T>> {
        if self.status == SolutionStatus::Inconsistent {
            return None;
        }
        Some(read_solution(&self.reduction, self.matrix.ncols()))
    }
}

/// Solve and classify `Ax = b`.
///
/// Fails with [`EliminationError::DimensionMismatch`] when `b` does not
/// have one entry per row of `A`.
pub fn solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    let (nrows, n) = a.dim();
    if b.len() != nrows {
        return Err(EliminationError::DimensionMismatch {
            expected: nrows,
            got: b.len(),
        });
    }

    let reduction = rref(&augment(a, b));
    let status = classify(reduction.pivots(), n);
    let solution = match status {
        SolutionStatus::Unique => Some(read_solution(&reduction, n)),
        SolutionStatus::Infinite | SolutionStatus::Inconsistent => None,
    };

    log::debug!(
        "solve {}x{}: {} (rank {} of {} variables)",
        nrows,
        n,
        status,
        reduction.rank(),
        n
    );

    Ok(Solution {
        matrix: a.clone(),
        target: b.clone(),
        status,
        solution,
        reduction,
    })
}

/// `[A | b]`
fn augment<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Array2<T> {
    let (nrows, n) = a.dim();
    let mut augmented = Array2::zeros((nrows, n + 1));
    augmented.slice_mut(s![.., ..n]).assign(a);
    augmented.column_mut(n).assign(b);
    augmented
}

fn classify(pivots: &[(usize, usize)], n: usize) -> SolutionStatus {
    if pivots.iter().any(|&(_, col)| col == n) {
        SolutionStatus::Inconsistent
    } else if pivots.len() < n {
        SolutionStatus::Infinite
    } else {
        SolutionStatus::Unique
    }
}

/// Read `x` off an RREF of `[A | b]`; columns without a pivot stay zero.
fn read_solution<T: RealField>(reduction: &Reduction<T>, n: usize) -> Array1<T> {
    let reduced = reduction.reduced();
    let mut x = Array1::zeros(n);
    for &(row, col) in reduction.pivots() {
        if col < n {
            x[col] = reduced[[row, n]] / reduced[[row, col]];
        }
    }
    x
}
