//! Row echelon and reduced row echelon forms
//!
//! Both forms come out of one elimination procedure with partial pivoting.
//! RREF is REF followed by a normalisation pass over the pivots, last to
//! first. Every row operation performed is recorded, in execution order, in
//! the returned [`Reduction`], so replaying the steps on the original matrix
//! reproduces the reduced one.

use crate::error::Result;
use crate::row_operation::{RowOperation, apply_all};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Which echelon form a [`Reduction`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchelonForm {
    /// Row echelon form
    RowEchelon,
    /// Reduced row echelon form
    ReducedRowEchelon,
}

/// Result of reducing a matrix.
///
/// Created once by [`row_echelon`] or [`rref`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Reduction<T: RealField> {
    original: Array2<T>,
    reduced: Array2<T>,
    pivots: Vec<(usize, usize)>,
    steps: Vec<RowOperation<T>>,
    form: EchelonForm,
}

impl<T: RealField> Reduction<T> {
    /// The matrix that was reduced
    pub fn original(&self) -> &Array2<T> {
        &self.original
    }

    /// The reduced matrix (REF or RREF depending on [`Reduction::form`])
    pub fn reduced(&self) -> &Array2<T> {
        &self.reduced
    }

    /// Number of pivot columns
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Columns minus rank
    pub fn nullity(&self) -> usize {
        self.original.ncols() - self.rank()
    }

    /// `(row, column)` of every pivot, row- and column-ascending
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    /// Row operations transforming `original` into `reduced`, in order
    pub fn steps(&self) -> &[RowOperation<T>] {
        &self.steps
    }

    pub fn form(&self) -> EchelonForm {
        self.form
    }

    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|&(_, col)| col).collect()
    }

    /// Columns without a pivot (free variables of the homogeneous system)
    pub fn free_columns(&self) -> Vec<usize> {
        let pivot_cols = self.pivot_columns();
        (0..self.original.ncols())
            .filter(|col| !pivot_cols.contains(col))
            .collect()
    }

    /// Re-apply the recorded steps to the original matrix.
    pub fn replay(&self) -> Result<Array2<T>> {
        apply_all(&self.steps, &self.original)
    }

    /// A basis of the null space of the original matrix, one vector per
    /// free column.
    ///
    /// The basis is read off an RREF; for a REF reduction the RREF is
    /// computed first.
    pub fn null_space(&self) -> Vec<Array1<T>> {
        match self.form {
            EchelonForm::ReducedRowEchelon => null_space_from_rref(self),
            EchelonForm::RowEchelon => null_space_from_rref(&rref(&self.original)),
        }
    }
}

fn null_space_from_rref<T: RealField>(reduction: &Reduction<T>) -> Vec<Array1<T>> {
    let ncols = reduction.original.ncols();
    reduction
        .free_columns()
        .into_iter()
        .map(|free| {
            let mut basis = Array1::zeros(ncols);
            basis[free] = T::one();
            for &(row, col) in &reduction.pivots {
                basis[col] = -reduction.reduced[[row, free]] / reduction.reduced[[row, col]];
            }
            basis
        })
        .collect()
}

/// Reduce `matrix` to row echelon form.
pub fn row_echelon<T: RealField>(matrix: &Array2<T>) -> Reduction<T> {
    let mut work = matrix.clone();
    let mut steps = Vec::new();
    let pivots = forward_eliminate(&mut work, &mut steps);

    log::debug!(
        "REF of {}x{} matrix: rank {}, {} steps",
        matrix.nrows(),
        matrix.ncols(),
        pivots.len(),
        steps.len()
    );

    Reduction {
        original: matrix.clone(),
        reduced: work,
        pivots,
        steps,
        form: EchelonForm::RowEchelon,
    }
}

/// Reduce `matrix` to reduced row echelon form.
pub fn rref<T: RealField>(matrix: &Array2<T>) -> Reduction<T> {
    let mut work = matrix.clone();
    let mut steps = Vec::new();
    let pivots = forward_eliminate(&mut work, &mut steps);
    back_normalize(&mut work, &pivots, &mut steps);

    log::debug!(
        "RREF of {}x{} matrix: rank {}, {} steps",
        matrix.nrows(),
        matrix.ncols(),
        pivots.len(),
        steps.len()
    );

    Reduction {
        original: matrix.clone(),
        reduced: work,
        pivots,
        steps,
        form: EchelonForm::ReducedRowEchelon,
    }
}

/// Rank of `matrix`
pub fn rank<T: RealField>(matrix: &Array2<T>) -> usize {
    row_echelon(matrix).rank()
}

/// Nullity of `matrix` (columns minus rank)
pub fn nullity<T: RealField>(matrix: &Array2<T>) -> usize {
    row_echelon(matrix).nullity()
}

/// Row in `from..` with the largest magnitude in `col`, and that magnitude.
///
/// Ties keep the lowest row index.
pub(crate) fn select_pivot<T: RealField>(work: &Array2<T>, from: usize, col: usize) -> (usize, T) {
    let mut best_row = from;
    let mut best_mag = work[[from, col]].abs();
    for row in (from + 1)..work.nrows() {
        let mag = work[[row, col]].abs();
        if mag > best_mag {
            best_mag = mag;
            best_row = row;
        }
    }
    (best_row, best_mag)
}

/// Apply `op` to the working copy and append it to the trace.
pub(crate) fn record<T: RealField>(
    work: &mut Array2<T>,
    steps: &mut Vec<RowOperation<T>>,
    op: RowOperation<T>,
) {
    log::trace!("step {}: {}", steps.len(), op);
    op.apply_in_place(work);
    steps.push(op);
}

fn forward_eliminate<T: RealField>(
    work: &mut Array2<T>,
    steps: &mut Vec<RowOperation<T>>,
) -> Vec<(usize, usize)> {
    let (nrows, ncols) = work.dim();
    let mut pivots = Vec::new();
    let mut cursor = 0;

    for col in 0..ncols {
        if cursor >= nrows {
            break;
        }

        let (best_row, best_mag) = select_pivot(work, cursor, col);
        if best_mag.is_negligible() {
            continue;
        }

        if best_row != cursor {
            record(work, steps, RowOperation::Swap {
                a: cursor,
                b: best_row,
            });
        }

        let pivot = work[[cursor, col]];
        for row in (cursor + 1)..nrows {
            if work[[row, col]].is_negligible() {
                continue;
            }
            let scalar = -work[[row, col]] / pivot;
            record(work, steps, RowOperation::AddMultiple {
                target: row,
                source: cursor,
                scalar,
            });
        }

        log::trace!("pivot at ({}, {})", cursor, col);
        pivots.push((cursor, col));
        cursor += 1;
    }

    pivots
}

fn back_normalize<T: RealField>(
    work: &mut Array2<T>,
    pivots: &[(usize, usize)],
    steps: &mut Vec<RowOperation<T>>,
) {
    let nrows = work.nrows();

    for &(pivot_row, col) in pivots.iter().rev() {
        let pivot = work[[pivot_row, col]];
        if !(pivot - T::one()).is_negligible() {
            record(work, steps, RowOperation::Scale {
                row: pivot_row,
                scalar: pivot.recip(),
            });
        }

        for row in 0..nrows {
            if row == pivot_row {
                continue;
            }
            if work[[row, col]].is_negligible() {
                continue;
            }
            let scalar = -work[[row, col]] / work[[pivot_row, col]];
            record(work, steps, RowOperation::AddMultiple {
                target: row,
                source: pivot_row,
                scalar,
            });
        }
    }
}
