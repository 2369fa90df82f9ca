//! Elementary row operations
//!
//! A [`RowOperation`] is an immutable value describing one of the three
//! elementary operations. Applying it to a matrix returns a new matrix; the
//! input is never touched. Every operation has an inverse of the same kind.

use crate::error::{EliminationError, Result};
use crate::traits::RealField;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// One elementary row operation.
///
/// Row indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowOperation<T> {
    /// Exchange rows `a` and `b`.
    Swap {
        /// First row
        a: usize,
        /// Second row
        b: usize,
    },
    /// Multiply `row` by a non-zero `scalar`.
    Scale {
        /// Row being scaled
        row: usize,
        /// Non-zero factor
        scalar: T,
    },
    /// `target <- target + scalar * source`.
    AddMultiple {
        /// Row receiving the update
        target: usize,
        /// Row being added
        source: usize,
        /// Multiplier applied to `source`
        scalar: T,
    },
}

impl<T: RealField> RowOperation<T> {
    /// Build a swap, rejecting `a == b`.
    pub fn swap(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(EliminationError::CoincidentRows { row: a });
        }
        Ok(RowOperation::Swap { a, b })
    }

    /// Build a scale, rejecting a zero or non-finite factor.
    pub fn scale(row: usize, scalar: T) -> Result<Self> {
        check_scalar(row, scalar)?;
        if scalar.is_zero() {
            return Err(EliminationError::ZeroScale { row });
        }
        Ok(RowOperation::Scale { row, scalar })
    }

    /// Build an add-multiple, rejecting `target == source`.
    pub fn add_multiple(target: usize, source: usize, scalar: T) -> Result<Self> {
        if target == source {
            return Err(EliminationError::CoincidentRows { row: target });
        }
        check_scalar(target, scalar)?;
        Ok(RowOperation::AddMultiple {
            target,
            source,
            scalar,
        })
    }

    /// Check this operation against a matrix with `nrows` rows.
    ///
    /// The variants are public, so an operation built without the checked
    /// constructors is validated here before it touches any matrix.
    pub fn validate(&self, nrows: usize) -> Result<()> {
        let in_range = |row: usize| {
            if row < nrows {
                Ok(())
            } else {
                Err(EliminationError::RowOutOfRange { row, nrows })
            }
        };

        match *self {
            RowOperation::Swap { a, b } => {
                if a == b {
                    return Err(EliminationError::CoincidentRows { row: a });
                }
                in_range(a)?;
                in_range(b)
            }
            RowOperation::Scale { row, scalar } => {
                check_scalar(row, scalar)?;
                if scalar.is_zero() {
                    return Err(EliminationError::ZeroScale { row });
                }
                in_range(row)
            }
            RowOperation::AddMultiple {
                target,
                source,
                scalar,
            } => {
                if target == source {
                    return Err(EliminationError::CoincidentRows { row: target });
                }
                check_scalar(target, scalar)?;
                in_range(target)?;
                in_range(source)
            }
        }
    }

    /// Return a copy of `matrix` with this operation applied.
    pub fn apply(&self, matrix: &Array2<T>) -> Result<Array2<T>> {
        self.validate(matrix.nrows())?;
        let mut result = matrix.clone();
        self.apply_in_place(&mut result);
        Ok(result)
    }

    /// The operation undoing this one.
    ///
    /// Swap is its own inverse, `Scale(i, c)` inverts to `Scale(i, 1/c)` and
    /// `AddMultiple(t, s, c)` to `AddMultiple(t, s, -c)`.
    pub fn inverse(&self) -> Self {
        match *self {
            RowOperation::Swap { a, b } => RowOperation::Swap { a, b },
            RowOperation::Scale { row, scalar } => RowOperation::Scale {
                row,
                scalar: scalar.recip(),
            },
            RowOperation::AddMultiple {
                target,
                source,
                scalar,
            } => RowOperation::AddMultiple {
                target,
                source,
                scalar: -scalar,
            },
        }
    }

    /// The `n x n` elementary matrix `E` with `apply(M) == E.dot(M)`.
    pub fn elementary_matrix(&self, n: usize) -> Result<Array2<T>> {
        self.apply(&Array2::eye(n))
    }

    /// Apply without validation. Callers guarantee indices are in range.
    pub(crate) fn apply_in_place(&self, matrix: &mut Array2<T>) {
        let ncols = matrix.ncols();
        match *self {
            RowOperation::Swap { a, b } => {
                for j in 0..ncols {
                    matrix.swap([a, j], [b, j]);
                }
            }
            RowOperation::Scale { row, scalar } => {
                matrix.row_mut(row).mapv_inplace(|x| x * scalar);
            }
            RowOperation::AddMultiple {
                target,
                source,
                scalar,
            } => {
                for j in 0..ncols {
                    let update = scalar * matrix[[source, j]];
                    matrix[[target, j]] += update;
                }
            }
        }
    }

    /// Rows whose contents this operation changes.
    pub fn affected_rows(&self) -> Vec<usize> {
        match *self {
            RowOperation::Swap { a, b } => vec![a, b],
            RowOperation::Scale { row, .. } => vec![row],
            RowOperation::AddMultiple { target, .. } => vec![target],
        }
    }
}

fn check_scalar<T: RealField>(row: usize, scalar: T) -> Result<()> {
    if scalar.is_finite() {
        Ok(())
    } else {
        Err(EliminationError::NonFiniteScalar { row })
    }
}

/// Apply `steps` in order to a copy of `matrix`.
pub fn apply_all<T: RealField>(steps: &[RowOperation<T>], matrix: &Array2<T>) -> Result<Array2<T>> {
    let mut result = matrix.clone();
    for step in steps {
        step.validate(result.nrows())?;
        step.apply_in_place(&mut result);
    }
    Ok(result)
}
