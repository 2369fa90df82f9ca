//! LU decomposition with partial pivoting
//!
//! Produces `P`, `L` and `U` with `P·A = L·U` for any square `A`, singular
//! or not, together with the row operations performed. A column without a
//! usable pivot is left as is and shows up as a zero on the diagonal of `U`.

use crate::error::{EliminationError, Result};
use crate::reduction::{record, select_pivot};
use crate::row_operation::RowOperation;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU decomposition result
///
/// `L` is unit lower triangular, `U` upper triangular and `P` a permutation
/// matrix such that `P·A = L·U`.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    original: Array2<T>,
    lower: Array2<T>,
    upper: Array2<T>,
    permutation: Array2<T>,
    steps: Vec<RowOperation<T>>,
}

impl<T: RealField> LuDecomposition<T> {
    /// The factorised matrix `A`
    pub fn original(&self) -> &Array2<T> {
        &self.original
    }

    /// Unit lower triangular factor `L`
    pub fn lower(&self) -> &Array2<T> {
        &self.lower
    }

    /// Upper triangular factor `U`
    pub fn upper(&self) -> &Array2<T> {
        &self.upper
    }

    /// Permutation matrix `P`
    pub fn permutation(&self) -> &Array2<T> {
        &self.permutation
    }

    /// Swaps and eliminations performed, in order
    pub fn steps(&self) -> &[RowOperation<T>] {
        &self.steps
    }

    /// Matrix order
    pub fn n(&self) -> usize {
        self.original.nrows()
    }

    pub fn swap_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, RowOperation::Swap { .. }))
            .count()
    }

    /// Whether `U` carries a zero pivot
    pub fn is_singular(&self) -> bool {
        (0..self.n()).any(|i| self.upper[[i, i]].is_negligible())
    }

    /// `det(A)`: the permutation sign times the product of `U`'s diagonal.
    pub fn determinant(&self) -> T {
        if self.is_singular() {
            return T::zero();
        }
        let product = (0..self.n()).fold(T::one(), |acc, i| acc * self.upper[[i, i]]);
        if self.swap_count() % 2 == 0 {
            product
        } else {
            -product
        }
    }

    /// Solve `Ax = b` with the stored factors.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let n = self.n();
        if b.len() != n {
            return Err(EliminationError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        if self.is_singular() {
            let rank = (0..n)
                .filter(|&i| !self.upper[[i, i]].is_negligible())
                .count();
            return Err(EliminationError::SingularMatrix { rank, size: n });
        }

        // Pb
        let mut x = self.permutation.dot(b);

        // Forward substitution: Ly = Pb
        for i in 0..n {
            for j in 0..i {
                let l_ij = self.lower[[i, j]];
                let x_j = x[j];
                x[i] -= l_ij * x_j;
            }
        }

        // Backward substitution: Ux = y
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let u_ij = self.upper[[i, j]];
                let x_j = x[j];
                x[i] -= u_ij * x_j;
            }
            x[i] /= self.upper[[i, i]];
        }

        Ok(x)
    }
}

/// Compute the LU decomposition of a square matrix.
///
/// Fails only on non-square input. Singular matrices factorise fine; see
/// [`LuDecomposition::is_singular`].
pub fn lu<T: RealField>(a: &Array2<T>) -> Result<LuDecomposition<T>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(EliminationError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let mut upper = a.clone();
    let mut lower = Array2::<T>::eye(n);
    let mut permutation = Array2::<T>::eye(n);
    let mut steps = Vec::new();

    for k in 0..n {
        let (max_row, max_val) = select_pivot(&upper, k, k);

        if max_val.is_negligible() {
            log::debug!("LU: no pivot in column {}, matrix is singular", k);
            continue;
        }

        if max_row != k {
            let swap = RowOperation::Swap { a: k, b: max_row };
            swap.apply_in_place(&mut permutation);
            // multipliers already stored for earlier columns follow their rows
            for j in 0..k {
                lower.swap([k, j], [max_row, j]);
            }
            record(&mut upper, &mut steps, swap);
        }

        let pivot = upper[[k, k]];
        for i in (k + 1)..n {
            if upper[[i, k]].is_negligible() {
                continue;
            }
            let mult = upper[[i, k]] / pivot;
            lower[[i, k]] = mult;
            record(&mut upper, &mut steps, RowOperation::AddMultiple {
                target: i,
                source: k,
                scalar: -mult,
            });
        }
    }

    log::debug!(
        "LU of {}x{} matrix: {} steps",
        n,
        n,
        steps.len()
    );

    Ok(LuDecomposition {
        original: a.clone(),
        lower,
        upper,
        permutation,
        steps,
    })
}

/// Solve `Ax = b` using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let factorization = lu(a)?;
    factorization.solve(b)
}
