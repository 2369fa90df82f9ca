//! Matrix inverse by Gauss-Jordan elimination of `[M | I]`

use crate::error::{EliminationError, Result};
use crate::reduction::rref;
use crate::traits::RealField;
use ndarray::{Array2, s};

/// Invert a square matrix.
///
/// Reduces `[M | I]` to RREF; when every column of `M` carries a pivot the
/// right half is `M^-1`. Fails with [`EliminationError::NotSquare`] or
/// [`EliminationError::SingularMatrix`].
pub fn inverse<T: RealField>(matrix: &Array2<T>) -> Result<Array2<T>> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(EliminationError::NotSquare { rows, cols });
    }
    let n = rows;

    let mut augmented = Array2::zeros((n, 2 * n));
    augmented.slice_mut(s![.., ..n]).assign(matrix);
    augmented.slice_mut(s![.., n..]).assign(&Array2::<T>::eye(n));

    let reduction = rref(&augmented);
    let rank = reduction
        .pivots()
        .iter()
        .filter(|&&(_, col)| col < n)
        .count();
    if rank < n {
        log::debug!("inverse: {}x{} matrix has rank {}", n, n, rank);
        return Err(EliminationError::SingularMatrix { rank, size: n });
    }

    Ok(reduction.reduced().slice(s![.., n..]).to_owned())
}
