//! Error types for elimination, factorisation and solving.
//!
//! Every failure here is structural and deterministic: a bad shape, a
//! malformed row operation, or a matrix without an inverse. Nothing is
//! retried and no partial result is produced.

use thiserror::Error;

/// Errors that can occur while building or applying row operations,
/// factorising, solving or inverting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EliminationError {
    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the offending matrix
        rows: usize,
        /// Number of columns of the offending matrix
        cols: usize,
    },

    /// Two operands disagree on a dimension (e.g. rows of A vs length of b).
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// A scale operation with a zero factor.
    #[error("invalid row operation: cannot scale row {row} by zero")]
    ZeroScale {
        /// Row that would have been scaled
        row: usize,
    },

    /// A row operation carrying a NaN or infinite scalar.
    #[error("invalid row operation: non-finite scalar on row {row}")]
    NonFiniteScalar {
        /// Row the scalar applies to
        row: usize,
    },

    /// Swap(a, a) or AddMultiple(t, t, c).
    #[error("invalid row operation: row {row} used as both operands")]
    CoincidentRows {
        /// The repeated row index
        row: usize,
    },

    /// A row index past the end of the matrix.
    #[error("invalid row operation: row {row} out of range for {nrows} rows")]
    RowOutOfRange {
        /// The offending row index
        row: usize,
        /// Number of rows in the matrix
        nrows: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix is singular: rank {rank} < {size}")]
    SingularMatrix {
        /// Rank found by reduction
        rank: usize,
        /// Order of the square matrix
        size: usize,
    },
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, EliminationError>;

impl EliminationError {
    /// Returns `true` if this is a shape error.
    ///
    /// This includes `NotSquare` and `DimensionMismatch`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            EliminationError::NotSquare { .. } | EliminationError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if a row operation was malformed.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            EliminationError::ZeroScale { .. }
                | EliminationError::NonFiniteScalar { .. }
                | EliminationError::CoincidentRows { .. }
                | EliminationError::RowOutOfRange { .. }
        )
    }

    /// Returns `true` if the matrix was singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, EliminationError::SingularMatrix { .. })
    }
}
