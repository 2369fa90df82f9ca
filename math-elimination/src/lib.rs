//! Transparent Gaussian elimination
//!
//! This crate reduces matrices, factorises them and solves linear systems
//! while recording every elementary row operation it performs. Each result
//! carries the exact sequence of steps that produced it, so it can be
//! replayed, audited or printed.
//!
//! # Features
//!
//! - **Row operations**: swap, scale and add-multiple as plain values with
//!   apply, inverse and elementary-matrix semantics
//! - **Reduction**: REF and RREF with partial pivoting, rank, nullity, pivots
//! - **LU**: `P·A = L·U` with partial pivoting, including singular input
//! - **Solving**: unique / infinite / inconsistent classification of `Ax = b`
//! - **Inverse**: Gauss-Jordan on `[M | I]`
//! - **Rendering**: step-by-step traces in `R_2 -> R_2 + (c) * R_1` notation
//!
//! # Example
//!
//! ```
//! use math_audio_elimination::{SolutionStatus, solve};
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0], [5.0, 3.0]];
//! let b = array![1.0, 2.0];
//!
//! let solution = solve(&a, &b).unwrap();
//! assert_eq!(solution.status(), SolutionStatus::Unique);
//! for step in solution.steps() {
//!     println!("{}", step);
//! }
//! ```

pub mod direct;
pub mod error;
pub mod reduction;
pub mod render;
pub mod row_operation;
pub mod traits;

// Re-export main types
pub use error::{EliminationError, Result};
pub use row_operation::{RowOperation, apply_all};
pub use traits::RealField;

pub use reduction::{EchelonForm, Reduction, nullity, rank, row_echelon, rref};

pub use direct::{LuDecomposition, Solution, SolutionStatus, inverse, lu, lu_solve, solve};

pub use render::{RenderConfig, render_lu, render_reduction, render_solution};

/// Numerical tolerance for near-zero decisions.
///
/// This is a fixed design parameter, not a per-call option. It is used for:
/// - pivot detection in REF, RREF and LU
/// - skipping add-multiple steps whose target entry is already negligible
/// - skipping the normalising scale when a pivot is already 1
/// - detecting zero pivots on the diagonal of `U`
pub const TOLERANCE: f64 = 1e-10;
