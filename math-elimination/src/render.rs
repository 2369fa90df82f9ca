//! Human-readable traces
//!
//! Formatting lives here so the algorithms only ever produce structured
//! data. Steps are written as
//!
//! - `R_a <-> R_b`
//! - `R_i -> (c) * R_i`
//! - `R_t -> R_t + (c) * R_s`
//!
//! optionally followed by the matrix after the step.

use crate::direct::{LuDecomposition, Solution};
use crate::reduction::{EchelonForm, Reduction};
use crate::row_operation::RowOperation;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Decimals printed per entry
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Print the matrix after every step
    #[serde(default = "default_true")]
    pub show_matrices: bool,
    /// Label the first row `R_1` instead of `R_0`
    #[serde(default = "default_true")]
    pub one_based: bool,
}

fn default_precision() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_matrices: true,
            one_based: true,
        }
    }
}

impl RenderConfig {
    fn label(&self, row: usize) -> String {
        let base = usize::from(self.one_based);
        format!("R_{}", row + base)
    }
}

fn format_scalar<T: RealField>(value: T, precision: usize) -> String {
    // keep -0.0 and rounding residue from printing as "-0.0000"
    let value = if value.is_negligible() { 0.0 } else { value.as_f64() };
    format!("{:.*}", precision, value)
}

/// One step in arrow notation.
pub fn format_step<T: RealField>(op: &RowOperation<T>, config: &RenderConfig) -> String {
    let p = config.precision;
    match *op {
        RowOperation::Swap { a, b } => format!("{} <-> {}", config.label(a), config.label(b)),
        RowOperation::Scale { row, scalar } => {
            let r = config.label(row);
            format!("{} -> ({}) * {}", r, format_scalar(scalar, p), r)
        }
        RowOperation::AddMultiple {
            target,
            source,
            scalar,
        } => {
            let t = config.label(target);
            format!(
                "{} -> {} + ({}) * {}",
                t,
                t,
                format_scalar(scalar, p),
                config.label(source)
            )
        }
    }
}

/// A matrix as bracketed rows, one per line, each line prefixed by `indent`.
pub fn format_matrix<T: RealField>(matrix: &Array2<T>, precision: usize, indent: &str) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|&v| format_scalar(v, precision)).collect();
        out.push_str(&format!("{}[{}]\n", indent, cells.join(", ")));
    }
    out
}

fn format_vector<T: RealField>(vector: &Array1<T>, precision: usize) -> String {
    let cells: Vec<String> = vector.iter().map(|&v| format_scalar(v, precision)).collect();
    format!("[{}]", cells.join(", "))
}

/// Write every step, replaying it on a copy of `start` when matrices are
/// requested.
fn write_steps<T: RealField>(
    out: &mut String,
    start: &Array2<T>,
    steps: &[RowOperation<T>],
    config: &RenderConfig,
) {
    if steps.is_empty() {
        out.push_str("No row operations.\n");
        return;
    }

    let mut current = start.clone();
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("Step {}: {}\n", i + 1, format_step(step, config)));
        if config.show_matrices {
            // recorded steps were validated against this shape when produced
            if step.validate(current.nrows()).is_ok() {
                step.apply_in_place(&mut current);
            }
            out.push_str(&format_matrix(&current, config.precision, "  "));
        }
    }
}

/// Render a [`Reduction`].
pub fn render_reduction<T: RealField>(reduction: &Reduction<T>, config: &RenderConfig) -> String {
    let original = reduction.original();
    let form = match reduction.form() {
        EchelonForm::RowEchelon => "REF",
        EchelonForm::ReducedRowEchelon => "RREF",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} of {}x{} matrix\n",
        form,
        original.nrows(),
        original.ncols()
    ));
    out.push_str(&format!(
        "Rank: {}, nullity: {}\n",
        reduction.rank(),
        reduction.nullity()
    ));
    let pivots: Vec<String> = reduction
        .pivots()
        .iter()
        .map(|&(r, c)| format!("({}, {})", r, c))
        .collect();
    out.push_str(&format!("Pivots: [{}]\n", pivots.join(", ")));
    out.push_str("Original:\n");
    out.push_str(&format_matrix(original, config.precision, "  "));
    write_steps(&mut out, original, reduction.steps(), config);
    out.push_str("Result:\n");
    out.push_str(&format_matrix(reduction.reduced(), config.precision, "  "));
    out
}

/// Render an [`LuDecomposition`].
pub fn render_lu<T: RealField>(
    decomposition: &LuDecomposition<T>,
    config: &RenderConfig,
) -> String {
    let n = decomposition.n();
    let p = config.precision;

    let mut out = String::new();
    out.push_str(&format!("LU of {}x{} matrix\n", n, n));
    out.push_str(&format!(
        "Row swaps: {}, singular: {}\n",
        decomposition.swap_count(),
        decomposition.is_singular()
    ));
    out.push_str("Original:\n");
    out.push_str(&format_matrix(decomposition.original(), p, "  "));
    write_steps(&mut out, decomposition.original(), decomposition.steps(), config);
    out.push_str("P:\n");
    out.push_str(&format_matrix(decomposition.permutation(), p, "  "));
    out.push_str("L:\n");
    out.push_str(&format_matrix(decomposition.lower(), p, "  "));
    out.push_str("U:\n");
    out.push_str(&format_matrix(decomposition.upper(), p, "  "));
    out
}

/// Render a [`Solution`].
pub fn render_solution<T: RealField>(solution: &Solution<T>, config: &RenderConfig) -> String {
    let a = solution.matrix();
    let reduction = solution.reduction();

    let mut out = String::new();
    out.push_str(&format!(
        "System of {} equations in {} unknowns\n",
        a.nrows(),
        a.ncols()
    ));
    out.push_str(&format!("Status: {}\n", solution.status()));
    out.push_str(&format!("Rank: {}\n", solution.rank()));
    match solution.solution() {
        Some(x) => {
            out.push_str(&format!("Solution: {}\n", format_vector(x, config.precision)));
        }
        None => {
            let free: Vec<String> = solution
                .free_variables()
                .iter()
                .map(|v| format!("x_{}", v + usize::from(config.one_based)))
                .collect();
            out.push_str(&format!("Free variables: [{}]\n", free.join(", ")));
        }
    }
    out.push_str("Augmented:\n");
    out.push_str(&format_matrix(reduction.original(), config.precision, "  "));
    write_steps(&mut out, reduction.original(), reduction.steps(), config);
    out
}

impl<T: RealField> fmt::Display for RowOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_step(self, &RenderConfig::default()))
    }
}

impl<T: RealField> fmt::Display for Reduction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_reduction(self, &RenderConfig::default()))
    }
}

impl<T: RealField> fmt::Display for LuDecomposition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_lu(self, &RenderConfig::default()))
    }
}

impl<T: RealField> fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_solution(self, &RenderConfig::default()))
    }
}
