//! Scalar abstraction used by every algorithm in the crate
//!
//! Elimination only needs a real ordered field with an absolute value, so
//! [`RealField`] is implemented for `f64` and `f32`.

use crate::TOLERANCE;
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be reduced, factorised and rendered.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (the default everywhere in tests and examples)
/// - `f32` ([`TOLERANCE`] is far below `f32::EPSILON`, so rounding residue
///   in `f32` reductions is usually kept as a genuine entry)
pub trait RealField:
    Float + NumAssign + FromPrimitive + Debug + Display + Send + Sync + 'static
{
    /// The crate-wide near-zero threshold expressed in this type.
    fn tolerance() -> Self {
        Self::from_f64(TOLERANCE).unwrap_or_else(Self::epsilon)
    }

    /// Check if this is zero within [`RealField::tolerance`]
    #[inline]
    fn is_negligible(&self) -> bool {
        self.abs() <= Self::tolerance()
    }

    /// Lossy conversion used by logging and rendering
    #[inline]
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl RealField for f64 {
    #[inline]
    fn tolerance() -> Self {
        TOLERANCE
    }
}

impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_tolerance_is_the_crate_constant() {
        assert_eq!(<f64 as RealField>::tolerance(), TOLERANCE);
    }

    #[test]
    fn test_is_negligible() {
        assert!(0.0_f64.is_negligible());
        assert!(5e-11_f64.is_negligible());
        assert!((-5e-11_f64).is_negligible());
        assert!(!1e-9_f64.is_negligible());
        assert!(!1.0_f32.is_negligible());
        assert!(0.0_f32.is_negligible());
    }
}
