//! Error type returned by the validating layers.
//!
//! The per-pair kernels never fail; only [`crate::checked`] and
//! [`crate::forward`] produce these.

use thiserror::Error;

use crate::coordinates::Axis;
use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoFieldError {
    /// An input coordinate or source strength is NaN or infinite.
    #[error("{quantity} must be finite")]
    NonFinite {
        /// Name of the offending input.
        quantity: &'static str,
    },
    /// The lower bound of a prism is above its upper bound.
    #[error("inverted prism along {axis}: lower bound {lower} is above upper bound {upper}")]
    InvertedPrism {
        /// Axis with the inverted bounds.
        axis: Axis,
        /// West, south or bottom bound in meters.
        lower: Scalar,
        /// East, north or top bound in meters.
        upper: Scalar,
    },
    /// The observation point sits on or inside the prism.
    #[error("observation point lies inside or on the boundary of the prism")]
    InsidePrism,
    /// The observation point coincides with the dipole location.
    #[error("observation point coincides with the dipole")]
    CoincidentPoints,
    /// An input is outside its valid range.
    #[error("{quantity} out of range: {value}")]
    OutOfRange {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Value received.
        value: Scalar,
    },
    /// Output buffer length differs from the number of observation points.
    #[error("output buffer holds {found} values but {expected} points were given")]
    LengthMismatch {
        /// Number of observation points.
        expected: usize,
        /// Length of the output buffer.
        found: usize,
    },
}
